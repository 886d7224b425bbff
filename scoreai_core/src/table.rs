//! Scoring records and the append-only result table.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::Result;
use crate::richness::Richness;
use crate::tags::{TagCounts, TagVocabulary};

/// One output row: a single memory of a single participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRecord {
    pub participant_id: String,
    /// 1-based memory ordinal.
    pub memory: usize,
    pub tag_counts: TagCounts,
    pub episodic_richness: Richness,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    records: Vec<ScoringRecord>,
}

impl ResultTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append every record of one document.
    pub fn append(&mut self, records: Vec<ScoringRecord>) {
        self.records.extend(records);
    }

    #[must_use]
    pub fn records(&self) -> &[ScoringRecord] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the table as CSV: `ParticipantID, Memory, <tags...>, ER`.
    pub fn write_csv<W: Write>(&self, writer: W, vocabulary: &TagVocabulary) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        let mut header = vec!["ParticipantID", "Memory"];
        header.extend(vocabulary.iter());
        header.push("ER");
        csv.write_record(&header)?;

        for record in &self.records {
            let mut row = Vec::with_capacity(header.len());
            row.push(record.participant_id.clone());
            row.push(record.memory.to_string());
            row.extend(record.tag_counts.as_array().iter().map(ToString::to_string));
            row.push(record.episodic_richness.to_string());
            csv.write_record(&row)?;
        }

        csv.flush()?;
        Ok(())
    }
}

/// Output file name: `scoring_<YYYYMMDD>_n<documents>.csv`.
#[must_use]
pub fn output_file_name(date: NaiveDate, documents: usize) -> String {
    format!("scoring_{}_n{documents}.csv", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TAG_COUNT;

    fn record(id: &str, memory: usize, ev: usize, er: Richness) -> ScoringRecord {
        let mut counts = [0; TAG_COUNT];
        counts[0] = ev;
        ScoringRecord {
            participant_id: id.to_string(),
            memory,
            tag_counts: TagCounts::new(counts),
            episodic_richness: er,
        }
    }

    #[test]
    fn append_preserves_order() {
        let mut table = ResultTable::new();
        table.append(vec![record("P1", 1, 0, Richness::Code('2'))]);
        table.append(Vec::new());
        table.append(vec![
            record("P2", 1, 0, Richness::Code('3')),
            record("P2", 2, 0, Richness::Missing),
        ]);

        let ids: Vec<_> = table
            .records()
            .iter()
            .map(|r| (r.participant_id.as_str(), r.memory))
            .collect();
        assert_eq!(ids, vec![("P1", 1), ("P2", 1), ("P2", 2)]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn writes_header_and_rows() {
        let mut table = ResultTable::new();
        table.append(vec![
            record("P001", 1, 2, Richness::Code('4')),
            record("P001", 2, 0, Richness::Missing),
        ]);

        let mut out = Vec::new();
        table
            .write_csv(&mut out, &TagVocabulary::default())
            .expect("CSV should be written");
        let text = String::from_utf8(out).expect("CSV is UTF-8");
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "ParticipantID,Memory,Int_EV,Int_PERC,Int_EMO,Int_PL,Int_TM,Ext_EV,Ext_SEM,Ext_REP,Ext_OTH,ER"
        );
        assert_eq!(lines[1], "P001,1,2,0,0,0,0,0,0,0,0,4");
        assert_eq!(lines[2], "P001,2,0,0,0,0,0,0,0,0,0,missing");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_table_writes_header_only() {
        let mut out = Vec::new();
        ResultTable::new()
            .write_csv(&mut out, &TagVocabulary::default())
            .expect("CSV should be written");
        assert_eq!(String::from_utf8_lossy(&out).lines().count(), 1);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn file_name_has_date_and_document_count() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 11).expect("valid date");
        assert_eq!(output_file_name(date, 12), "scoring_20200511_n12.csv");
    }
}
