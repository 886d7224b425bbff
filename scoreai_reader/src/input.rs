use std::path::{Path, PathBuf};

use scoreai_core::Result;
use tracing::debug;

pub const DOCX_EXTENSION: &str = "docx";

/// Word writes `~$name.docx` owner files next to open documents.
const LOCK_FILE_PREFIX: &str = "~$";

/// `.docx` files directly inside `dir`, sorted by name.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(LOCK_FILE_PREFIX) {
            debug!("Ignoring Word lock file {name}");
            continue;
        }

        let is_docx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCX_EXTENSION));
        if is_docx {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn lists_docx_files_in_name_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        for name in ["p2.docx", "p1.DOCX", "~$p1.docx", "notes.txt", "p3.doc"] {
            std::fs::write(dir.path().join(name), b"").expect("write fixture");
        }
        std::fs::create_dir(dir.path().join("nested.docx")).expect("create dir");

        let names: Vec<String> = list_documents(dir.path())
            .expect("directory should list")
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
            .collect();

        assert_eq!(names, vec!["p1.DOCX", "p2.docx"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(list_documents(&dir.path().join("absent")).is_err());
    }
}
