use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::QuillError;

/// Write the draft's plain text to `essay_<YYYY-MM-DD>.txt` in `dir`,
/// returning the path written.
pub fn export_essay(text: &str, dir: &Path) -> Result<PathBuf, QuillError> {
    let filename = format!("essay_{}.txt", Local::now().format("%Y-%m-%d"));
    let path = dir.join(filename);
    fs::write(&path, text)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_essay("Essay body.", dir.path()).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("essay_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Essay body.");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(export_essay("text", &missing).is_err());
    }
}
