use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::utils::error::BoxResult;

/// Extensions treated as HTML documents
const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let contents = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("Failed to read {}: {}", path.as_ref().display(), e))?;
    Ok(contents)
}

/// Write a string to a file, creating parent directories if they don't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    fs::write(path.as_ref(), contents)
        .map_err(|e| format!("Failed to write {}: {}", path.as_ref().display(), e))?;
    Ok(())
}

/// Whether `path` has an HTML extension
pub fn is_html_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| HTML_EXTENSIONS.iter().any(|html| ext.eq_ignore_ascii_case(html)))
        .unwrap_or(false)
}

/// All HTML files below `dir`, sorted by path
pub fn list_html_files<P: AsRef<Path>>(dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_html_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_html_extension_check() {
        assert!(is_html_file("index.html"));
        assert!(is_html_file("docs/page.HTM"));
        assert!(!is_html_file("style.css"));
        assert!(!is_html_file("README"));
    }

    #[test]
    fn test_write_creates_parents_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/page.html");

        write_file(&path, "<p>hi</p>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_list_html_files_recurses() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path().join("index.html"), "").unwrap();
        write_file(dir.path().join("docs/guide.htm"), "").unwrap();
        write_file(dir.path().join("docs/notes.txt"), "").unwrap();

        let files = list_html_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(names, vec![PathBuf::from("docs/guide.htm"), PathBuf::from("index.html")]);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(read_file(dir.path().join("missing.html")).is_err());
    }
}
