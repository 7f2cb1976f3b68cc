use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocsDir(String),
}

/// Read an area document and return its content
pub fn read_document(relative_path: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// List the markdown documents in the documents directory, sorted
pub fn scan_documents(docs_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !docs_root.exists() {
        return Err(IoError::InvalidDocsDir(
            "documents directory not found".to_string(),
        ));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(docs_root).map_err(IoError::Io)? {
        let path = entry.map_err(IoError::Io)?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "md"
        {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_document(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_read_document() {
        let docs_dir = TempDir::new().unwrap();
        create_document(&docs_dir, "PERSONALIZACION.md", "OBJETIVO 1: Título");

        let content =
            read_document(RelativePath::new("PERSONALIZACION.md"), docs_dir.path()).unwrap();
        assert_eq!(content, "OBJETIVO 1: Título");
    }

    #[test]
    fn test_read_missing_document() {
        let docs_dir = TempDir::new().unwrap();
        let result = read_document(RelativePath::new("missing.md"), docs_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_scan_documents_sorted_markdown_only() {
        let docs_dir = TempDir::new().unwrap();
        create_document(&docs_dir, "PROGRESION-EVALUACION.md", "");
        create_document(&docs_dir, "PERSONALIZACION.md", "");
        create_document(&docs_dir, "notas.txt", "");

        let documents = scan_documents(docs_dir.path()).unwrap();
        let names: Vec<_> = documents
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["PERSONALIZACION.md", "PROGRESION-EVALUACION.md"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = scan_documents(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("documents directory")
        );
    }

    #[test]
    fn test_validate_docs_dir() {
        let docs_dir = TempDir::new().unwrap();
        assert!(validate_docs_dir(docs_dir.path()).is_ok());
        assert!(validate_docs_dir(Path::new("/nonexistent/path")).is_err());
    }
}
