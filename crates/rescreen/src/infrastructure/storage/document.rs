//! Reading serde documents (TOML or JSON) from disk.
//!
//! Both the layout configuration and the monitor snapshot are plain serde
//! structs.  The file extension picks the format: `.json` is parsed as JSON
//! (the format used by earlier releases of the tool), anything else as TOML.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for reading a document from disk.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The JSON content could not be parsed.
    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Chooses the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

/// Parses `content` as `format`.  `path` is only used for error messages.
///
/// # Errors
///
/// Returns [`DocumentError::Toml`] or [`DocumentError::Json`] on malformed input.
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: FileFormat,
    path: &Path,
) -> Result<T, DocumentError> {
    match format {
        FileFormat::Toml => toml::from_str(content).map_err(|source| DocumentError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        FileFormat::Json => serde_json::from_str(content).map_err(|source| DocumentError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// Returns [`DocumentError::Io`] if the file cannot be read, or a parse error.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, FileFormat::from_path(path), path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        name: String,
    }

    #[test]
    fn test_file_format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a/config.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a/config.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a/config.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(Path::new("a/config")), FileFormat::Toml);
    }

    #[test]
    fn test_parse_document_toml_and_json() {
        let path = Path::new("doc");
        let from_toml: Doc = parse_document("name = \"x\"", FileFormat::Toml, path).unwrap();
        let from_json: Doc = parse_document(r#"{"name":"x"}"#, FileFormat::Json, path).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_parse_document_reports_path_on_error() {
        let err = parse_document::<Doc>("[[[ not valid", FileFormat::Toml, Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::Toml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_read_document_missing_file_is_io_error() {
        let err = read_document::<Doc>(Path::new("/nonexistent/path/that/cannot/exist/doc.toml"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound));
    }
}
