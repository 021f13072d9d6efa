//! File references for endpoints that transmit media.
//!
//! A [`FileRef`] describes one binary attachment either as raw bytes to be
//! uploaded with the request, or as a string the platform resolves on its
//! side (an HTTP URL or the identifier of a previously-uploaded file). Which
//! variant is used decides the request shape: any upload forces the
//! multipart path, while all-remote calls degrade to a plain query field.

use crate::error::{BotError, Result};
use std::path::Path;

/// A reference to a file transmitted with, or addressed by, an API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRef {
    /// Raw bytes uploaded as a multipart file part.
    Upload { file_name: String, data: Vec<u8> },
    /// A URL or a file identifier the platform already knows.
    Remote(String),
}

impl FileRef {
    /// Creates a reference from in-memory bytes.
    pub fn bytes(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        FileRef::Upload {
            file_name: file_name.into(),
            data,
        }
    }

    /// Creates a reference to a file reachable over HTTP.
    pub fn url(url: impl Into<String>) -> Self {
        FileRef::Remote(url.into())
    }

    /// Creates a reference to a previously-uploaded file by its identifier.
    pub fn id(file_id: impl Into<String>) -> Self {
        FileRef::Remote(file_id.into())
    }

    /// Reads a local file into an upload reference. The multipart part keeps
    /// the file's base name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file")
            .to_string();
        Ok(FileRef::Upload { file_name, data })
    }

    /// True when sending this reference requires a multipart body.
    pub fn is_upload(&self) -> bool {
        matches!(self, FileRef::Upload { .. })
    }

    /// True when the reference carries nothing to send: an upload with an
    /// empty payload or a remote reference with an empty identifier.
    pub fn is_empty(&self) -> bool {
        match self {
            FileRef::Upload { data, .. } => data.is_empty(),
            FileRef::Remote(value) => value.is_empty(),
        }
    }

    /// Returns the remote identifier, or an error for upload references.
    /// Used on the degraded (non-multipart) path.
    pub(crate) fn remote_value(&self) -> Result<&str> {
        match self {
            FileRef::Remote(value) => Ok(value),
            FileRef::Upload { .. } => Err(BotError::invalid_argument(
                "upload reference has no remote identifier",
            )),
        }
    }
}

/// Returns true iff at least one of the given references is an upload, in
/// which case the whole call must be sent as multipart/form-data.
pub fn requires_multipart<'a, I>(refs: I) -> bool
where
    I: IntoIterator<Item = &'a FileRef>,
{
    refs.into_iter().any(FileRef::is_upload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_variant_predicates() {
        let upload = FileRef::bytes("photo.jpg", vec![1, 2, 3]);
        assert!(upload.is_upload());
        assert!(!upload.is_empty());

        let remote = FileRef::url("https://example.com/photo.jpg");
        assert!(!remote.is_upload());
        assert!(!remote.is_empty());

        assert!(FileRef::bytes("empty.bin", Vec::new()).is_empty());
        assert!(FileRef::id("").is_empty());
    }

    #[test]
    fn test_requires_multipart() {
        let upload = FileRef::bytes("a.png", vec![0]);
        let remote = FileRef::id("AgACAgIAAxk");

        assert!(requires_multipart([&upload]));
        assert!(requires_multipart([&remote, &upload]));
        assert!(!requires_multipart([&remote]));
        assert!(!requires_multipart([]));
    }

    #[test]
    fn test_remote_value() {
        let remote = FileRef::url("https://example.com/a.png");
        assert_eq!(remote.remote_value().unwrap(), "https://example.com/a.png");

        let upload = FileRef::bytes("a.png", vec![0]);
        assert!(upload.remote_value().is_err());
    }

    #[test]
    fn test_from_path() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"payload").unwrap();

        let file = tokio_test::block_on(FileRef::from_path(tmp.path())).unwrap();
        match file {
            FileRef::Upload { file_name, data } => {
                assert_eq!(data, b"payload");
                assert!(!file_name.is_empty());
            }
            FileRef::Remote(_) => panic!("expected an upload reference"),
        }
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = tokio_test::block_on(FileRef::from_path("/nonexistent/photo.jpg"));
        assert!(result.is_err());
    }
}
