//! Reading host files into data URIs

use std::future::Future;

use card_core::{FileHandle, FileSource};

use crate::data_uri::DataUri;
use crate::error::{ImageError, Result};

/// Async reads on [`FileHandle`]
pub trait FileHandleExt {
    /// Read the whole file and wrap it as a data URI tagged with the
    /// handle's declared media type. The content is not validated.
    fn read_data_uri(&self) -> impl Future<Output = Result<DataUri>> + Send;
}

impl FileHandleExt for FileHandle {
    fn read_data_uri(&self) -> impl Future<Output = Result<DataUri>> + Send {
        read_data_uri(self)
    }
}

/// Read a file handle into a data URI
pub async fn read_data_uri(handle: &FileHandle) -> Result<DataUri> {
    let data = match handle.source() {
        FileSource::Path(path) => {
            tokio::fs::read(path)
                .await
                .map_err(|source| ImageError::Read {
                    name: handle.name().to_string(),
                    source,
                })?
        }
        FileSource::Bytes(bytes) => bytes.to_vec(),
    };

    tracing::debug!(
        name = handle.name(),
        media_type = handle.media_type(),
        bytes = data.len(),
        "read file into data URI"
    );
    Ok(DataUri::new(handle.media_type(), data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_path_backed_handle() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();

        let handle = FileHandle::from_path(file.path(), "image/png");
        let uri = handle.read_data_uri().await.unwrap();

        assert_eq!(uri.media_type(), "image/png");
        assert_eq!(uri.data(), b"\x89PNG fake");
        assert!(uri.encode().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_reads_memory_handle() {
        let handle = FileHandle::from_bytes("a.gif", "image/gif", b"GIF89a".to_vec());
        let uri = handle.read_data_uri().await.unwrap();
        assert_eq!(uri.data(), b"GIF89a");
    }

    #[tokio::test]
    async fn test_missing_file_reports_name() {
        let dir = tempfile::tempdir().unwrap();
        let handle = FileHandle::from_path(dir.path().join("gone.png"), "image/png");

        let err = handle.read_data_uri().await.unwrap_err();
        match err {
            ImageError::Read { name, .. } => assert_eq!(name, "gone.png"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
