//! File intake events
//!
//! The host delivers files either through a file picker (a single
//! [`FileHandle`]) or through a drag-and-drop gesture (a [`DropPayload`]
//! carrying any number of handles). Only handles whose declared media type
//! starts with `image/` are ever considered for the avatar.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the bytes of a file handle live
#[derive(Clone, Debug)]
pub enum FileSource {
    /// A file on disk, read lazily
    Path(PathBuf),
    /// Content already in memory (clipboard, tests, embedded hosts)
    Bytes(Arc<[u8]>),
}

/// A file offered by the host, with its declared media type
#[derive(Clone, Debug)]
pub struct FileHandle {
    name: String,
    media_type: String,
    source: FileSource,
}

impl FileHandle {
    /// Create a handle backed by a path on disk
    pub fn from_path(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            media_type: media_type.into(),
            source: FileSource::Path(path),
        }
    }

    /// Create a handle backed by in-memory bytes
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source: FileSource::Bytes(data.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type, exactly as the host reported it
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// Path on disk, if this handle is path-backed
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(path) => Some(path),
            FileSource::Bytes(_) => None,
        }
    }

    /// Whether the declared media type starts with `image/`
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Files carried by a single drop gesture, in host order
#[derive(Clone, Debug, Default)]
pub struct DropPayload {
    pub files: Vec<FileHandle>,
}

impl DropPayload {
    pub fn new(files: Vec<FileHandle>) -> Self {
        Self { files }
    }

    /// The first image in the payload; the rest are ignored
    pub fn first_image(&self) -> Option<&FileHandle> {
        let found = self.files.iter().find(|file| file.is_image());
        if found.is_none() && !self.files.is_empty() {
            tracing::trace!(count = self.files.len(), "drop payload has no image files");
        }
        found
    }
}

/// Drag gesture phases over a drop zone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// Pointer entered or moved over the zone while dragging
    Over,
    /// Pointer left the zone
    Leave,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_checks_prefix_only() {
        assert!(FileHandle::from_bytes("a", "image/png", vec![]).is_image());
        assert!(FileHandle::from_bytes("a", "image/x-anything", vec![]).is_image());
        assert!(!FileHandle::from_bytes("a", "text/plain", vec![]).is_image());
        assert!(!FileHandle::from_bytes("a", "IMAGE/PNG", vec![]).is_image());
        assert!(!FileHandle::from_bytes("a", "", vec![]).is_image());
    }

    #[test]
    fn test_first_image_skips_non_images() {
        let payload = DropPayload::new(vec![
            FileHandle::from_bytes("readme.md", "text/markdown", vec![]),
            FileHandle::from_bytes("first.jpg", "image/jpeg", vec![]),
            FileHandle::from_bytes("second.png", "image/png", vec![]),
        ]);
        assert_eq!(payload.first_image().map(FileHandle::name), Some("first.jpg"));
    }

    #[test]
    fn test_first_image_none_when_no_images() {
        let payload = DropPayload::new(vec![FileHandle::from_bytes("a.txt", "text/plain", vec![])]);
        assert!(payload.first_image().is_none());
        assert!(DropPayload::default().first_image().is_none());
    }

    #[test]
    fn test_path_handle_takes_file_name() {
        let handle = FileHandle::from_path("/tmp/photos/me.png", "image/png");
        assert_eq!(handle.name(), "me.png");
        assert_eq!(handle.path(), Some(Path::new("/tmp/photos/me.png")));
    }
}
