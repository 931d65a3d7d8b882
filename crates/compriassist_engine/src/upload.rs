use std::path::Path;

use crate::{BackendError, FailureKind};

/// Best guess at a file's MIME type from its extension.
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

pub fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Reads an image from disk, refusing non-images and files over `max_bytes`.
    pub async fn read(path: &Path, max_bytes: u64) -> Result<Self, BackendError> {
        let mime = guess_mime(path);
        if !mime.starts_with("image/") {
            return Err(BackendError::new(
                FailureKind::UnsupportedFile { mime },
                format!("{} is not an image", path.display()),
            ));
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|err| BackendError::new(FailureKind::UnreadableFile, err.to_string()))?;
        if metadata.len() > max_bytes {
            return Err(BackendError::new(
                FailureKind::TooLarge {
                    max_bytes,
                    actual: metadata.len(),
                },
                "image too large",
            ));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| BackendError::new(FailureKind::UnreadableFile, err.to_string()))?;

        Ok(Self {
            file_name: file_display_name(path),
            mime,
            bytes,
        })
    }
}
