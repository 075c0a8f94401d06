//! Contact popup fragment loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::server::CONTACT_POPUP_FILE;

#[derive(Debug, Error)]
pub enum PopupError {
    #[error("contact popup fragment not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read contact popup fragment {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PopupError {
    pub fn code(&self) -> &'static str {
        match self {
            PopupError::NotFound(_) => "FRAGMENT_NOT_FOUND",
            PopupError::Io { .. } => "FRAGMENT_UNAVAILABLE",
        }
    }
}

/// Read the contact popup HTML from `partials_dir`.
pub async fn load_fragment(partials_dir: &Path) -> Result<String, PopupError> {
    let path = partials_dir.join(CONTACT_POPUP_FILE);
    tokio::fs::read_to_string(&path).await.map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            PopupError::NotFound(path)
        } else {
            PopupError::Io { path, source }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_load_fragment_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONTACT_POPUP_FILE), "<form class=\"contact-form\"></form>").unwrap();
        let html = load_fragment(dir.path()).await.unwrap();
        assert!(html.contains("contact-form"));
    }

    #[actix_web::test]
    async fn test_missing_fragment_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_fragment(dir.path()).await.unwrap_err();
        assert!(matches!(err, PopupError::NotFound(_)));
        assert_eq!(err.code(), "FRAGMENT_NOT_FOUND");
    }
}
