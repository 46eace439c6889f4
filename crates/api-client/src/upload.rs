//! Log file payload for `POST /games/upload`.

use std::path::Path;

use crate::error::Error;

/// A log file selected for upload, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl LogFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads a log file from disk, keeping only its file name for the
    /// multipart part.
    pub async fn read(path: &Path) -> Result<Self, Error> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "games.log".into());
        Ok(Self { file_name, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_keeps_file_name_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qgames.log");
        std::fs::write(&path, b"  0:00 InitGame: \\sv_hostname\\Code Miner Server").unwrap();

        let file = LogFile::read(&path).await.unwrap();
        assert_eq!(file.file_name, "qgames.log");
        assert!(file.bytes.starts_with(b"  0:00 InitGame"));
    }

    #[tokio::test]
    async fn read_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = LogFile::read(&dir.path().join("missing.log"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
