use async_trait::async_trait;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

/// Destination for downloaded PDFs.
#[async_trait]
pub trait PdfSink: Send + Sync {
    /// Save `data` under `filename` and return where it ended up.
    async fn save(&self, filename: &str, data: Vec<u8>) -> io::Result<PathBuf>;
}

/// Saves PDFs into a local directory.
///
/// Bytes are first written to a temporary file in the same directory, which
/// is then renamed to the final name. The temporary file is removed on every
/// failure path when it is dropped.
pub struct LocalPdfSink {
    directory: PathBuf,
}

impl LocalPdfSink {
    pub async fn new(directory: impl Into<PathBuf>) -> io::Result<Self> {
        let directory = directory.into();
        if !directory.exists() {
            fs::create_dir_all(&directory).await?;
        }
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

fn check_filename(filename: &str) -> io::Result<()> {
    let plain = !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\']);

    if plain {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid PDF filename: {:?}", filename),
        ))
    }
}

#[async_trait]
impl PdfSink for LocalPdfSink {
    async fn save(&self, filename: &str, data: Vec<u8>) -> io::Result<PathBuf> {
        check_filename(filename)?;

        let directory = self.directory.clone();
        let target = directory.join(filename);

        tokio::task::spawn_blocking(move || {
            let mut temp = NamedTempFile::new_in(&directory)?;
            temp.write_all(&data)?;
            temp.as_file().sync_all()?;
            temp.persist(&target).map_err(|e| e.error)?;
            Ok(target)
        })
        .await
        .map_err(io::Error::other)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_save_writes_only_the_final_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalPdfSink::new(dir.path()).await.unwrap();

        let path = sink
            .save("B001-1234_A4.pdf", b"%PDF-1.4 test".to_vec())
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("B001-1234_A4.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 test");
        assert_eq!(entries(dir.path()), vec!["B001-1234_A4.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalPdfSink::new(dir.path()).await.unwrap();

        sink.save("B001-1_A4.pdf", b"old".to_vec()).await.unwrap();
        let path = sink.save("B001-1_A4.pdf", b"new".to_vec()).await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_new_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pdfs").join("2025");

        let sink = LocalPdfSink::new(&nested).await.unwrap();

        assert!(nested.is_dir());
        assert_eq!(sink.directory(), nested.as_path());
    }

    #[tokio::test]
    async fn test_path_like_filenames_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalPdfSink::new(dir.path()).await.unwrap();

        for name in ["../escape.pdf", "a/b.pdf", "a\\b.pdf", "", ".."] {
            let err = sink.save(name, b"x".to_vec()).await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
        assert!(entries(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_failed_persist_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalPdfSink::new(dir.path()).await.unwrap();
        // A directory occupies the target name, so the rename fails.
        std::fs::create_dir(dir.path().join("B001-9_A4.pdf")).unwrap();

        assert!(sink.save("B001-9_A4.pdf", b"x".to_vec()).await.is_err());
        assert_eq!(entries(dir.path()), vec!["B001-9_A4.pdf".to_string()]);
    }
}
