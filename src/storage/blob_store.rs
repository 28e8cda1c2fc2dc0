use std::{
    io::ErrorKind,
    path::PathBuf,
};

use anyhow::Result;
use async_trait::async_trait;
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::debug;

/// Key the whole record collection is stored under.
pub const RECORDS_KEY: &str = "shift-records";

/// Interface for abstracting the key-value store that holds the record
/// blob. The collection is always read and written as a whole.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore {
    /// Reads the blob stored under `key`. A key that was never written
    /// reads as `None`.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    async fn save(&self, key: &str, blob: &str) -> Result<()>;
}

/// The main realization of [BlobStore]. Keys map to json files inside the
/// store directory.
pub struct FileBlobStore {
    store_dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(store_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&store_dir)?;

        Ok(Self { store_dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.json"))
    }

    async fn write_whole(file: &mut File, blob: &str) -> Result<()> {
        file.write_all(blob.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        debug!("Loading {path:?}");
        let mut file = match File::open(&path).await {
            Ok(v) => v,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        file.lock_shared()?;
        let mut blob = String::new();
        let result = file.read_to_string(&mut blob).await;
        file.unlock_async().await?;
        result?;
        Ok(Some(blob))
    }

    async fn save(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.blob_path(key);
        debug!("Saving {path:?}");
        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .await?;

        // Semi-safe acquire-release for a file
        file.lock_exclusive()?;
        let result = Self::write_whole(&mut file, blob).await;
        file.unlock_async().await?;
        result
    }
}
