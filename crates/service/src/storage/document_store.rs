use std::{ffi::OsString, io, marker::PhantomData, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, #[source] source: io::Error },
    #[error("cannot decode {}: {source}", path.display())]
    Decode { path: PathBuf, #[source] source: serde_json::Error },
    #[error("cannot encode {}: {source}", path.display())]
    Encode { path: PathBuf, #[source] source: serde_json::Error },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, #[source] source: io::Error },
}

/// Whole-collection JSON document store.
///
/// The file at `file_path` holds one JSON document of type `T`. Every call
/// goes to disk; nothing is cached. All access to the file goes through a
/// single mutex so that a load-mutate-save cycle run via [`update`] cannot
/// interleave with another one on the same collection.
///
/// [`update`]: JsonDocumentStore::update
pub struct JsonDocumentStore<T> {
    file_path: PathBuf,
    lock: Mutex<()>,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonDocumentStore<T>
where
    T: Serialize + DeserializeOwned + Default + Send,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), lock: Mutex::new(()), _doc: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole collection.
    pub async fn load(&self) -> Result<T, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_doc().await
    }

    /// Replace the whole collection on disk.
    pub async fn save(&self, doc: &T) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write_doc(doc).await
    }

    /// Create the file holding an empty collection if it does not exist yet.
    /// Returns whether the file was created.
    pub async fn ensure_exists(&self) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let exists = fs::try_exists(&self.file_path)
            .await
            .map_err(|source| StoreError::Read { path: self.file_path.clone(), source })?;
        if exists {
            debug!(path = %self.file_path.display(), "collection file exists, no action needed");
            return Ok(false);
        }
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Write { path: self.file_path.clone(), source })?;
        }
        self.write_doc(&T::default()).await?;
        info!(path = %self.file_path.display(), "created collection file");
        Ok(true)
    }

    /// Run one load-mutate-save cycle under the collection lock.
    ///
    /// If `f` returns an error the document is not written back.
    pub async fn update<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E> + Send,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.read_doc().await?;
        let out = f(&mut doc)?;
        self.write_doc(&doc).await?;
        Ok(out)
    }

    async fn read_doc(&self) -> Result<T, StoreError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|source| StoreError::Read { path: self.file_path.clone(), source })?;
        debug!(path = %self.file_path.display(), bytes = bytes.len(), "loaded collection");
        serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Decode { path: self.file_path.clone(), source })
    }

    /// Write to a sibling temp file, then rename over the target so readers
    /// only ever see a complete document.
    async fn write_doc(&self, doc: &T) -> Result<(), StoreError> {
        let data = encode_pretty(doc)
            .map_err(|source| StoreError::Encode { path: self.file_path.clone(), source })?;
        let tmp = self.tmp_path();
        let write_err = |source| StoreError::Write { path: self.file_path.clone(), source };

        fs::write(&tmp, &data).await.map_err(write_err)?;
        if let Err(e) = fs::rename(&tmp, &self.file_path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(write_err(e));
        }
        debug!(path = %self.file_path.display(), bytes = data.len(), "saved collection");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self.file_path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// JSON with four-space indentation, matching the files the service has always written.
fn encode_pretty<T: Serialize>(doc: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
