use crate::errors::AppError;
use crate::models::{DEFAULT_GOAL, Entry};
use std::{
    collections::HashMap,
    future::Future,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tokio::fs;
use tracing::{debug, error};

pub const ENTRIES_KEY: &str = "weights";
pub const GOAL_KEY: &str = "goal";

pub trait BlobStore: Send + Sync {
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, AppError>> + Send;

    fn write(&self, key: &str, value: String) -> impl Future<Output = Result<(), AppError>> + Send;
}

#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl BlobStore for FileBlobStore {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, key: &str, value: String) -> Result<(), AppError> {
        fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(self, key: &str, value: impl Into<String>) -> Self {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    pub fn write_count(&self) -> usize {
        *self
            .writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobStore for MemoryBlobStore {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: String) -> Result<(), AppError> {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value);
        *self
            .writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
        Ok(())
    }
}

pub async fn load_entries<S: BlobStore>(store: &S) -> Vec<Entry> {
    let text = match store.read(ENTRIES_KEY).await {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("failed to read entries: {}", err.message);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Entry>>(&text) {
        Ok(entries) => normalize(entries),
        Err(err) => {
            error!("failed to parse entries: {err}");
            Vec::new()
        }
    }
}

pub async fn load_goal<S: BlobStore>(store: &S) -> f64 {
    match store.read(GOAL_KEY).await {
        Ok(Some(text)) => match text.trim().parse::<f64>() {
            Ok(goal) if goal.is_finite() => goal,
            _ => {
                error!("failed to parse goal: {text:?}");
                DEFAULT_GOAL
            }
        },
        Ok(None) => DEFAULT_GOAL,
        Err(err) => {
            error!("failed to read goal: {}", err.message);
            DEFAULT_GOAL
        }
    }
}

pub async fn persist_entries<S: BlobStore>(store: &S, entries: &[Entry]) -> Result<(), AppError> {
    let payload = serde_json::to_string(entries)?;
    store.write(ENTRIES_KEY, payload).await
}

pub async fn persist_goal<S: BlobStore>(store: &S, goal: f64) -> Result<(), AppError> {
    store.write(GOAL_KEY, goal.to_string()).await
}

/// Restores the store invariants on loaded data: valid weights only, one
/// entry per date (the later one wins) and ascending date order.
fn normalize(entries: Vec<Entry>) -> Vec<Entry> {
    let loaded = entries.len();
    let mut kept: Vec<Entry> = Vec::with_capacity(loaded);
    for entry in entries {
        if !entry.weight.is_finite() || entry.weight == 0.0 {
            continue;
        }
        match kept.iter_mut().find(|existing| existing.date == entry.date) {
            Some(existing) => *existing = entry,
            None => kept.push(entry),
        }
    }
    kept.sort_by_key(|entry| entry.date);
    if kept.len() != loaded {
        debug!("dropped {} invalid or duplicate entries on load", loaded - kept.len());
    }
    kept
}
