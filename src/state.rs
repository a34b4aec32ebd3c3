use crate::records::Tracker;
use crate::storage::FileBlobStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker<FileBlobStore>>>,
}

impl AppState {
    pub fn new(tracker: Tracker<FileBlobStore>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
