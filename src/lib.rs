pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notice;
pub mod pagination;
pub mod records;
pub mod stats;
pub mod storage;
pub mod trend;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use records::Tracker;
pub use state::AppState;
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore};
