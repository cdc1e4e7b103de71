pub mod config;
pub mod dataset;
pub mod fetch;
pub mod forward;
pub mod logging;
pub mod store;
pub mod sync;

pub use config::{SyncConfig, Variant};
pub use fetch::HttpClient;
pub use store::{DiskStore, FileStore};
pub use sync::{run, SyncReport};
