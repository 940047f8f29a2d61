// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod offline;
pub mod render;
pub mod storage;

pub use http::HttpFetcher;
pub use offline::WorkerRegistrar;
pub use render::{Document, HtmlRenderer, RecipeCard};
pub use storage::{FileStore, MemoryStore};
