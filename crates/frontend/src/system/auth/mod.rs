pub mod api;
pub mod storage;

pub use storage::BrowserContext;
