pub mod api;
pub mod filter;
pub mod timeline;
pub mod ui;
