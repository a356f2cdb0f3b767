pub mod api_client;
pub mod api_utils;
pub mod capabilities;
pub mod context;
pub mod date_utils;
pub mod icons;
pub mod reorder;
pub mod timeline;

#[cfg(test)]
pub mod testing;
