//! Ручная сортировка списков перетаскиванием.
//!
//! `ReorderableList` хранит порядок, применяет перемещение сразу
//! (оптимистично) и откатывает его целиком, если сервер не подтвердил.
//! `ReorderResource` связывает его с реактивным состоянием Leptos.

pub mod list;
pub mod resource;
pub mod snapshot;

pub use list::{CommitOutcome, DisplayFilter, ReorderableList};
pub use resource::ReorderResource;
pub use snapshot::OrderSnapshot;
