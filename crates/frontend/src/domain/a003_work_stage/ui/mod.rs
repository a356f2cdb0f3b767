pub mod list;

pub use list::WorkStageList;
