pub mod aggregate;

pub use aggregate::{ProjectDto, ProjectStatus};
