use leptos::prelude::*;

use crate::domain::a001_project::filter::ProjectStatusFilter;
use crate::shared::context::ClientContext;

#[derive(Clone, Debug, Default)]
pub struct ProjectListState {
    // filters
    pub status_filter: ProjectStatusFilter,

    // selection
    pub selected_project_id: Option<String>,
}

pub fn create_state(context: &impl ClientContext) -> RwSignal<ProjectListState> {
    RwSignal::new(ProjectListState {
        status_filter: ProjectStatusFilter::load(context),
        selected_project_id: None,
    })
}
