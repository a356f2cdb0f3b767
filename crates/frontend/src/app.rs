use crate::domain::a001_project::ui::ProjectList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::api::get_current_user;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let global = AppGlobalContext::new();
    provide_context(global.clone());

    // Без прав пользователя списки остаются только для чтения
    let client = global.client.clone();
    let permissions = global.permissions;
    spawn_local(async move {
        match get_current_user(&client).await {
            Ok(user) => permissions.set(user.effective_permissions()),
            Err(e) => log::warn!("current user unavailable, lists stay read-only: {}", e),
        }
    });

    view! {
        <div class="app-shell">
            <ProjectList />
        </div>
    }
}
