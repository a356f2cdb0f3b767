pub mod state;

use self::state::create_state;
use crate::domain::a001_project::api::{fetch_projects, PROJECTS_REORDER_PATH};
use crate::domain::a001_project::timeline::{load_timelines, ProjectTimeline};
use crate::domain::a003_work_stage::ui::WorkStageList;
use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::format_instant;
use crate::shared::icons::icon;
use crate::shared::reorder::ReorderResource;
use crate::shared::timeline::{earliest_start, latest_end};
use contracts::domain::a001_project::{ProjectDto, ProjectStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

fn timeline_cell(
    timelines: RwSignal<HashMap<String, ProjectTimeline>>,
    project_id: String,
    pick: fn(&ProjectTimeline) -> Option<chrono::DateTime<chrono::Utc>>,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        timelines.with(|t| {
            t.get(&project_id)
                .and_then(pick)
                .map(|d| format_instant(&d))
                .unwrap_or_else(|| "—".to_string())
        })
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let global = use_global_context();
    let client = StoredValue::new(global.client.clone());
    let permissions = global.permissions;

    let state = create_state(global.client.context());
    let projects = ReorderResource::<ProjectDto>::new();
    let timelines = RwSignal::new(HashMap::<String, ProjectTimeline>::new());
    let dragged = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let perms = permissions.get();
        projects.apply_capabilities(&perms);
    });

    let status_filter = Memo::new(move |_| state.with(|s| s.status_filter.clone()));
    Effect::new(move |_| {
        projects.set_filter(Some(status_filter.get().to_display_filter()));
    });

    let load = move || {
        let client = client.get_value();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match fetch_projects(&client).await {
                Ok(items) => {
                    projects.set_items(items.clone());
                    // колонки сроков считаются только после загрузки всех проектов
                    let loaded = load_timelines(&client, &items).await;
                    timelines.set(loaded);
                }
                Err(e) => {
                    log::error!("projects: load failed: {}", e);
                    set_error.set(Some(format!(
                        "Не удалось загрузить проекты: {}",
                        e.user_message()
                    )));
                }
            }

            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let toggle_status = move |status: ProjectStatus| {
        state.update(|s| s.status_filter.toggle(status));
        let filter = state.with_untracked(|s| s.status_filter.clone());
        filter.save(client.get_value().context());
    };

    let drop_on = move |over_id: String| {
        let Some(active_id) = dragged.get_untracked() else {
            return;
        };
        dragged.set(None);
        projects.move_and_commit(
            client.get_value(),
            PROJECTS_REORDER_PATH.to_string(),
            active_id,
            over_id,
        );
    };

    view! {
        <div class="page">
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        <span class="filter-panel__title">"Проекты"</span>
                        <Show when=move || projects.is_reordering()>
                            <span class="badge badge--secondary">"Сохранение порядка..."</span>
                        </Show>
                    </div>

                    <div class="filter-panel-header__center">
                        {ProjectStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <label class="filter-panel__option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || status_filter.get().contains(status)
                                            on:change=move |_| toggle_status(status)
                                        />
                                        {status.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="filter-panel-header__right">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| load()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {icon("refresh")}
                            {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                        </Button>
                    </div>
                </div>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            {move || {
                projects.error().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div style="display: flex; align-items: center; gap: var(--spacing-sm); width: 100%;">
                            <span style="flex: 1;">{message}</span>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                on_click=move |_| projects.dismiss_error()
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    </MessageBar>
                })
            }}

            <div class="table-wrapper">
                <table class="table" style="width: 100%;">
                    <thead>
                        <tr>
                            <th style="width: 32px;"></th>
                            <th>"Код"</th>
                            <th>"Наименование"</th>
                            <th>"Статус"</th>
                            <th>"Начало"</th>
                            <th>"Окончание"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || projects.visible()
                            key=|project| project.id.clone()
                            children=move |project: ProjectDto| {
                                let id = project.id.clone();
                                let id_for_class = id.clone();
                                let id_for_start = id.clone();
                                let id_for_drop = id.clone();
                                let id_for_select = id.clone();

                                view! {
                                    <tr
                                        class=move || {
                                            if dragged.get().as_deref() == Some(id_for_class.as_str()) {
                                                "table__row table__row--dragging"
                                            } else {
                                                "table__row"
                                            }
                                        }
                                        draggable=move || if projects.can_move() { "true" } else { "false" }
                                        on:dragstart=move |_| dragged.set(Some(id_for_start.clone()))
                                        on:dragend=move |_| dragged.set(None)
                                        on:dragover=move |ev| ev.prevent_default()
                                        on:drop=move |ev| {
                                            ev.prevent_default();
                                            drop_on(id_for_drop.clone());
                                        }
                                    >
                                        <td class="table__cell--handle">{icon("grip")}</td>
                                        <td>
                                            <span style="font-family: monospace; font-size: var(--font-size-xs);">
                                                {project.code.clone()}
                                            </span>
                                        </td>
                                        <td>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    state.update(|s| s.selected_project_id = Some(id_for_select.clone()));
                                                }
                                            >
                                                {project.description.clone()}
                                            </a>
                                        </td>
                                        <td>{project.status.label()}</td>
                                        <td>{timeline_cell(timelines, id.clone(), earliest_start::<ProjectTimeline>)}</td>
                                        <td>{timeline_cell(timelines, id.clone(), latest_end::<ProjectTimeline>)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            {move || {
                let selected = state.with(|s| s.selected_project_id.clone())?;
                let timeline = timelines.with(|t| t.get(&selected).cloned())?;
                Some(view! {
                    <div class="details-panel">
                        <h3 class="details-panel__title">"Изделия проекта"</h3>
                        {timeline
                            .products
                            .into_iter()
                            .map(|entry| {
                                let product_id = entry.product.id.clone();
                                view! {
                                    <section class="details-panel__section">
                                        <h4>{entry.product.description.clone()}</h4>
                                        <WorkStageList product_id=product_id />
                                    </section>
                                }
                            })
                            .collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
