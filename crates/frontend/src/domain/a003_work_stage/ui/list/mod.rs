use crate::domain::a003_work_stage::api::{fetch_work_stages, WORK_STAGES_REORDER_PATH};
use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::reorder::ReorderResource;
use contracts::domain::a003_work_stage::WorkStageDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn date_or_dash(raw: &Option<String>) -> String {
    raw.as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(format_date)
        .unwrap_or_else(|| "—".to_string())
}

/// Этапы работ одного изделия с ручной сортировкой
#[component]
pub fn WorkStageList(#[prop(into)] product_id: String) -> impl IntoView {
    let global = use_global_context();
    let client = StoredValue::new(global.client.clone());
    let permissions = global.permissions;
    let product_id = StoredValue::new(product_id);

    let stages = ReorderResource::<WorkStageDto>::new();
    let dragged = RwSignal::new(None::<String>);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let perms = permissions.get();
        stages.apply_capabilities(&perms);
    });

    let load = move || {
        let client = client.get_value();
        let product_id = product_id.get_value();
        spawn_local(async move {
            match fetch_work_stages(&client, &product_id).await {
                Ok(items) => {
                    set_error.set(None);
                    stages.set_items(items);
                }
                Err(e) => {
                    log::error!("work stages of {}: load failed: {}", product_id, e);
                    set_error.set(Some(format!(
                        "Не удалось загрузить этапы: {}",
                        e.user_message()
                    )));
                }
            }
        });
    };

    Effect::new(move |_| load());

    let drop_on = move |over_id: String| {
        let Some(active_id) = dragged.get_untracked() else {
            return;
        };
        dragged.set(None);
        stages.move_and_commit(
            client.get_value(),
            WORK_STAGES_REORDER_PATH.to_string(),
            active_id,
            over_id,
        );
    };

    view! {
        <div class="work-stage-list">
            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            {move || {
                stages.error().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div style="display: flex; align-items: center; gap: var(--spacing-sm); width: 100%;">
                            <span style="flex: 1;">{message}</span>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                on_click=move |_| stages.dismiss_error()
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    </MessageBar>
                })
            }}

            <table class="table" style="width: 100%;">
                <thead>
                    <tr>
                        <th style="width: 32px;"></th>
                        <th>"Этап"</th>
                        <th>"Начало"</th>
                        <th>"Окончание"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || stages.visible()
                        key=|stage| stage.id.clone()
                        children=move |stage: WorkStageDto| {
                            let id_for_start = stage.id.clone();
                            let id_for_drop = stage.id.clone();

                            view! {
                                <tr
                                    class="table__row"
                                    draggable=move || if stages.can_move() { "true" } else { "false" }
                                    on:dragstart=move |_| dragged.set(Some(id_for_start.clone()))
                                    on:dragend=move |_| dragged.set(None)
                                    on:dragover=move |ev| ev.prevent_default()
                                    on:drop=move |ev| {
                                        ev.prevent_default();
                                        drop_on(id_for_drop.clone());
                                    }
                                >
                                    <td class="table__cell--handle">{icon("grip")}</td>
                                    <td>{stage.description.clone()}</td>
                                    <td>{date_or_dash(&stage.start_date)}</td>
                                    <td>{date_or_dash(&stage.end_date)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
