//! 絞り込みコンポーネント（チップ・検索・選択済みのみ）

use leptos::prelude::*;
use photo_rank_common::{DashboardView, FilterState, Mood, ShotType};

#[component]
pub fn FilterBar(
    filters: ReadSignal<FilterState>,
    set_filters: WriteSignal<FilterState>,
    locations: Vec<String>,
    dashboard: Memo<DashboardView<'static>>,
) -> impl IntoView {
    let shot_chips = ShotType::ALL
        .into_iter()
        .map(|shot| {
            view! {
                <button
                    class="chip"
                    class:active=move || filters.with(|f| f.shot_types.contains(&shot))
                    on:click=move |_| {
                        set_filters.update(|f| {
                            f.toggle_shot(shot);
                        });
                    }
                >
                    {shot.as_str()}
                </button>
            }
        })
        .collect_view();

    let mood_chips = Mood::ALL
        .into_iter()
        .map(|mood| {
            view! {
                <button
                    class="chip"
                    class:active=move || filters.with(|f| f.moods.contains(&mood))
                    on:click=move |_| {
                        set_filters.update(|f| {
                            f.toggle_mood(mood);
                        });
                    }
                >
                    {mood.as_str()}
                </button>
            }
        })
        .collect_view();

    let location_chips = locations
        .into_iter()
        .map(|location| {
            let active = location.clone();
            let label = location.clone();
            view! {
                <button
                    class="chip"
                    class:active=move || filters.with(|f| f.locations.contains(&active))
                    on:click=move |_| {
                        set_filters.update(|f| {
                            f.toggle_location(&location);
                        });
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="filter-bar">
            <div class="chip-row">{shot_chips}</div>
            <div class="chip-row">{mood_chips}</div>
            <div class="chip-row">{location_chips}</div>

            <div class="filter-actions">
                <input
                    type="search"
                    placeholder="タイトル・場所・タグ・メモで検索..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        set_filters.update(|f| f.search = search);
                    }
                />
                <label class="select-pill">
                    <input
                        type="checkbox"
                        prop:checked=move || filters.with(|f| f.show_selected_only)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            set_filters.update(|f| f.show_selected_only = checked);
                        }
                    />
                    "選択済みのみ"
                </label>
                <button
                    class="btn btn-tertiary btn-small"
                    disabled=move || !filters.with(|f| f.is_active())
                    on:click=move |_| set_filters.update(|f| f.clear())
                >
                    "絞り込み解除"
                </button>
                <span class="filter-count">
                    {move || dashboard.with(|v| format!("{} / {}枚", v.filtered_count, v.catalog_count))}
                </span>
            </div>
        </div>
    }
}
