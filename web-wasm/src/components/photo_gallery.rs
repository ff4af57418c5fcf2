//! 写真ギャラリーコンポーネント

use crate::components::score_bar::ScoreBar;
use leptos::prelude::*;
use photo_rank_common::{DashboardView, RankedEntry, Shortlist};

#[component]
pub fn PhotoGallery<FS>(
    dashboard: Memo<DashboardView<'static>>,
    shortlist: ReadSignal<Shortlist>,
    on_toggle_select: FS,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="photo-gallery">
            <For
                each=move || dashboard.with(|v| v.page.clone().into_iter().enumerate().collect::<Vec<_>>())
                // 順位・スコアが変われば描き直す
                key=|(position, entry)| (entry.photo.id.clone(), *position, entry.score.to_bits())
                children=move |(position, entry)| {
                    let on_toggle_select = on_toggle_select.clone();
                    view! {
                        <PhotoCard
                            position=position + 1
                            entry=entry
                            shortlist=shortlist
                            on_toggle_select=on_toggle_select
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn PhotoCard<FS>(
    position: usize,
    entry: RankedEntry<'static>,
    shortlist: ReadSignal<Shortlist>,
    on_toggle_select: FS,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let photo = entry.photo;
    let b = entry.breakdown;

    let is_selected = {
        let photo_id = photo.id.clone();
        move || shortlist.with(|s| s.contains(&photo_id))
    };
    let is_selected_checkbox = is_selected.clone();

    let mut signals = Vec::new();
    if b.mood_matched {
        signals.push("ムード一致".to_string());
    }
    if b.matched_tags > 0 {
        signals.push(format!("タグ一致 {}", b.matched_tags));
    }
    if b.shot_penalized {
        signals.push("ショット不一致".to_string());
    }
    if b.face_penalized {
        signals.push("人数不足".to_string());
    }

    view! {
        <div class="photo-card" class:selected=is_selected>
            <img src=photo.thumbnail_url.clone() alt=photo.title.clone() />
            <div class="photo-info">
                <h4>{format!("{}. {}", position, photo.title)}</h4>
                <div class="photo-meta">
                    <span class="shot-badge">{photo.shot_type.as_str()}</span>
                    <span class="mood-badge">{photo.mood.as_str()}</span>
                    <span>{photo.location.clone()}</span>
                    <span>{format!("{}人", photo.faces)}</span>
                </div>
                <ScoreBar value=entry.score />
                <div class="signal-row">
                    {signals
                        .into_iter()
                        .map(|s| view! { <span class="signal">{s}</span> })
                        .collect_view()}
                </div>
                <div class="photo-actions">
                    <label class="select-pill">
                        <input
                            type="checkbox"
                            prop:checked=is_selected_checkbox
                            on:change={
                                let photo_id = photo.id.clone();
                                move |_| on_toggle_select(photo_id.clone())
                            }
                        />
                        "選択"
                    </label>
                </div>
            </div>
        </div>
    }
}
