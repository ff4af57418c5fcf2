//! ヒーロー候補（絞り込み後の最上位）

use crate::components::score_bar::ScoreBar;
use leptos::prelude::*;
use photo_rank_common::DashboardView;

#[component]
pub fn HeroCard(dashboard: Memo<DashboardView<'static>>) -> impl IntoView {
    move || {
        dashboard.with(|view| {
            view.hero.as_ref().map(|hero| {
                let photo = hero.photo;
                let notes: Vec<&str> = photo.client_notes.iter().map(String::as_str).collect();
                let b = hero.breakdown;

                view! {
                    <div class="hero-card">
                        <img src=photo.image_url.clone() alt=photo.title.clone() />
                        <div class="hero-info">
                            <span class="hero-badge">"ヒーロー候補"</span>
                            <h2>{photo.title.clone()}</h2>
                            <p>{format!("{} / {} / {}", photo.shot_type, photo.mood, photo.location)}</p>
                            <ScoreBar value=hero.score label="総合" />
                            <p class="breakdown">
                                {format!(
                                    "技術 {:.3} + ストーリー {:.3} + 適合 {:.3}",
                                    b.technical, b.storytelling, b.client_alignment
                                )}
                            </p>
                            {(!notes.is_empty()).then(|| view! {
                                <p class="client-notes">{format!("メモ: {}", notes.join(" / "))}</p>
                            })}
                        </div>
                    </div>
                }
            })
        })
    }
}
