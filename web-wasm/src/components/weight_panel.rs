//! 重みスライダーコンポーネント

use leptos::prelude::*;
use photo_rank_common::weights::{SLIDER_MAX, SLIDER_MIN};
use photo_rank_common::{NormalizedWeights, ScoringWeights};

#[component]
pub fn WeightPanel(
    weights: ReadSignal<ScoringWeights>,
    set_weights: WriteSignal<ScoringWeights>,
    normalized: Memo<NormalizedWeights>,
) -> impl IntoView {
    view! {
        <div class="settings-panel weight-panel">
            <h3>"評価の重み"</h3>
            <WeightSlider
                id="weight-technical"
                label="技術"
                weights=weights
                set_weights=set_weights
                normalized=normalized
                get=|w| w.technical
                set=|w, v| w.technical = v
                share=|n| n.technical()
            />
            <WeightSlider
                id="weight-storytelling"
                label="ストーリー"
                weights=weights
                set_weights=set_weights
                normalized=normalized
                get=|w| w.storytelling
                set=|w, v| w.storytelling = v
                share=|n| n.storytelling()
            />
            <WeightSlider
                id="weight-alignment"
                label="クライアント適合"
                weights=weights
                set_weights=set_weights
                normalized=normalized
                get=|w| w.client_alignment
                set=|w, v| w.client_alignment = v
                share=|n| n.client_alignment()
            />
            <button
                class="btn btn-tertiary btn-small"
                on:click=move |_| set_weights.set(ScoringWeights::default())
            >
                "初期値に戻す"
            </button>
        </div>
    }
}

#[component]
fn WeightSlider(
    id: &'static str,
    label: &'static str,
    weights: ReadSignal<ScoringWeights>,
    set_weights: WriteSignal<ScoringWeights>,
    normalized: Memo<NormalizedWeights>,
    get: fn(&ScoringWeights) -> f64,
    set: fn(&mut ScoringWeights, f64),
    share: fn(&NormalizedWeights) -> f64,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="range"
                id=id
                min=SLIDER_MIN.to_string()
                max=SLIDER_MAX.to_string()
                step="1"
                prop:value=move || weights.with(|w| get(w)).to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                        set_weights.update(|w| set(w, value));
                    }
                }
            />
            <span class="weight-share">
                {move || format!("{:.0}%", normalized.with(|n| share(n)) * 100.0)}
            </span>
        </div>
    }
}
