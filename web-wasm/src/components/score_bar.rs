//! スコアバーコンポーネント

use leptos::prelude::*;

/// 0.0〜1.0 の値を横棒で表示
#[component]
pub fn ScoreBar(value: f64, #[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let percent = (value.clamp(0.0, 1.0) * 100.0).round();

    view! {
        <div class="score-container">
            <div class="score-bar">
                <div class="score-fill" style=format!("width: {}%", percent) />
            </div>
            <p class="score-text">
                {label.map(|l| format!("{} ", l))}
                {format!("{:.3}", value)}
            </p>
        </div>
    }
}
