//! メインアプリケーションコンポーネント

use crate::components::{
    filter_bar::FilterBar,
    header::Header,
    hero_card::HeroCard,
    photo_gallery::PhotoGallery,
    profile_panel::ProfilePanel,
    shortlist_panel::ShortlistPanel,
    weight_panel::WeightPanel,
};
use crate::download;
use leptos::prelude::*;
use photo_rank_common::catalog::{sample_catalog, sample_profile};
use photo_rank_common::dashboard::{available_locations, DEFAULT_PAGE_SIZE};
use photo_rank_common::export::file_name_for;
use photo_rank_common::{
    build_view, rank, FilterState, NormalizedWeights, Photo, ScoringWeights, Shortlist,
    ShortlistDelivery,
};
use std::sync::LazyLock;

/// 組み込みカタログ（セッション中は不変）
static CATALOG: LazyLock<Vec<Photo>> = LazyLock::new(sample_catalog);

/// スライダーの値を正規化。不正な場合は均等配分
pub fn resolve_weights(weights: &ScoringWeights) -> (NormalizedWeights, Option<String>) {
    match weights.normalize() {
        Ok(normalized) => (normalized, None),
        Err(e) => (NormalizedWeights::uniform(), Some(e.to_string())),
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 調整可能な入力
    let (weights, set_weights) = signal(ScoringWeights::default());
    let (profile, set_profile) = signal(sample_profile());

    // 画面の状態
    let (filters, set_filters) = signal(FilterState::default());
    let (shortlist, set_shortlist) = signal(Shortlist::new());
    let (title, set_title) = signal("ショートリスト".to_string());

    let normalized = Memo::new(move |_| {
        let (normalized, warning) = resolve_weights(&weights.get());
        if let Some(warning) = warning {
            gloo::console::warn!(format!("均等配分で計算します: {}", warning));
        }
        normalized
    });

    // 重み・プロファイルが変わるたびに再ランキング
    let ranked = Memo::new(move |_| {
        profile.with(|profile| rank(CATALOG.as_slice(), &normalized.get(), profile))
    });

    let dashboard = Memo::new(move |_| {
        ranked.with(|ranked| {
            filters.with(|filters| {
                shortlist.with(|shortlist| build_view(ranked, filters, shortlist, DEFAULT_PAGE_SIZE))
            })
        })
    });

    let locations = available_locations(&CATALOG);

    let on_toggle_select = move |id: String| {
        set_shortlist.update(|s| {
            s.toggle(&id);
        });
    };

    let on_clear_shortlist = move |_: ()| {
        set_shortlist.update(|s| s.clear());
    };

    // JSON納品ファイルの保存
    let on_export_json = move |_: ()| {
        let title = title.get_untracked();
        let generated_at = String::from(js_sys::Date::new_0().to_iso_string());
        let delivery = dashboard.with_untracked(|view| {
            profile.with_untracked(|profile| {
                ShortlistDelivery::new(
                    &title,
                    &generated_at,
                    weights.get_untracked(),
                    profile,
                    &view.shortlist,
                )
            })
        });

        let result = delivery
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| {
                download::download_bytes(
                    json.as_bytes(),
                    &file_name_for(&title, "json"),
                    "application/json",
                )
                .map_err(|e| format!("{:?}", e))
            });

        if let Err(e) = result {
            gloo::console::error!(format!("納品ファイルの保存に失敗しました: {}", e));
        }
    };

    view! {
        <div class="container">
            <Header />

            <div class="controls">
                <WeightPanel
                    weights=weights
                    set_weights=set_weights
                    normalized=normalized
                />
                <ProfilePanel profile=profile set_profile=set_profile />
            </div>

            <FilterBar
                filters=filters
                set_filters=set_filters
                locations=locations
                dashboard=dashboard
            />

            <Show
                when=move || dashboard.with(|v| v.hero.is_some())
                fallback=|| view! { <p class="text-muted">"条件に一致する写真がありません"</p> }
            >
                <HeroCard dashboard=dashboard />
                <PhotoGallery
                    dashboard=dashboard
                    shortlist=shortlist
                    on_toggle_select=on_toggle_select
                />
            </Show>

            <ShortlistPanel
                dashboard=dashboard
                title=title
                set_title=set_title
                on_toggle_select=on_toggle_select
                on_clear=on_clear_shortlist
                on_export_json=on_export_json
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_weights_valid() {
        let (normalized, warning) = resolve_weights(&ScoringWeights::default());
        assert!(warning.is_none());
        assert!((normalized.technical() - 0.40).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_weights_falls_back_to_uniform() {
        let (normalized, warning) = resolve_weights(&ScoringWeights::new(0.0, 0.0, 0.0));
        assert!(warning.is_some());
        assert_eq!(normalized, NormalizedWeights::uniform());
    }

    #[test]
    fn test_catalog_is_the_sample() {
        assert_eq!(CATALOG.len(), sample_catalog().len());
    }
}
