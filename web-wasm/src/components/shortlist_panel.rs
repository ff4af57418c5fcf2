//! ショートリストと集計、納品ファイルの保存

use leptos::prelude::*;
use photo_rank_common::DashboardView;

#[component]
pub fn ShortlistPanel<FS, FC, FE>(
    dashboard: Memo<DashboardView<'static>>,
    title: ReadSignal<String>,
    set_title: WriteSignal<String>,
    on_toggle_select: FS,
    on_clear: FC,
    on_export_json: FE,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone,
    FE: Fn(()) + 'static + Clone,
{
    let is_empty = move || dashboard.with(|v| v.shortlist.is_empty());

    let summary_text = move || {
        dashboard.with(|v| {
            let s = &v.summary;
            if s.count == 0 {
                return "まだ選択されていません".to_string();
            }
            let moods: Vec<String> = s
                .mood_counts
                .iter()
                .map(|(mood, count)| format!("{} {}", mood, count))
                .collect();
            format!(
                "{}枚 / 平均スコア {:.3} / 平均適合 {:.3} / 人数計 {} / {}",
                s.count,
                s.average_score,
                s.average_alignment,
                s.total_faces,
                moods.join(", ")
            )
        })
    };

    view! {
        <div class="shortlist-panel">
            <h3>"ショートリスト"</h3>
            <p class="shortlist-summary">{summary_text}</p>

            <ul class="shortlist-items">
                <For
                    each=move || dashboard.with(|v| {
                        v.shortlist
                            .iter()
                            .map(|e| (e.photo.id.clone(), e.photo.title.clone(), e.score))
                            .collect::<Vec<_>>()
                    })
                    key=|(id, _, score)| (id.clone(), score.to_bits())
                    children=move |(id, title, score)| {
                        let on_toggle_select = on_toggle_select.clone();
                        view! {
                            <li>
                                <span>{format!("{:.3}  {}", score, title)}</span>
                                <button
                                    class="btn btn-tertiary btn-small"
                                    on:click=move |_| on_toggle_select(id.clone())
                                >
                                    "外す"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <div class="form-group">
                <label for="delivery-title">"納品タイトル"</label>
                <input
                    type="text"
                    id="delivery-title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>

            <div class="export-buttons">
                <button
                    class="btn btn-primary"
                    disabled=is_empty
                    on:click={
                        let on_export_json = on_export_json.clone();
                        move |_| on_export_json(())
                    }
                >
                    "JSON保存"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=is_empty
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "選択をクリア"
                </button>
            </div>
        </div>
    }
}
