//! クライアントプロファイル編集コンポーネント

use leptos::prelude::*;
use photo_rank_common::catalog::sample_profile;
use photo_rank_common::{ClientProfile, Mood, ShotType};

#[component]
pub fn ProfilePanel(
    profile: ReadSignal<ClientProfile>,
    set_profile: WriteSignal<ClientProfile>,
) -> impl IntoView {
    let (new_tag, set_new_tag) = signal(String::new());

    let mood_chips = Mood::ALL
        .into_iter()
        .map(|mood| {
            view! {
                <button
                    class="chip"
                    class:active=move || profile.with(|p| p.preferred_moods.contains(&mood))
                    on:click=move |_| {
                        set_profile.update(|p| {
                            p.toggle_mood(mood);
                        });
                    }
                >
                    {mood.as_str()}
                </button>
            }
        })
        .collect_view();

    let shot_chips = ShotType::ALL
        .into_iter()
        .map(|shot| {
            view! {
                <button
                    class="chip"
                    class:active=move || profile.with(|p| p.required_shots.contains(&shot))
                    on:click=move |_| {
                        set_profile.update(|p| {
                            p.toggle_shot(shot);
                        });
                    }
                >
                    {shot.as_str()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="settings-panel profile-panel">
            <h3>"クライアントの希望"</h3>

            <div class="form-group">
                <label>"好みのムード"</label>
                <div class="chip-row">{mood_chips}</div>
            </div>

            <div class="form-group">
                <label>"必須ショット"</label>
                <div class="chip-row">{shot_chips}</div>
            </div>

            <div class="form-group">
                <label>"重視するタグ"</label>
                <div class="chip-row">
                    <For
                        each=move || profile.with(|p| p.highlight_tags.iter().cloned().collect::<Vec<_>>())
                        key=|tag| tag.clone()
                        children=move |tag| {
                            let label = tag.clone();
                            view! {
                                <button
                                    class="chip active"
                                    title="クリックで削除"
                                    on:click=move |_| {
                                        set_profile.update(|p| {
                                            p.toggle_tag(&tag);
                                        });
                                    }
                                >
                                    {label}" ×"
                                </button>
                            }
                        }
                    />
                </div>
                <form
                    class="tag-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        let tag = new_tag.get_untracked();
                        if !tag.trim().is_empty() {
                            set_profile.update(|p| p.add_tag(tag));
                            set_new_tag.set(String::new());
                        }
                    }
                >
                    <input
                        type="text"
                        placeholder="タグを追加..."
                        prop:value=move || new_tag.get()
                        on:input=move |ev| set_new_tag.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-secondary btn-small">"追加"</button>
                </form>
            </div>

            <div class="form-group">
                <label for="minimum-faces">"最低人数"</label>
                <input
                    type="number"
                    id="minimum-faces"
                    min="0"
                    prop:value=move || profile.with(|p| p.minimum_faces.to_string())
                    on:input=move |ev| {
                        let faces: u32 = event_target_value(&ev).parse().unwrap_or(0);
                        set_profile.update(|p| p.minimum_faces = faces);
                    }
                />
            </div>

            <div class="api-actions">
                <button
                    class="btn btn-secondary btn-small"
                    on:click=move |_| set_profile.set(sample_profile())
                >
                    "サンプル"
                </button>
                <button
                    class="btn btn-tertiary btn-small"
                    on:click=move |_| set_profile.set(ClientProfile::default())
                >
                    "クリア"
                </button>
            </div>
        </div>
    }
}
