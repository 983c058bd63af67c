use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use hvs_shared::{SystemDetail, VideoKind, embed_loop_url, video_data};

use crate::api;
use crate::catalog;
use crate::icons;
use crate::playback::{Playback, seek_target_secs};
use crate::time_format::format_clock;

/// Player page for `/video/:system_id?type=`. The surface is either an
/// embedded iframe (online) or a local MP4 with custom transport controls
/// (offline); the side panel carries the summary and whatever the detail
/// endpoint adds on top.
#[component]
pub fn VideoPlayerPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    let system_id = Memo::new(move |_| params.read().get("system_id").unwrap_or_default());
    let kind = Memo::new(move |_| VideoKind::parse(query.read().get("type").as_deref()));
    let descriptor = Memo::new(move |_| catalog::lookup(&system_id.get()));
    let data = Memo::new(move |_| video_data(descriptor.get().name, kind.get()));

    let detail = RwSignal::new(Option::<SystemDetail>::None);
    let playback = RwSignal::new(Playback::default());
    let video_ref = NodeRef::<html::Video>::new();

    // The detail fetch may still be in flight when the user backs out.
    let mounted = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let mounted = Arc::clone(&mounted);
        move || mounted.store(false, Ordering::SeqCst)
    });

    // Tracks the route param so in-place navigation between systems refetches.
    Effect::new({
        let mounted = Arc::clone(&mounted);
        move || {
            let id = system_id.get();
            let _ = detail.try_set(None);
            let mounted = Arc::clone(&mounted);
            spawn_local(async move {
                let fetched = api::fetch_system_detail(&id).await;
                if !mounted.load(Ordering::SeqCst) {
                    return;
                }
                let _ = detail.try_set(fetched);
            });
        }
    });

    let go_home = move |_| navigate("/", Default::default());

    let toggle_play = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        if playback.with_untracked(|p| p.playing) {
            let _ = video.pause();
        } else {
            let _ = video.play();
        }
    };

    let toggle_mute = move |_| playback.update(|p| p.toggle_mute());
    let toggle_loop = move |_| playback.update(|p| p.toggle_loop());

    let replay = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        video.set_current_time(0.0);
        let _ = video.play();
        playback.update(|p| p.replay());
    };

    let seek = move |e: web_sys::MouseEvent| {
        let Some(target) = e.current_target() else {
            return;
        };
        let Ok(bar) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        let rect = bar.get_bounding_client_rect();
        let duration = playback.with_untracked(|p| p.duration_secs);
        let target_secs =
            seek_target_secs(e.client_x() as f64, rect.left(), rect.width(), duration);
        video.set_current_time(target_secs);
        playback.update(|p| p.set_position(target_secs));
    };

    let fullscreen = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            let _ = video.request_fullscreen();
        }
    };

    view! {
        <div
            class="player-page"
            style="min-height:100vh;display:flex;flex-direction:column;background:linear-gradient(160deg, #0B1510 0%, #060B08 60%, #04080A 100%);color:#E5E7EB;"
        >
            <header style="display:flex;align-items:center;gap:18px;padding:22px 36px;">
                <button class="back-button" on:click=go_home>
                    <span style=icons::pictogram_style(15, "#D1D5DB") inner_html=icons::ARROW_LEFT />
                    "Back to the tree"
                </button>
                <div>
                    <h1 style="margin:0;font-size:1.2rem;font-weight:700;">
                        {move || data.get().title}
                    </h1>
                    <p style="margin:2px 0 0;font-size:0.76rem;color:#9CA3AF;letter-spacing:0.04em;">
                        {move || format!("{} · {}", kind.get().label(), data.get().duration_label)}
                    </p>
                </div>
            </header>

            <main style="display:flex;flex-wrap:wrap;gap:28px;padding:0 36px 36px;align-items:flex-start;">
                <section style="flex:2;min-width:420px;">
                    {move || match kind.get() {
                        VideoKind::Link => {
                            view! {
                                <iframe
                                    src=move || embed_loop_url(data.get().url)
                                    title=move || data.get().title
                                    style="width:100%;aspect-ratio:16/9;border:0;border-radius:12px;background:#000;"
                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                    allowfullscreen=true
                                />
                            }
                                .into_any()
                        }
                        VideoKind::Mp4 => {
                            view! {
                                <div>
                                    <video
                                        node_ref=video_ref
                                        src=move || data.get().url
                                        prop:muted=move || playback.with(|p| p.muted)
                                        prop:loop=move || playback.with(|p| p.looping)
                                        on:click=toggle_play
                                        on:play=move |_| playback.update(|p| p.mark_playing())
                                        on:pause=move |_| playback.update(|p| p.mark_paused())
                                        on:ended=move |_| playback.update(|p| p.mark_ended())
                                        on:timeupdate=move |_| {
                                            if let Some(video) = video_ref.get_untracked() {
                                                playback.update(|p| p.set_position(video.current_time()));
                                            }
                                        }
                                        on:loadedmetadata=move |_| {
                                            if let Some(video) = video_ref.get_untracked() {
                                                playback.update(|p| p.set_duration(video.duration()));
                                            }
                                        }
                                        style="width:100%;aspect-ratio:16/9;border-radius:12px;background:#000;display:block;cursor:pointer;"
                                    />
                                    <div style="display:flex;align-items:center;gap:14px;margin-top:12px;">
                                        <button
                                            class="transport-button transport-primary"
                                            title=move || {
                                                if playback.with(|p| p.playing) { "Pause" } else { "Play" }
                                            }
                                            on:click=toggle_play
                                        >
                                            <span
                                                style=icons::pictogram_style(18, "#0A1410")
                                                inner_html=move || {
                                                    if playback.with(|p| p.playing) {
                                                        icons::PAUSE
                                                    } else {
                                                        icons::PLAY
                                                    }
                                                }
                                            />
                                        </button>
                                        <button
                                            class="transport-button"
                                            title=move || {
                                                if playback.with(|p| p.muted) { "Unmute" } else { "Mute" }
                                            }
                                            on:click=toggle_mute
                                        >
                                            <span
                                                style=icons::pictogram_style(16, "#D1D5DB")
                                                inner_html=move || {
                                                    if playback.with(|p| p.muted) {
                                                        icons::VOLUME_OFF
                                                    } else {
                                                        icons::VOLUME_ON
                                                    }
                                                }
                                            />
                                        </button>
                                        <div class="seek-bar" on:click=seek>
                                            <div
                                                class="seek-fill"
                                                style:width=move || {
                                                    format!(
                                                        "{:.2}%",
                                                        playback.with(|p| p.progress_fraction()) * 100.0
                                                    )
                                                }
                                            />
                                        </div>
                                        <span style="font-variant-numeric:tabular-nums;font-size:0.78rem;color:#9CA3AF;white-space:nowrap;">
                                            {move || {
                                                playback
                                                    .with(|p| {
                                                        format!(
                                                            "{} / {}",
                                                            format_clock(p.current_secs),
                                                            format_clock(p.duration_secs),
                                                        )
                                                    })
                                            }}
                                        </span>
                                        <button
                                            class="transport-button"
                                            title="Fullscreen"
                                            on:click=fullscreen
                                        >
                                            <span
                                                style=icons::pictogram_style(16, "#D1D5DB")
                                                inner_html=icons::MAXIMIZE
                                            />
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <aside class="player-panel" style="flex:1;min-width:280px;background:rgba(16, 28, 22, 0.6);border:1px solid rgba(52, 211, 153, 0.16);border-radius:14px;padding:20px 22px;">
                    <h2 style="margin:0 0 10px;font-size:0.92rem;letter-spacing:0.08em;color:#6EE7B7;">
                        "About this video"
                    </h2>
                    <div style="white-space:pre-wrap;font-size:0.82rem;line-height:1.55;color:#D1D5DB;">
                        {move || data.get().summary}
                    </div>

                    <Show when=move || kind.get() == VideoKind::Mp4>
                        <div style="display:flex;align-items:center;justify-content:space-between;margin-top:20px;">
                            <span style="font-size:0.8rem;color:#D1D5DB;">"Loop playback"</span>
                            <button
                                class="loop-switch"
                                class:on=move || playback.with(|p| p.looping)
                                title="Toggle looping"
                                on:click=toggle_loop
                            >
                                <span class="loop-knob" />
                            </button>
                        </div>
                        <button class="panel-action" style="margin-top:12px;" on:click=replay>
                            <span
                                style=icons::pictogram_style(15, "#6EE7B7")
                                inner_html=icons::REPLAY
                            />
                            "Replay from the start"
                        </button>
                    </Show>

                    {move || {
                        detail
                            .get()
                            .map(|d| {
                                view! {
                                    <div style="margin-top:20px;display:flex;flex-direction:column;gap:10px;">
                                        {d
                                            .app_link
                                            .clone()
                                            .map(|link| {
                                                let label = format!("Open {}", d.name);
                                                view! {
                                                    <button
                                                        class="panel-action"
                                                        on:click=move |_| {
                                                            if let Some(window) = web_sys::window() {
                                                                let _ = window
                                                                    .open_with_url_and_target_and_features(
                                                                        &link,
                                                                        "_blank",
                                                                        "noopener,noreferrer",
                                                                    );
                                                            }
                                                        }
                                                    >
                                                        <span
                                                            style=icons::pictogram_style(15, "#6EE7B7")
                                                            inner_html=icons::EXTERNAL_LINK
                                                        />
                                                        {label}
                                                    </button>
                                                }
                                            })}
                                        {d
                                            .doc_url
                                            .clone()
                                            .map(|doc| {
                                                view! {
                                                    <a
                                                        class="panel-action"
                                                        href=api::resolve_static_url(&doc)
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                    >
                                                        <span
                                                            style=icons::pictogram_style(15, "#6EE7B7")
                                                            inner_html=icons::FILE_TEXT
                                                        />
                                                        "Read the documentation"
                                                    </a>
                                                }
                                            })}
                                        {(!d.segments.is_empty())
                                            .then(|| {
                                                view! {
                                                    <div>
                                                        <div style="display:flex;align-items:center;gap:8px;margin:6px 0 8px;">
                                                            <span
                                                                style=icons::pictogram_style(14, "#6EE7B7")
                                                                inner_html=icons::LIST
                                                            />
                                                            <span style="font-size:0.78rem;letter-spacing:0.08em;color:#6EE7B7;">
                                                                "Chapters"
                                                            </span>
                                                        </div>
                                                        <ul style="margin:0;padding:0;list-style:none;display:flex;flex-direction:column;gap:6px;">
                                                            {d
                                                                .segments
                                                                .iter()
                                                                .map(|segment| {
                                                                    view! {
                                                                        <li style="display:flex;gap:10px;font-size:0.78rem;color:#D1D5DB;">
                                                                            {segment
                                                                                .start
                                                                                .clone()
                                                                                .map(|start| {
                                                                                    view! {
                                                                                        <span style="color:#6EE7B7;font-variant-numeric:tabular-nums;">
                                                                                            {start}
                                                                                        </span>
                                                                                    }
                                                                                })}
                                                                            <span>{segment.title.clone()}</span>
                                                                        </li>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </ul>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })
                    }}
                </aside>
            </main>
        </div>
    }
}
