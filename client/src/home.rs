use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use js_sys::{Function, Reflect};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

use hvs_shared::{SystemRecord, VideoKind};

use crate::api;
use crate::catalog::{self, SystemDescriptor, TreeSlot};
use crate::icons;
use crate::tree::TreeBackdrop;

/// Where each slot anchors its node on the stage. Branch nodes hang off the
/// canopy sides; trunk nodes stack down the middle. No transforms here: a
/// transformed ancestor would re-root the popup backdrop's fixed positioning.
fn slot_anchor_style(slot: TreeSlot) -> &'static str {
    match slot {
        TreeSlot::BranchLeft => "position:absolute;left:9%;top:24%;width:220px;display:flex;justify-content:center;",
        TreeSlot::BranchRight => "position:absolute;right:9%;top:24%;width:220px;display:flex;justify-content:center;",
        TreeSlot::TrunkUpper => "position:absolute;left:calc(50% - 110px);top:38%;width:220px;display:flex;justify-content:center;",
        TreeSlot::TrunkMiddle => "position:absolute;left:calc(50% - 110px);top:56%;width:220px;display:flex;justify-content:center;",
        TreeSlot::TrunkLower => "position:absolute;left:calc(50% - 110px);top:74%;width:220px;display:flex;justify-content:center;",
    }
}

fn popup_position_style(slot: TreeSlot) -> &'static str {
    if slot.popup_opens_below() {
        "top:calc(100% + 14px);"
    } else {
        "bottom:calc(100% + 14px);"
    }
}

/// Landing page: decorative tree plus one interactive node per system the
/// backend reported. Loading -> Ready exactly once, when the list fetch
/// resolves (empty and degraded results transition too).
#[component]
pub fn HomePage() -> impl IntoView {
    let loading = RwSignal::new(true);
    let systems = RwSignal::new(Vec::<SystemRecord>::new());
    let backdrop_ready = RwSignal::new(false);

    // The fetch may outlive this page; a stale completion must not touch
    // disposed signals.
    let mounted = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let mounted = Arc::clone(&mounted);
        move || mounted.store(false, Ordering::SeqCst)
    });

    {
        let mounted = Arc::clone(&mounted);
        spawn_local(async move {
            let records = api::fetch_systems().await;
            if !mounted.load(Ordering::SeqCst) {
                return;
            }
            let _ = systems.try_set(records);
            let _ = loading.try_set(false);
        });
    }

    // Scenery mounts off the critical path: data and nodes first, the
    // animated backdrop when the browser is idle.
    Effect::new(move || {
        if backdrop_ready.get_untracked() {
            return;
        }
        let Some(window) = web_sys::window() else {
            backdrop_ready.set(true);
            return;
        };
        let callback = wasm_bindgen::closure::Closure::once(move || {
            // The idle callback can fire after navigation away from this page.
            let _ = backdrop_ready.try_set(true);
        });
        let mut scheduled = false;
        if let Ok(idle_fn) = Reflect::get(window.as_ref(), &JsValue::from_str("requestIdleCallback"))
            && let Ok(idle_fn) = idle_fn.dyn_into::<Function>()
        {
            let _ = idle_fn.call1(window.as_ref(), callback.as_ref().unchecked_ref());
            scheduled = true;
        }
        if !scheduled {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                300,
            );
        }
        callback.forget();
    });

    let merged = Memo::new(move |_| catalog::merge_records(&systems.get()));

    view! {
        <div
            class="home-page"
            style="min-height:100vh;display:flex;flex-direction:column;background:radial-gradient(ellipse at 50% 20%, #0F2419 0%, #0A1410 55%, #060B08 100%);color:#E5E7EB;"
        >
            <header style="display:flex;align-items:center;gap:14px;padding:22px 36px;">
                <span
                    style=icons::pictogram_style(34, "#34D399")
                    inner_html=icons::TREE_LOGO
                />
                <div>
                    <h1 style="margin:0;font-size:1.35rem;letter-spacing:0.18em;font-weight:700;">
                        "HVS ECOSYSTEM"
                    </h1>
                    <p style="margin:2px 0 0;font-size:0.8rem;color:#6EE7B7;letter-spacing:0.08em;">
                        "The Living Platform"
                    </p>
                </div>
            </header>

            <main class="tree-stage" style="position:relative;flex:1;min-height:580px;">
                <Show when=move || backdrop_ready.get()>
                    <TreeBackdrop />
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div style="position:absolute;inset:0;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:14px;">
                                <span class="spinner" />
                                <span style="color:#9CA3AF;font-size:0.9rem;">"Loading systems..."</span>
                            </div>
                        }
                    }
                >
                    {move || {
                        merged
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, (desc, record))| {
                                let delay_ms = (i as u32) * 120;
                                view! {
                                    <div style=slot_anchor_style(desc.slot)>
                                        <SystemNode desc=desc record=record delay_ms=delay_ms />
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </main>

            <footer style="padding:16px 36px;text-align:center;font-size:0.72rem;color:#4B5563;letter-spacing:0.06em;">
                "HVS Ecosystem · internal systems portal"
            </footer>
        </div>
    }
}

/// One interactive node: the card with its direct-access and doc
/// affordances, plus the video-type choice popup. Popup state is local to
/// the node; nodes never coordinate.
#[component]
fn SystemNode(
    desc: &'static SystemDescriptor,
    record: SystemRecord,
    #[prop(default = 0)] delay_ms: u32,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let navigate = use_navigate();
    let app_link = StoredValue::new(record.app_link.clone());
    let has_doc = record.has_doc;

    let choose = {
        let navigate = navigate.clone();
        move |kind: VideoKind| {
            navigate(
                &format!("/video/{}?type={}", desc.id, kind.query_value()),
                Default::default(),
            );
        }
    };
    let choose_online = {
        let choose = choose.clone();
        move |_| choose(VideoKind::Link)
    };
    let choose_offline = move |_| choose(VideoKind::Mp4);

    // Direct access must not toggle the popup underneath it.
    let open_app = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        let Some(url) = app_link.get_value() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer");
        }
    };

    let medallion_style = format!(
        "position:relative;display:flex;align-items:center;justify-content:center;width:74px;height:74px;border-radius:50%;background:rgba(10, 20, 16, 0.85);border:2px solid {};box-shadow:0 0 20px {};",
        desc.color, desc.glow_color
    );

    view! {
        <div
            class="system-node node-enter"
            style=format!("position:relative;animation-delay:{delay_ms}ms;")
        >
            <div
                class="node-card"
                on:click=move |_| open.update(|v| *v = !*v)
                style="display:flex;flex-direction:column;align-items:center;gap:9px;cursor:pointer;"
            >
                <div class="node-medallion" style=medallion_style>
                    <span
                        style=icons::pictogram_style(30, desc.color)
                        inner_html=icons::pictogram_or_warn(desc.icon)
                    />
                    <Show when=move || has_doc>
                        <span class="doc-badge">"DOC"</span>
                    </Show>
                    <Show when=move || app_link.with_value(|l| l.is_some())>
                        <button
                            class="node-access"
                            title="Open the application"
                            on:click=open_app
                        >
                            <span
                                style=icons::pictogram_style(13, "#D1D5DB")
                                inner_html=icons::EXTERNAL_LINK
                            />
                        </button>
                    </Show>
                </div>
                <span style=format!(
                    "font-size:0.82rem;font-weight:700;letter-spacing:0.1em;color:{};text-shadow:0 0 12px {};",
                    desc.color, desc.glow_color
                )>
                    {desc.name}
                </span>
            </div>

            <Show when=move || open.get()>
                <div
                    class="popup-backdrop"
                    on:click=move |e: web_sys::MouseEvent| {
                        e.stop_propagation();
                        open.set(false);
                    }
                />
                <div
                    class="choice-popup"
                    style=popup_position_style(desc.slot)
                    on:click=move |e: web_sys::MouseEvent| e.stop_propagation()
                >
                    <div style="display:flex;align-items:center;justify-content:space-between;gap:18px;margin-bottom:10px;">
                        <span style="font-size:0.8rem;font-weight:600;color:#E5E7EB;">
                            "Choose video type"
                        </span>
                        <button
                            class="popup-close"
                            title="Close"
                            on:click=move |e: web_sys::MouseEvent| {
                                e.stop_propagation();
                                open.set(false);
                            }
                        >
                            <span
                                style=icons::pictogram_style(14, "#9CA3AF")
                                inner_html=icons::CLOSE
                            />
                        </button>
                    </div>
                    <button class="choice-option" on:click=choose_online.clone()>
                        <span
                            style=icons::pictogram_style(16, "#6EE7B7")
                            inner_html=icons::GLOBE
                        />
                        {VideoKind::Link.label()}
                    </button>
                    <button class="choice-option" on:click=choose_offline.clone()>
                        <span
                            style=icons::pictogram_style(16, "#6EE7B7")
                            inner_html=icons::FILM
                        />
                        {VideoKind::Mp4.label()}
                    </button>
                </div>
            </Show>
        </div>
    }
}
