use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::home::HomePage;
use crate::video_player::VideoPlayerPage;

fn remove_loading_shell() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(shell) = document.get_element_by_id("app-loading-shell") {
        shell.remove();
    }
}

/// Route table for the portal. The static boot shell in index.html stays up
/// until the first routed view has mounted.
#[component]
pub fn App() -> impl IntoView {
    Effect::new(move || {
        remove_loading_shell();
    });

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/video/:system_id") view=VideoPlayerPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:10px;background:#060B08;color:#E5E7EB;">
            <h1 style="margin:0;font-size:1.3rem;">"Page not found"</h1>
            <a href="/" style="color:#6EE7B7;font-size:0.85rem;">"Back to the ecosystem tree"</a>
        </div>
    }
}
