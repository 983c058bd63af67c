use std::sync::atomic::{AtomicBool, Ordering};

// Inline SVG markup rendered via `inner_html`. Icons fill their container
// (width/height 100%) and inherit color through `currentColor`; callers size
// and tint them with a wrapper span styled by `pictogram_style`.

pub const PLAY: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg"><path d="M7 4.5v15l13-7.5z"/></svg>"#;
pub const PAUSE: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg"><rect x="6" y="4" width="4" height="16" rx="1"/><rect x="14" y="4" width="4" height="16" rx="1"/></svg>"#;
pub const VOLUME_ON: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M11 5L6 9H2v6h4l5 4V5z"/><path d="M15.54 8.46a5 5 0 0 1 0 7.07"/><path d="M19.07 4.93a10 10 0 0 1 0 14.14"/></svg>"#;
pub const VOLUME_OFF: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M11 5L6 9H2v6h4l5 4V5z"/><line x1="23" y1="9" x2="17" y2="15"/><line x1="17" y1="9" x2="23" y2="15"/></svg>"#;
pub const MAXIMIZE: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M8 3H5a2 2 0 0 0-2 2v3"/><path d="M21 8V5a2 2 0 0 0-2-2h-3"/><path d="M3 16v3a2 2 0 0 0 2 2h3"/><path d="M16 21h3a2 2 0 0 0 2-2v-3"/></svg>"#;
pub const REPLAY: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><polyline points="1 4 1 10 7 10"/><path d="M3.51 15a9 9 0 1 0 2.13-9.36L1 10"/></svg>"#;
pub const EXTERNAL_LINK: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/></svg>"#;
pub const ARROW_LEFT: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><line x1="19" y1="12" x2="5" y2="12"/><polyline points="12 19 5 12 12 5"/></svg>"#;
pub const CLOSE: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;
pub const GLOBE: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="10"/><line x1="2" y1="12" x2="22" y2="12"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/></svg>"#;
pub const FILM: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><rect x="2" y="2" width="20" height="20" rx="2.18"/><line x1="7" y1="2" x2="7" y2="22"/><line x1="17" y1="2" x2="17" y2="22"/><line x1="2" y1="12" x2="22" y2="12"/></svg>"#;
pub const FILE_TEXT: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><line x1="16" y1="13" x2="8" y2="13"/><line x1="16" y1="17" x2="8" y2="17"/></svg>"#;
pub const LIST: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><line x1="8" y1="6" x2="21" y2="6"/><line x1="8" y1="12" x2="21" y2="12"/><line x1="8" y1="18" x2="21" y2="18"/><line x1="3" y1="6" x2="3.01" y2="6"/><line x1="3" y1="12" x2="3.01" y2="12"/><line x1="3" y1="18" x2="3.01" y2="18"/></svg>"#;
pub const TREE_LOGO: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M12 22v-8"/><path d="M12 2L6 9h3l-4 6h14l-4-6h3z"/></svg>"#;

const DATABASE: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M21 12c0 1.66-4.03 3-9 3s-9-1.34-9-3"/><path d="M3 5v14c0 1.66 4.03 3 9 3s9-1.34 9-3V5"/></svg>"#;
const NETWORK: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><line x1="8.59" y1="13.51" x2="15.42" y2="17.49"/><line x1="15.41" y1="6.51" x2="8.59" y2="10.49"/></svg>"#;
const UTENSILS: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2"/><path d="M7 2v20"/><path d="M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3zm0 0v7"/></svg>"#;
const MONITOR: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><rect x="2" y="3" width="20" height="14" rx="2"/><line x1="8" y1="21" x2="16" y2="21"/><line x1="12" y1="17" x2="12" y2="21"/></svg>"#;
const SMARTPHONE: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><rect x="5" y="2" width="14" height="20" rx="2"/><line x1="12" y1="18" x2="12.01" y2="18"/></svg>"#;

static MISSING_PICTOGRAM_WARNED: AtomicBool = AtomicBool::new(false);

/// Markup for a catalog pictogram name. `None` for names the catalog does
/// not define.
pub fn pictogram_markup(name: &str) -> Option<&'static str> {
    match name {
        "database" => Some(DATABASE),
        "network" => Some(NETWORK),
        "utensils" => Some(UTENSILS),
        "monitor" => Some(MONITOR),
        "smartphone" => Some(SMARTPHONE),
        _ => None,
    }
}

/// Markup for a pictogram name, degrading to empty markup after a one-time
/// console warning. A typo'd catalog entry renders as a blank icon instead
/// of poisoning the page.
pub fn pictogram_or_warn(name: &str) -> &'static str {
    match pictogram_markup(name) {
        Some(svg) => svg,
        None => {
            warn_missing_once(name);
            ""
        }
    }
}

/// Wrapper style that gives a pictogram its size and tint.
pub fn pictogram_style(size_px: u32, color: &str) -> String {
    format!(
        "display:inline-flex;width:{size_px}px;height:{size_px}px;color:{color};flex-shrink:0;"
    )
}

fn warn_missing_once(name: &str) {
    if MISSING_PICTOGRAM_WARNED
        .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
    {
        web_sys::console::warn_1(&format!("Unknown pictogram name: {name}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pictogram_lookup() {
        assert!(pictogram_markup("database").is_some());
        assert!(pictogram_markup("network").is_some());
        assert!(pictogram_markup("utensils").is_some());
        assert!(pictogram_markup("monitor").is_some());
        assert!(pictogram_markup("smartphone").is_some());
        assert_eq!(pictogram_markup("unknown"), None);
    }

    #[test]
    fn pictograms_size_to_container() {
        for name in ["database", "network", "utensils", "monitor", "smartphone"] {
            let svg = pictogram_markup(name).unwrap();
            assert!(svg.contains(r#"width="100%""#), "{name} has a fixed width");
            assert!(svg.contains("currentColor"), "{name} hardcodes its color");
        }
    }

    #[test]
    fn pictogram_style_embeds_size_and_color() {
        let style = pictogram_style(28, "#A855F7");
        assert!(style.contains("width:28px"));
        assert!(style.contains("height:28px"));
        assert!(style.contains("color:#A855F7"));
    }
}
