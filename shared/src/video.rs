/// How a system's walkthrough video is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    /// Embedded third-party player (streams from the hosting service).
    Link,
    /// Bundled MP4 played in a native video element with local controls.
    Mp4,
}

impl VideoKind {
    /// Parse a route query value. Anything missing or unrecognized falls
    /// back to `Link`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("mp4") => Self::Mp4,
            _ => Self::Link,
        }
    }

    /// Value used in the `?type=` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Mp4 => "mp4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Link => "Online video",
            Self::Mp4 => "Offline video (MP4)",
        }
    }
}

/// Fixed embed address for the online walkthrough. Not system-specific.
pub const LINK_EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Bundled offline recording, served from the portal's own origin.
pub const MP4_ASSET_PATH: &str = "/videos/demo.mp4";

const LINK_DURATION_LABEL: &str = "15:30";
const MP4_DURATION_LABEL: &str = "22:45";

/// Presentation metadata for one `(system, kind)` pair. Never fetched;
/// derived locally by [`video_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoData {
    pub title: String,
    pub url: &'static str,
    pub summary: String,
    pub duration_label: &'static str,
}

/// Derive the player-page metadata for a system. Pure: the same
/// `(display_name, kind)` always yields the same output. `url` and
/// `duration_label` depend on the kind alone; the display name is
/// substituted into the title and summary templates.
pub fn video_data(display_name: &str, kind: VideoKind) -> VideoData {
    match kind {
        VideoKind::Link => VideoData {
            title: format!("{display_name} - Online Walkthrough"),
            url: LINK_EMBED_URL,
            summary: format!(
                "A guided tour of {display_name}:\n\n\
                 • What {display_name} does and where it sits in the HVS ecosystem\n\
                 • Signing in and setting up your workspace\n\
                 • The everyday workflows, step by step\n\
                 • Where to find help when something goes wrong"
            ),
            duration_label: LINK_DURATION_LABEL,
        },
        VideoKind::Mp4 => VideoData {
            title: format!("{display_name} - Offline Walkthrough"),
            url: MP4_ASSET_PATH,
            summary: format!(
                "Offline walkthrough for {display_name}:\n\n\
                 • Full feature tour recorded against the demo environment\n\
                 • Administration and configuration in depth\n\
                 • Troubleshooting checklist for operators\n\n\
                 This recording ships with the portal and plays without internet access."
            ),
            duration_label: MP4_DURATION_LABEL,
        },
    }
}

/// Arm looping on an embed URL. Third-party embeds only loop when asked to
/// replay a single-item playlist of the video itself, so the video id (the
/// trailing path segment) is echoed into `playlist`.
pub fn embed_loop_url(embed_url: &str) -> String {
    match embed_url.rsplit('/').next() {
        Some(video_id) if !video_id.is_empty() => {
            format!("{embed_url}?loop=1&playlist={video_id}")
        }
        _ => embed_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_both_kinds() {
        assert_eq!(VideoKind::parse(Some("link")), VideoKind::Link);
        assert_eq!(VideoKind::parse(Some("mp4")), VideoKind::Mp4);
    }

    #[test]
    fn parse_falls_back_to_link() {
        assert_eq!(VideoKind::parse(None), VideoKind::Link);
        assert_eq!(VideoKind::parse(Some("")), VideoKind::Link);
        assert_eq!(VideoKind::parse(Some("avi")), VideoKind::Link);
        assert_eq!(VideoKind::parse(Some("MP4")), VideoKind::Link);
    }

    #[test]
    fn query_value_roundtrips_through_parse() {
        for kind in [VideoKind::Link, VideoKind::Mp4] {
            assert_eq!(VideoKind::parse(Some(kind.query_value())), kind);
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = video_data("HVS-UMEA", VideoKind::Link);
        let b = video_data("HVS-UMEA", VideoKind::Link);
        assert_eq!(a, b);
    }

    #[test]
    fn kinds_differ_in_url_and_duration() {
        let link = video_data("HVS-KIOS", VideoKind::Link);
        let mp4 = video_data("HVS-KIOS", VideoKind::Mp4);
        assert_ne!(link.url, mp4.url);
        assert_ne!(link.duration_label, mp4.duration_label);
    }

    #[test]
    fn url_and_duration_ignore_the_system() {
        let a = video_data("HVS-GATE", VideoKind::Mp4);
        let b = video_data("HVS-FOOD", VideoKind::Mp4);
        assert_eq!(a.url, b.url);
        assert_eq!(a.duration_label, b.duration_label);
    }

    #[test]
    fn name_flows_into_title_and_summary() {
        let data = video_data("HVS-FOOD", VideoKind::Link);
        assert!(data.title.contains("HVS-FOOD"));
        assert!(data.summary.contains("HVS-FOOD"));
    }

    #[test]
    fn embed_loop_url_echoes_video_id() {
        assert_eq!(
            embed_loop_url("https://www.youtube.com/embed/abc123XYZ_w"),
            "https://www.youtube.com/embed/abc123XYZ_w?loop=1&playlist=abc123XYZ_w"
        );
    }

    #[test]
    fn embed_loop_url_leaves_bare_input_alone() {
        assert_eq!(embed_loop_url(""), "");
    }
}
