use serde::{Deserialize, Serialize};

/// One element of the `/api/systems` list: the data the backend knows about
/// a system, merged client-side with the static catalog entry of the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_link: Option<String>,
    #[serde(default)]
    pub has_doc: bool,
}

/// The `/api/systems/{id}` payload. `video_url` and `doc_url` are
/// backend-relative static paths; resolve them against the API base address
/// before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDetail {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<VideoSegment>,
}

/// Chapter marker inside a system's walkthrough video. `start` is a
/// `minutes:seconds` timestamp when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSegment {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_list_payload() {
        let json = r#"{
            "id": "hvs-gate",
            "name": "HVS-GATE",
            "group": "access",
            "appLink": "https://gate.hvs.example/login",
            "hasDoc": true
        }"#;
        let rec: SystemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, "hvs-gate");
        assert_eq!(rec.name, "HVS-GATE");
        assert_eq!(rec.group.as_deref(), Some("access"));
        assert_eq!(rec.app_link.as_deref(), Some("https://gate.hvs.example/login"));
        assert!(rec.has_doc);
    }

    #[test]
    fn record_defaults_absent_optionals() {
        let json = r#"{"id": "hvs-kios", "name": "HVS-KIOS"}"#;
        let rec: SystemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.group, None);
        assert_eq!(rec.app_link, None);
        assert!(!rec.has_doc);
    }

    #[test]
    fn record_tolerates_explicit_nulls() {
        // The backend serializes missing fields as null rather than omitting them.
        let json = r#"{"id": "hvs-food", "name": "HVS-FOOD", "group": null, "appLink": null, "hasDoc": false}"#;
        let rec: SystemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.group, None);
        assert_eq!(rec.app_link, None);
        assert!(!rec.has_doc);
    }

    #[test]
    fn detail_parses_full_payload() {
        let json = r#"{
            "id": "hvs-umea",
            "name": "HVS-UMEA",
            "group": "core",
            "appLink": "https://umea.hvs.example",
            "videoUrl": "/static/videos/hvs-umea.mp4",
            "docUrl": "/static/docs/hvs-umea.pdf",
            "segments": [
                {"title": "Overview", "start": "0:00"},
                {"title": "Daily workflow", "start": "4:30"}
            ]
        }"#;
        let detail: SystemDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.video_url.as_deref(), Some("/static/videos/hvs-umea.mp4"));
        assert_eq!(detail.doc_url.as_deref(), Some("/static/docs/hvs-umea.pdf"));
        assert_eq!(detail.segments.len(), 2);
        assert_eq!(detail.segments[0].title, "Overview");
        assert_eq!(detail.segments[1].start.as_deref(), Some("4:30"));
    }

    #[test]
    fn detail_defaults_missing_extras() {
        let json = r#"{"id": "hvs-kios-lite", "name": "HVS-KIOS LITE", "videoUrl": null, "segments": []}"#;
        let detail: SystemDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.video_url, None);
        assert_eq!(detail.doc_url, None);
        assert!(detail.segments.is_empty());
    }

    #[test]
    fn segment_start_is_optional() {
        let seg: VideoSegment = serde_json::from_str(r#"{"title": "Q&A"}"#).unwrap();
        assert_eq!(seg.start, None);
    }
}
