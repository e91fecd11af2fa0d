//! Status event payload from Claude Code.
//!
//! Every field is defaulted: the payload shape has drifted between Claude
//! Code releases, and a missing section should degrade the affected segment,
//! not the whole banner.

use serde::Deserialize;

/// One status update, piped to us as a JSON document on stdin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusEvent {
    #[serde(default)]
    pub workspace: Workspace,
    #[serde(default)]
    pub model: ModelInfo,
    #[serde(default)]
    pub output_style: OutputStyle,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub cost: Cost,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub current_dir: Option<String>,
    #[serde(default)]
    pub project_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputStyle {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cost {
    #[serde(default)]
    pub total_lines_added: u64,
    #[serde(default)]
    pub total_lines_removed: u64,
    #[serde(default)]
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let raw = r#"{
            "workspace": {"current_dir": "/work/aiterm", "project_dir": "/work/aiterm"},
            "model": {"display_name": "Claude Sonnet 4.5"},
            "output_style": {"name": "learning"},
            "session_id": "test-123",
            "cost": {"total_lines_added": 123, "total_lines_removed": 45, "total_duration_ms": 45000}
        }"#;

        let event: StatusEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.workspace.current_dir.as_deref(), Some("/work/aiterm"));
        assert_eq!(event.model.display_name.as_deref(), Some("Claude Sonnet 4.5"));
        assert_eq!(event.output_style.name.as_deref(), Some("learning"));
        assert_eq!(event.session_id, "test-123");
        assert_eq!(event.cost.total_lines_added, 123);
        assert_eq!(event.cost.total_lines_removed, 45);
    }

    #[test]
    fn missing_sections_default() {
        let event: StatusEvent = serde_json::from_str("{}").unwrap();
        assert!(event.workspace.current_dir.is_none());
        assert!(event.model.display_name.is_none());
        assert_eq!(event.cost.total_lines_added, 0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let event: StatusEvent =
            serde_json::from_str(r#"{"session_id": "x", "transcript_path": "/tmp/t"}"#).unwrap();
        assert_eq!(event.session_id, "x");
    }
}
