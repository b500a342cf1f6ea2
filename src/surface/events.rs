//! Inbound change-event adapter.
//!
//! The native view multiplexes four logically distinct notifications over
//! one change callback, distinguished only by which payload fields are
//! present. This adapter probes field presence once, at the boundary, and
//! hands the core a closed set of variants - the core never touches a raw
//! payload.

use serde::Deserialize;

/// Raw change payload as delivered by the native event channel.
///
/// Every field is optional; which combination is set decides what the
/// event means.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePayload {
    /// Present on path-list updates: the new path count
    pub paths_update: Option<u32>,
    /// Present on save completion: whether the save succeeded
    pub success: Option<bool>,
    /// Present on save completion when the native side knows the output path
    pub path: Option<String>,
    /// Present on selection changes: whether a shape is now selected
    pub is_shape_selected: Option<bool>,
    /// Present on selection changes for text shapes: the selected text
    pub shape_text: Option<String>,
}

/// The closed set of events the native surface can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The rendered path list changed
    PathsUpdate(u32),
    /// A save request finished; `path` is set when the native side
    /// reports where the file landed
    SaveCompleted { success: bool, path: Option<String> },
    /// Native shape selection changed
    ShapeSelectionChanged {
        selected: bool,
        text: Option<String>,
    },
    /// Payload matched no known field combination
    Unrecognized,
}

impl ChangePayload {
    /// Parses a payload from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Classifies the payload by field presence.
    ///
    /// Probe order matches the host component: paths first, then save
    /// completion with a path, then save completion alone, then shape
    /// selection. Extra fields on a matched payload are ignored.
    pub fn classify(self) -> SurfaceEvent {
        if let Some(count) = self.paths_update {
            SurfaceEvent::PathsUpdate(count)
        } else if let (Some(success), Some(path)) = (self.success, self.path.clone()) {
            SurfaceEvent::SaveCompleted {
                success,
                path: Some(path),
            }
        } else if let Some(success) = self.success {
            SurfaceEvent::SaveCompleted {
                success,
                path: None,
            }
        } else if let Some(selected) = self.is_shape_selected {
            SurfaceEvent::ShapeSelectionChanged {
                selected,
                text: self.shape_text,
            }
        } else {
            SurfaceEvent::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_update_wins_over_everything() {
        let payload = ChangePayload {
            paths_update: Some(4),
            success: Some(true),
            ..Default::default()
        };
        assert_eq!(payload.classify(), SurfaceEvent::PathsUpdate(4));
    }

    #[test]
    fn save_completion_with_and_without_path() {
        let with_path = ChangePayload {
            success: Some(true),
            path: Some("/tmp/out.png".to_string()),
            ..Default::default()
        };
        assert_eq!(
            with_path.classify(),
            SurfaceEvent::SaveCompleted {
                success: true,
                path: Some("/tmp/out.png".to_string())
            }
        );

        let without_path = ChangePayload {
            success: Some(false),
            ..Default::default()
        };
        assert_eq!(
            without_path.classify(),
            SurfaceEvent::SaveCompleted {
                success: false,
                path: None
            }
        );
    }

    #[test]
    fn selection_change_carries_optional_text() {
        let payload = ChangePayload {
            is_shape_selected: Some(true),
            shape_text: Some("label".to_string()),
            ..Default::default()
        };
        assert_eq!(
            payload.classify(),
            SurfaceEvent::ShapeSelectionChanged {
                selected: true,
                text: Some("label".to_string())
            }
        );
    }

    #[test]
    fn empty_payload_is_unrecognized() {
        assert_eq!(ChangePayload::default().classify(), SurfaceEvent::Unrecognized);
    }

    #[test]
    fn json_wire_form_uses_camel_case() {
        let payload =
            ChangePayload::from_json(r#"{"isShapeSelected": false, "shapeText": null}"#).unwrap();
        assert_eq!(
            payload.classify(),
            SurfaceEvent::ShapeSelectionChanged {
                selected: false,
                text: None
            }
        );

        let payload = ChangePayload::from_json(r#"{"pathsUpdate": 2}"#).unwrap();
        assert_eq!(payload.classify(), SurfaceEvent::PathsUpdate(2));
    }
}
