//! Shape annotation descriptors.
//!
//! Shapes are discrete, repositionable annotation objects (text, images,
//! geometric primitives) that live on the native surface. The core only
//! tracks their descriptors for undo/redo bookkeeping; manipulation and
//! hit-testing happen natively.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The shape primitives understood by the native surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Circle,
    Rect,
    Square,
    Triangle,
    Arrow,
    Line,
    Cloud,
    Text,
    Image,
}

/// Descriptor for one shape annotation.
///
/// The id is optional on the way in; the editor assigns a generated id
/// before registration, so every registered shape carries one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Session-unique id; generated when the caller does not supply one
    #[serde(default)]
    pub id: Option<String>,
    /// Which primitive the native surface should instantiate
    pub shape_type: ShapeType,
    /// Font family for text shapes
    #[serde(default)]
    pub text_font: Option<String>,
    /// Font size for text shapes; 0 means "native default"
    #[serde(default)]
    pub font_size: f64,
    /// Text content for text shapes
    #[serde(default)]
    pub text: Option<String>,
    /// Asset reference for image shapes
    #[serde(default)]
    pub image_asset: Option<String>,
}

impl ShapeConfig {
    /// Creates a bare descriptor for a geometric shape.
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            id: None,
            shape_type,
            text_font: None,
            font_size: 0.0,
            text: None,
            image_asset: None,
        }
    }

    /// Creates a text shape descriptor.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::new(ShapeType::Text)
        }
    }

    /// Creates an image shape descriptor referencing a host asset.
    pub fn image(asset: impl Into<String>) -> Self {
        Self {
            image_asset: Some(asset.into()),
            ..Self::new(ShapeType::Image)
        }
    }

    /// Returns the assigned id, if registration has happened.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Generates a session-unique shape id.
///
/// Stable for the shape's lifetime and collision-resistant for a UI
/// session; not cryptographic.
pub fn generate_shape_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_nonempty_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..256 {
            let id = generate_shape_id();
            assert!(!id.is_empty());
            assert!(seen.insert(id), "shape id collided within a session");
        }
    }

    #[test]
    fn constructors_fill_type_specific_fields() {
        let text = ShapeConfig::text("hello");
        assert_eq!(text.shape_type, ShapeType::Text);
        assert_eq!(text.text.as_deref(), Some("hello"));
        assert!(text.id().is_none());

        let image = ShapeConfig::image("logo.png");
        assert_eq!(image.shape_type, ShapeType::Image);
        assert_eq!(image.image_asset.as_deref(), Some("logo.png"));
    }
}
