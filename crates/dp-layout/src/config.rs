//! Home-screen layout configuration

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::geometry::{Bounded, WidgetRect};
use crate::LayoutError;

/// Horizontal alignment of widget content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment of widget content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAlign {
    Top,
    Middle,
    Bottom,
}

/// Kinds of home-screen widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    Clock,
    Weather,
    Todo,
    AudioVisualizer,
    Player,
}

/// A widget placed on a home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Name, unique within its page
    pub name: String,

    pub kind: WidgetKind,

    /// Position and size in grid units
    pub coords: WidgetRect,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_align: Option<XAlign>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_align: Option<YAlign>,
}

impl WidgetConfig {
    pub fn new(name: impl Into<String>, kind: WidgetKind, coords: WidgetRect) -> Self {
        Self {
            name: name.into(),
            kind,
            coords,
            x_align: None,
            y_align: None,
        }
    }

    /// Builder: set content alignment
    pub fn aligned(mut self, x_align: Option<XAlign>, y_align: Option<YAlign>) -> Self {
        self.x_align = x_align;
        self.y_align = y_align;
        self
    }
}

impl Bounded for WidgetConfig {
    fn bounds(&self) -> WidgetRect {
        self.coords
    }
}

/// One page of widgets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HomePage {
    pub widgets: Vec<WidgetConfig>,
}

impl HomePage {
    /// Size of the grid spanned by the widgets, in grid units
    pub fn extent(&self) -> (f32, f32) {
        self.widgets.iter().fold((0.0f32, 0.0f32), |(w, h), widget| {
            (w.max(widget.coords.right()), h.max(widget.coords.bottom()))
        })
    }
}

/// Complete home-screen layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Name of the user the home screen greets
    pub name: String,

    pub pages: Vec<HomePage>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            name: "Neill".to_string(),
            pages: vec![
                HomePage {
                    widgets: vec![
                        WidgetConfig::new("clock", WidgetKind::Clock, WidgetRect::new(0.0, 0.0, 6.0, 3.0))
                            .aligned(Some(XAlign::Right), Some(YAlign::Middle)),
                        WidgetConfig::new("weather", WidgetKind::Weather, WidgetRect::new(6.0, 0.0, 6.0, 3.0))
                            .aligned(Some(XAlign::Left), Some(YAlign::Middle)),
                        WidgetConfig::new("todo", WidgetKind::Todo, WidgetRect::new(6.0, 3.0, 6.0, 9.0))
                            .aligned(Some(XAlign::Left), None),
                    ],
                },
                HomePage {
                    widgets: vec![
                        WidgetConfig::new(
                            "audioVisualizer",
                            WidgetKind::AudioVisualizer,
                            WidgetRect::new(2.0, 3.0, 8.0, 8.0),
                        )
                        .aligned(None, Some(YAlign::Top)),
                        WidgetConfig::new("player", WidgetKind::Player, WidgetRect::new(2.0, 1.0, 8.0, 2.0)),
                    ],
                },
            ],
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a layout from JSON
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a layout from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded layout with {} pages from {:?}", config.pages.len(), path);
        Ok(config)
    }

    /// Save the layout as a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check that widget names are unique per page and every widget has an area
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (page_index, page) in self.pages.iter().enumerate() {
            let mut names = HashSet::new();
            for widget in &page.widgets {
                if !names.insert(widget.name.as_str()) {
                    return Err(LayoutError::DuplicateWidget {
                        page: page_index,
                        name: widget.name.clone(),
                    });
                }
                if !widget.coords.has_area() {
                    return Err(LayoutError::EmptyWidget {
                        page: page_index,
                        name: widget.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Page at `index`
    pub fn page(&self, index: usize) -> Result<&HomePage, LayoutError> {
        self.pages.get(index).ok_or(LayoutError::UnknownPage(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.pages[0].extent(), (12.0, 12.0));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = LayoutConfig::default().to_json().unwrap();
        assert!(json.contains("\"xAlign\": \"right\""));
        assert!(json.contains("\"audioVisualizer\""));

        let parsed = LayoutConfig::from_json(&json).unwrap();
        assert_eq!(parsed, LayoutConfig::default());
    }

    #[test]
    fn test_duplicate_widget_names_are_rejected() {
        let json = r#"{
            "name": "test",
            "pages": [{ "widgets": [
                { "name": "a", "kind": "clock", "coords": { "x": 0, "y": 0, "w": 1, "h": 1 } },
                { "name": "a", "kind": "todo", "coords": { "x": 1, "y": 0, "w": 1, "h": 1 } }
            ] }]
        }"#;

        let err = LayoutConfig::from_json(json).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateWidget { page: 0, ref name } if name == "a"));
    }

    #[test]
    fn test_empty_widget_is_rejected() {
        let json = r#"{
            "name": "test",
            "pages": [{ "widgets": [
                { "name": "a", "kind": "clock", "coords": { "x": 0, "y": 0, "w": 0, "h": 1 } }
            ] }]
        }"#;

        assert!(matches!(
            LayoutConfig::from_json(json).unwrap_err(),
            LayoutError::EmptyWidget { .. }
        ));
    }

    #[test]
    fn test_unknown_page() {
        let config = LayoutConfig::default();
        assert!(config.page(1).is_ok());
        assert!(matches!(config.page(5), Err(LayoutError::UnknownPage(5))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("dp-layout-test-{}.json", std::process::id()));
        let config = LayoutConfig::default();
        config.save(&path).unwrap();

        let loaded = LayoutConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(&path);
    }
}
