#![forbid(unsafe_code)]

//! JSON input parser for host-encoded browser events.
//!
//! The browser shim serializes each DOM event as a small JSON object with a
//! `kind` tag; [`parse_host_event`] turns it into a [`ViewportEvent`].
//! Kinds without a viewport mapping (focus, keyboard, ...) return `Ok(None)`.
//!
//! ```text
//! {"kind":"scroll","offset":640}
//! {"kind":"pointer","x":12.5,"y":300}
//! {"kind":"resize","width":1280,"height":800}
//! {"kind":"click","target":"nav:about"}
//! {"kind":"layout","id":3,"rect":{"x":0,"y":1400,"width":600,"height":220}}
//! ```

use folio_core::event::{ClickTarget, ViewportEvent};
use folio_core::geometry::Rect;
use serde::Deserialize;

/// Errors from parsing encoded input JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
    /// A coordinate was NaN or infinite.
    NonFinite(&'static str),
    /// `data-click` value that names no known target.
    UnknownTarget(String),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::NonFinite(field) => write!(f, "non-finite value in field: {field}"),
            Self::UnknownTarget(target) => write!(f, "unknown click target: {target}"),
        }
    }
}

impl std::error::Error for InputParseError {}

#[derive(Debug, Deserialize)]
struct RawInput {
    kind: String,
    #[serde(default)]
    offset: Option<f64>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    rect: Option<RawRect>,
}

#[derive(Debug, Deserialize)]
struct RawRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Parse one JSON-encoded host event.
///
/// Returns `Ok(None)` for kinds with no viewport mapping, and `Err` for
/// malformed JSON, missing fields, or non-finite coordinates.
pub fn parse_host_event(json: &str) -> Result<Option<ViewportEvent>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    let event = match raw.kind.as_str() {
        "scroll" => ViewportEvent::Scroll {
            offset: finite(raw.offset, "offset")?,
        },
        "pointer" => ViewportEvent::PointerMove {
            x: finite(raw.x, "x")?,
            y: finite(raw.y, "y")?,
        },
        "resize" => ViewportEvent::Resize {
            width: finite(raw.width, "width")?,
            height: finite(raw.height, "height")?,
        },
        "click" => {
            let key = raw.target.ok_or(InputParseError::MissingField("target"))?;
            let target =
                ClickTarget::from_data_key(&key).ok_or(InputParseError::UnknownTarget(key))?;
            ViewportEvent::Click(target)
        }
        "layout" => {
            let id = raw.id.ok_or(InputParseError::MissingField("id"))?;
            let rect = raw.rect.ok_or(InputParseError::MissingField("rect"))?;
            ViewportEvent::Layout {
                id,
                rect: Rect::new(
                    finite(Some(rect.x), "rect.x")?,
                    finite(Some(rect.y), "rect.y")?,
                    finite(Some(rect.width), "rect.width")?,
                    finite(Some(rect.height), "rect.height")?,
                ),
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(event))
}

fn finite(value: Option<f64>, field: &'static str) -> Result<f64, InputParseError> {
    let value = value.ok_or(InputParseError::MissingField(field))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputParseError::NonFinite(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::section::Section;

    #[test]
    fn scroll_and_pointer() {
        assert_eq!(
            parse_host_event(r#"{"kind":"scroll","offset":640}"#),
            Ok(Some(ViewportEvent::Scroll { offset: 640.0 }))
        );
        assert_eq!(
            parse_host_event(r#"{"kind":"pointer","x":12.5,"y":300}"#),
            Ok(Some(ViewportEvent::PointerMove { x: 12.5, y: 300.0 }))
        );
    }

    #[test]
    fn resize() {
        assert_eq!(
            parse_host_event(r#"{"kind":"resize","width":1280,"height":800}"#),
            Ok(Some(ViewportEvent::Resize {
                width: 1280.0,
                height: 800.0
            }))
        );
    }

    #[test]
    fn click_targets() {
        assert_eq!(
            parse_host_event(r#"{"kind":"click","target":"menu"}"#),
            Ok(Some(ViewportEvent::Click(ClickTarget::MenuButton)))
        );
        assert_eq!(
            parse_host_event(r#"{"kind":"click","target":"nav:about"}"#),
            Ok(Some(ViewportEvent::Click(ClickTarget::NavLink(Section::About))))
        );
        assert_eq!(
            parse_host_event(r#"{"kind":"click","target":"nav:blog"}"#),
            Err(InputParseError::UnknownTarget("nav:blog".to_owned()))
        );
        assert_eq!(
            parse_host_event(r#"{"kind":"click"}"#),
            Err(InputParseError::MissingField("target"))
        );
    }

    #[test]
    fn layout() {
        let json = r#"{"kind":"layout","id":3,"rect":{"x":0,"y":1400,"width":600,"height":220}}"#;
        assert_eq!(
            parse_host_event(json),
            Ok(Some(ViewportEvent::Layout {
                id: 3,
                rect: Rect::new(0.0, 1400.0, 600.0, 220.0),
            }))
        );
        assert_eq!(
            parse_host_event(r#"{"kind":"layout","id":3}"#),
            Err(InputParseError::MissingField("rect"))
        );
    }

    #[test]
    fn missing_coordinates() {
        assert_eq!(
            parse_host_event(r#"{"kind":"pointer","x":1}"#),
            Err(InputParseError::MissingField("y"))
        );
        assert_eq!(
            parse_host_event(r#"{"kind":"scroll"}"#),
            Err(InputParseError::MissingField("offset"))
        );
    }

    #[test]
    fn unknown_kind_is_ignored() {
        assert_eq!(parse_host_event(r#"{"kind":"keydown","key":"a"}"#), Ok(None));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_host_event("{not json"),
            Err(InputParseError::Json(_))
        ));
        assert!(matches!(
            parse_host_event(r#"{"offset":1}"#),
            Err(InputParseError::Json(_))
        ));
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(finite(Some(f64::NAN), "x"), Err(InputParseError::NonFinite("x")));
        assert_eq!(finite(Some(f64::INFINITY), "y"), Err(InputParseError::NonFinite("y")));
    }
}
