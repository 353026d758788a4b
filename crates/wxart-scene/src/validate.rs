//! Structural validation of untrusted scene documents.
//!
//! [`validate_value`] accepts any parsed JSON value and either returns a
//! fully-resolved [`SceneResponse`] — every default and preset field
//! materialized — or rejects the whole document with per-field diagnostics.
//!
//! Dispatch over `type` tags is closed: an unrecognized tag fails
//! immediately and is never probed against other variants, which keeps
//! error messages precise. Particle fields are resolved from their preset
//! *before* range checks run, so an explicit `count` override is still
//! range-checked.

use serde_json::{Map, Value};

use crate::error::{FieldError, SceneError};
use crate::extract::strip_code_fences;
use crate::preset::{resolve, ParticleOverrides, ParticlePreset};
use crate::scene::{
    Background, Canvas, Element, Ellipse, Glow, GradientDirection, Line, Metadata, ParticleShape,
    ParticleSystem, Rect, Scene, SceneResponse, TextElement, DEFAULT_COLOR,
};

/// Element tags accepted by the dispatcher, in catalog order.
const ELEMENT_TYPES: &[&str] = &["ellipse", "rect", "line", "text", "glow", "particle_system"];

/// Element tags from the earlier layered format, deliberately rejected.
/// `ellipse` supersedes `circle`; `triangle` and `arc` were dropped.
const REMOVED_ELEMENT_TYPES: &[&str] = &["circle", "triangle", "arc"];

/// Validate a scene document given as text, stripping markdown code fences
/// first. Returns [`SceneError::Parse`] when the remainder is not JSON.
pub fn validate_text(text: &str) -> Result<SceneResponse, SceneError> {
    let value: Value = serde_json::from_str(strip_code_fences(text))?;
    validate_value(&value)
}

/// Validate a parsed JSON value as a scene document.
///
/// The top level must be an object with a `scene` key. On success every
/// default and preset field in the result is materialized; on failure the
/// error lists each offending field path. All-or-nothing: no partial scene
/// is ever returned.
pub fn validate_value(raw: &Value) -> Result<SceneResponse, SceneError> {
    let Some(root) = raw.as_object() else {
        return Err(SceneError::validation(vec![FieldError::new(
            "",
            format!("expected an object, got {}", json_type(raw)),
        )]));
    };

    let scene_raw = match root.get("scene") {
        None | Some(Value::Null) => {
            return Err(SceneError::validation(vec![FieldError::new(
                "scene",
                "missing required field",
            )]));
        }
        Some(value) => value,
    };
    let Some(scene_obj) = scene_raw.as_object() else {
        return Err(SceneError::validation(vec![FieldError::new(
            "scene",
            format!("expected an object, got {}", json_type(scene_raw)),
        )]));
    };

    let mut errors = Vec::new();
    let canvas = canvas_field(scene_obj.get("canvas"), &mut errors);
    let background = background_field(scene_obj.get("background"), &mut errors);
    let elements = elements_field(scene_obj.get("elements"), &mut errors);
    let metadata = metadata_field(scene_obj.get("metadata"), &mut errors);

    if errors.is_empty() {
        Ok(SceneResponse {
            scene: Scene {
                canvas,
                background,
                elements,
                metadata,
            },
        })
    } else {
        Err(SceneError::validation(errors))
    }
}

// ── Scene components ────────────────────────────────────────────────

fn canvas_field(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Canvas {
    let Some(value) = non_null(value) else {
        return Canvas::default();
    };
    let Some(obj) = value.as_object() else {
        errors.push(type_mismatch("canvas", "an object", value));
        return Canvas::default();
    };
    Canvas {
        width: dimension_field(obj, "canvas.width", "width", 800, errors),
        height: dimension_field(obj, "canvas.height", "height", 600, errors),
    }
}

fn dimension_field(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    default: u32,
    errors: &mut Vec<FieldError>,
) -> u32 {
    match field(obj, key) {
        None => default,
        Some(value) => match value.as_u64() {
            Some(n) if (1..=u64::from(u32::MAX)).contains(&n) => n as u32,
            _ => {
                errors.push(FieldError::new(path, "must be a positive integer"));
                default
            }
        },
    }
}

fn background_field(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Background {
    let Some(value) = non_null(value) else {
        return Background::default();
    };
    let Some(obj) = value.as_object() else {
        errors.push(type_mismatch("background", "an object", value));
        return Background::default();
    };
    let Some(tag) = tag_field(obj, "background", errors) else {
        return Background::default();
    };
    match tag {
        "solid" => Background::Solid {
            color: req_string(obj, "background", "color", errors),
        },
        "gradient" => Background::Gradient {
            colors: gradient_colors(obj, errors),
            direction: gradient_direction(obj, errors),
        },
        other => {
            errors.push(FieldError::new(
                "background.type",
                format!("unknown background type \"{other}\" (expected \"solid\" or \"gradient\")"),
            ));
            Background::default()
        }
    }
}

fn gradient_colors(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Vec<String> {
    match field(obj, "colors") {
        None => {
            errors.push(FieldError::new("background.colors", "missing required field"));
            Vec::new()
        }
        Some(Value::Array(items)) => {
            let mut colors = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(color) => colors.push(color.to_string()),
                    None => errors.push(type_mismatch(
                        &format!("background.colors[{index}]"),
                        "a string",
                        item,
                    )),
                }
            }
            if items.len() < 2 {
                errors.push(FieldError::new(
                    "background.colors",
                    "a gradient needs at least 2 colors",
                ));
            }
            colors
        }
        Some(value) => {
            errors.push(type_mismatch("background.colors", "an array", value));
            Vec::new()
        }
    }
}

fn gradient_direction(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> GradientDirection {
    match field(obj, "direction") {
        None => GradientDirection::Vertical,
        Some(value) => match value.as_str().and_then(GradientDirection::parse) {
            Some(direction) => direction,
            None => {
                errors.push(FieldError::new(
                    "background.direction",
                    format!(
                        "unknown gradient direction {value} (expected \"vertical\" or \"horizontal\")"
                    ),
                ));
                GradientDirection::Vertical
            }
        },
    }
}

fn elements_field(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Vec<Element> {
    let Some(value) = non_null(value) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        errors.push(type_mismatch("elements", "an array", value));
        return Vec::new();
    };
    let mut elements = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let path = format!("elements[{index}]");
        if let Some(element) = element_value(item, &path, errors) {
            elements.push(element);
        }
    }
    elements
}

fn metadata_field(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Metadata {
    let Some(value) = non_null(value) else {
        return Metadata::default();
    };
    let Some(obj) = value.as_object() else {
        errors.push(type_mismatch("metadata", "an object", value));
        return Metadata::default();
    };
    Metadata {
        title: opt_string_default(obj, "metadata", "title", "", errors),
        weather_summary: opt_string_default(obj, "metadata", "weather_summary", "", errors),
    }
}

// ── Element dispatch ────────────────────────────────────────────────

fn element_value(value: &Value, path: &str, errors: &mut Vec<FieldError>) -> Option<Element> {
    let Some(obj) = value.as_object() else {
        errors.push(type_mismatch(path, "an object", value));
        return None;
    };
    let tag = tag_field(obj, path, errors)?;
    match tag {
        "ellipse" => Some(Element::Ellipse(ellipse_fields(obj, path, errors))),
        "rect" => Some(Element::Rect(rect_fields(obj, path, errors))),
        "line" => Some(Element::Line(line_fields(obj, path, errors))),
        "text" => Some(Element::Text(text_fields(obj, path, errors))),
        "glow" => Some(Element::Glow(glow_fields(obj, path, errors))),
        "particle_system" => {
            particle_system_fields(obj, path, errors).map(Element::ParticleSystem)
        }
        removed if REMOVED_ELEMENT_TYPES.contains(&removed) => {
            errors.push(FieldError::new(
                format!("{path}.type"),
                format!("element type \"{removed}\" was removed and is no longer supported"),
            ));
            None
        }
        other => {
            errors.push(FieldError::new(
                format!("{path}.type"),
                format!(
                    "unknown element type \"{other}\" (expected one of: {})",
                    ELEMENT_TYPES.join(", ")
                ),
            ));
            None
        }
    }
}

fn ellipse_fields(obj: &Map<String, Value>, path: &str, errors: &mut Vec<FieldError>) -> Ellipse {
    Ellipse {
        x: req_f64(obj, path, "x", errors),
        y: req_f64(obj, path, "y", errors),
        width: req_f64(obj, path, "width", errors),
        height: req_f64(obj, path, "height", errors),
        fill: opt_string(obj, path, "fill", errors),
        stroke: opt_string(obj, path, "stroke", errors),
        stroke_weight: opt_f64(obj, path, "stroke_weight", 1.0, errors),
        opacity: opacity_field(obj, path, 1.0, errors),
    }
}

fn rect_fields(obj: &Map<String, Value>, path: &str, errors: &mut Vec<FieldError>) -> Rect {
    Rect {
        x: req_f64(obj, path, "x", errors),
        y: req_f64(obj, path, "y", errors),
        width: req_f64(obj, path, "width", errors),
        height: req_f64(obj, path, "height", errors),
        fill: opt_string(obj, path, "fill", errors),
        stroke: opt_string(obj, path, "stroke", errors),
        corner_radius: opt_f64(obj, path, "corner_radius", 0.0, errors),
        opacity: opacity_field(obj, path, 1.0, errors),
    }
}

fn line_fields(obj: &Map<String, Value>, path: &str, errors: &mut Vec<FieldError>) -> Line {
    Line {
        x1: req_f64(obj, path, "x1", errors),
        y1: req_f64(obj, path, "y1", errors),
        x2: req_f64(obj, path, "x2", errors),
        y2: req_f64(obj, path, "y2", errors),
        stroke: opt_string_default(obj, path, "stroke", DEFAULT_COLOR, errors),
        stroke_weight: opt_f64(obj, path, "stroke_weight", 1.0, errors),
        opacity: opacity_field(obj, path, 1.0, errors),
    }
}

fn text_fields(obj: &Map<String, Value>, path: &str, errors: &mut Vec<FieldError>) -> TextElement {
    TextElement {
        content: req_string(obj, path, "content", errors),
        x: req_f64(obj, path, "x", errors),
        y: req_f64(obj, path, "y", errors),
        size: opt_f64(obj, path, "size", 16.0, errors),
        fill: opt_string_default(obj, path, "fill", DEFAULT_COLOR, errors),
        opacity: opacity_field(obj, path, 1.0, errors),
    }
}

fn glow_fields(obj: &Map<String, Value>, path: &str, errors: &mut Vec<FieldError>) -> Glow {
    Glow {
        x: req_f64(obj, path, "x", errors),
        y: req_f64(obj, path, "y", errors),
        radius: req_f64(obj, path, "radius", errors),
        color: opt_string_default(obj, path, "color", DEFAULT_COLOR, errors),
        intensity: opt_f64(obj, path, "intensity", 0.5, errors),
        opacity: opacity_field(obj, path, 1.0, errors),
    }
}

fn particle_system_fields(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<ParticleSystem> {
    let preset = match field(obj, "preset") {
        None => {
            errors.push(FieldError::new(
                format!("{path}.preset"),
                "missing required field",
            ));
            None
        }
        Some(value) => match value.as_str() {
            None => {
                errors.push(type_mismatch(&format!("{path}.preset"), "a string", value));
                None
            }
            Some(name) => match ParticlePreset::parse(name) {
                Some(preset) => Some(preset),
                None => {
                    errors.push(FieldError::new(
                        format!("{path}.preset"),
                        format!(
                            "unknown particle preset \"{name}\" (expected one of: rain, snow, fog, dust, stars)"
                        ),
                    ));
                    None
                }
            },
        },
    };

    let particle_shape = match field(obj, "particle_shape") {
        None => None,
        Some(value) => match value.as_str().and_then(ParticleShape::parse) {
            Some(shape) => Some(shape),
            None => {
                errors.push(FieldError::new(
                    format!("{path}.particle_shape"),
                    format!(
                        "unknown particle shape {value} (expected \"circle\", \"line\", or \"rect\")"
                    ),
                ));
                None
            }
        },
    };

    let count_override = match field(obj, "count") {
        None => None,
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                errors.push(type_mismatch(&format!("{path}.count"), "an integer", value));
                None
            }
        },
    };

    let overrides = ParticleOverrides {
        particle_shape,
        count: None, // filled in below, after the resolved value is range-checked
        speed: opt_f64_override(obj, path, "speed", errors),
        angle: opt_f64_override(obj, path, "angle", errors),
        drift: opt_f64_override(obj, path, "drift", errors),
        size: opt_f64_override(obj, path, "size", errors),
        color: opt_string(obj, path, "color", errors),
        opacity: opacity_override(obj, path, errors),
    };

    let preset = preset?;

    // Preset resolution happens before the range check, so an explicit
    // count override is still range-checked.
    let resolved_count = count_override.unwrap_or_else(|| i64::from(preset.defaults().count));
    if !(1..=1000).contains(&resolved_count) {
        errors.push(FieldError::new(
            format!("{path}.count"),
            "must be between 1 and 1000",
        ));
        return None;
    }

    Some(resolve(
        preset,
        ParticleOverrides {
            count: Some(resolved_count as u32),
            ..overrides
        },
    ))
}

// ── Field readers ───────────────────────────────────────────────────

/// Read a field, treating an explicit JSON `null` the same as absence.
fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn tag_field<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match field(obj, "type") {
        None => {
            errors.push(FieldError::new(
                format!("{path}.type"),
                "missing required field",
            ));
            None
        }
        Some(value) => match value.as_str() {
            Some(tag) => Some(tag),
            None => {
                errors.push(type_mismatch(&format!("{path}.type"), "a string", value));
                None
            }
        },
    }
}

fn req_f64(obj: &Map<String, Value>, path: &str, key: &str, errors: &mut Vec<FieldError>) -> f64 {
    match field(obj, key) {
        None => {
            errors.push(FieldError::new(
                format!("{path}.{key}"),
                "missing required field",
            ));
            0.0
        }
        Some(value) => match value.as_f64() {
            Some(n) => n,
            None => {
                errors.push(type_mismatch(&format!("{path}.{key}"), "a number", value));
                0.0
            }
        },
    }
}

fn opt_f64(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    default: f64,
    errors: &mut Vec<FieldError>,
) -> f64 {
    opt_f64_override(obj, path, key, errors).unwrap_or(default)
}

fn opt_f64_override(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match field(obj, key) {
        None => None,
        Some(value) => match value.as_f64() {
            Some(n) => Some(n),
            None => {
                errors.push(type_mismatch(&format!("{path}.{key}"), "a number", value));
                None
            }
        },
    }
}

fn opacity_field(
    obj: &Map<String, Value>,
    path: &str,
    default: f64,
    errors: &mut Vec<FieldError>,
) -> f64 {
    opacity_override(obj, path, errors).unwrap_or(default)
}

fn opacity_override(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = opt_f64_override(obj, path, "opacity", errors)?;
    if (0.0..=1.0).contains(&value) {
        Some(value)
    } else {
        errors.push(FieldError::new(
            format!("{path}.opacity"),
            "must be between 0.0 and 1.0",
        ));
        None
    }
}

fn req_string(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    match field(obj, key) {
        None => {
            errors.push(FieldError::new(
                format!("{path}.{key}"),
                "missing required field",
            ));
            String::new()
        }
        Some(value) => match value.as_str() {
            Some(s) => s.to_string(),
            None => {
                errors.push(type_mismatch(&format!("{path}.{key}"), "a string", value));
                String::new()
            }
        },
    }
}

fn opt_string(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match field(obj, key) {
        None => None,
        Some(value) => match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                errors.push(type_mismatch(&format!("{path}.{key}"), "a string", value));
                None
            }
        },
    }
}

fn opt_string_default(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    default: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    opt_string(obj, path, key, errors).unwrap_or_else(|| default.to_string())
}

fn type_mismatch(path: &str, expected: &str, value: &Value) -> FieldError {
    FieldError::new(path, format!("expected {expected}, got {}", json_type(value)))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
