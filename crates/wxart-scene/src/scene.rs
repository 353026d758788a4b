//! Scene data model: the validated, fully-resolved description of a drawable
//! composition.
//!
//! Every type here represents *resolved* data — defaults and preset values
//! are already materialized, so a renderer never needs to look anything up.
//! A [`Scene`] is constructed once per generation request by the validator
//! and is never mutated afterwards.
//!
//! Both tagged unions ([`Background`] and [`Element`]) are closed: the `type`
//! discriminator selects exactly one variant, and adding or removing a
//! variant is a single compile-time-checked change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::preset::ParticlePreset;

/// Fallback color for stroke/fill/particle fields that default to white.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Background color used when a scene supplies no background at all.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";

/// Canvas dimensions in pixels. Both dimensions are positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Title and weather summary displayed alongside the rendered artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub weather_summary: String,
}

/// Direction of a gradient background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    Vertical,
    Horizontal,
}

impl GradientDirection {
    /// Parse the wire name of a direction.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "vertical" => Some(Self::Vertical),
            "horizontal" => Some(Self::Horizontal),
            _ => None,
        }
    }

    /// Wire name of this direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// Scene background, discriminated by the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    /// Single solid fill color.
    Solid { color: String },
    /// Linear gradient between two or more colors.
    Gradient {
        colors: Vec<String>,
        direction: GradientDirection,
    },
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid {
            color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Shape drawn for each particle in a particle system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    Circle,
    Line,
    Rect,
}

impl ParticleShape {
    /// Parse the wire name of a particle shape.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "circle" => Some(Self::Circle),
            "line" => Some(Self::Line),
            "rect" => Some(Self::Rect),
            _ => None,
        }
    }

    /// Wire name of this shape.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Rect => "rect",
        }
    }
}

/// Axis-aligned ellipse. An ellipse with equal width and height stands in
/// for the removed `circle` element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ellipse {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_weight: f64,
    pub opacity: f64,
}

/// Axis-aligned rectangle with optional rounded corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub corner_radius: f64,
    pub opacity: f64,
}

/// Straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_weight: f64,
    pub opacity: f64,
}

/// Text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextElement {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: String,
    pub opacity: f64,
}

/// Radial light halo, used for sun glow, moon halo, and light sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Glow {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub intensity: f64,
    pub opacity: f64,
}

/// Animated particle field. All fields are fully resolved: any field the
/// caller left unset was filled in from the preset before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParticleSystem {
    pub preset: ParticlePreset,
    pub particle_shape: ParticleShape,
    pub count: u32,
    pub speed: f64,
    /// Travel direction in degrees (270 = straight down).
    pub angle: f64,
    pub drift: f64,
    pub size: f64,
    pub color: String,
    pub opacity: f64,
}

/// One visual primitive within a scene, discriminated by the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Ellipse(Ellipse),
    Rect(Rect),
    Line(Line),
    Text(TextElement),
    Glow(Glow),
    ParticleSystem(ParticleSystem),
}

impl Element {
    /// Wire name of this element's `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Ellipse(_) => "ellipse",
            Self::Rect(_) => "rect",
            Self::Line(_) => "line",
            Self::Text(_) => "text",
            Self::Glow(_) => "glow",
            Self::ParticleSystem(_) => "particle_system",
        }
    }

    /// Opacity of this element, whichever variant it is.
    pub fn opacity(&self) -> f64 {
        match self {
            Self::Ellipse(e) => e.opacity,
            Self::Rect(e) => e.opacity,
            Self::Line(e) => e.opacity,
            Self::Text(e) => e.opacity,
            Self::Glow(e) => e.opacity,
            Self::ParticleSystem(e) => e.opacity,
        }
    }
}

/// A validated, fully-resolved scene. Elements render in sequence order:
/// later elements paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    pub canvas: Canvas,
    pub background: Background,
    pub elements: Vec<Element>,
    pub metadata: Metadata,
}

/// Top-level document shape exchanged with the agent and the renderer:
/// a single required `scene` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneResponse {
    pub scene: Scene,
}
