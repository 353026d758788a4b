//! # wxart-scene — Scene Schema & Validation Engine
//!
//! The typed contract between the scene-generating agent and the renderer.
//! This crate is the single source of truth for what a "scene" is: the type
//! definitions, the default and preset rules, and the validation algorithm
//! that accepts or rejects arbitrary structured input (typically produced by
//! an LLM) as a well-formed scene.
//!
//! ## Design
//!
//! 1. **Closed tagged unions.** [`Background`] and [`Element`] are sum types
//!    discriminated by a `type` tag. Dispatch is an exhaustive `match`; an
//!    unrecognized tag fails immediately without probing other variants.
//!
//! 2. **Construct-then-validate, no mutation.** Particle presets are
//!    resolved by a pure function ([`preset::resolve`]) that produces a new
//!    fully-populated record before range checks run. A validated [`Scene`]
//!    carries every default materialized and is never mutated afterwards.
//!
//! 3. **Reflection from the same definitions.** The JSON Schema and the
//!    textual format guide in [`reflect`] are generated from the same types
//!    and preset table the validator enforces, so documentation and
//!    enforcement cannot drift apart.
//!
//! Validation is pure and stateless: no I/O, no shared state, safe to call
//! concurrently from any number of generation requests.

pub mod error;
pub mod extract;
pub mod preset;
pub mod reflect;
pub mod scene;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{FieldError, SceneError};
pub use extract::{extract_json, strip_code_fences};
pub use preset::{resolve, ParticleOverrides, ParticlePreset, PresetDefaults};
pub use reflect::{format_guide, scene_schema, scene_schema_json};
pub use scene::{
    Background, Canvas, Element, Ellipse, Glow, GradientDirection, Line, Metadata, ParticleShape,
    ParticleSystem, Rect, Scene, SceneResponse, TextElement,
};
pub use validate::{validate_text, validate_value};
