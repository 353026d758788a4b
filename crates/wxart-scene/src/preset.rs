//! Particle presets: named bundles of particle-system defaults keyed by
//! weather phenomenon.
//!
//! Resolution is a pure function: the preset and the caller's explicit
//! overrides go in, a brand-new fully-populated [`ParticleSystem`] comes
//! out. Nothing is mutated in place, and range validation runs on the
//! resolved record afterwards.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::{ParticleShape, ParticleSystem, DEFAULT_COLOR};

/// Named particle preset. Each preset carries default values for every
/// particle field except `color`, which defaults to white independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticlePreset {
    Rain,
    Snow,
    Fog,
    Dust,
    Stars,
}

/// Per-preset default field values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetDefaults {
    pub particle_shape: ParticleShape,
    pub count: u32,
    pub speed: f64,
    pub angle: f64,
    pub drift: f64,
    pub size: f64,
    pub opacity: f64,
}

impl ParticlePreset {
    /// All presets, in catalog order.
    pub const ALL: [ParticlePreset; 5] = [
        Self::Rain,
        Self::Snow,
        Self::Fog,
        Self::Dust,
        Self::Stars,
    ];

    /// Parse the wire name of a preset.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rain" => Some(Self::Rain),
            "snow" => Some(Self::Snow),
            "fog" => Some(Self::Fog),
            "dust" => Some(Self::Dust),
            "stars" => Some(Self::Stars),
            _ => None,
        }
    }

    /// Wire name of this preset.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Dust => "dust",
            Self::Stars => "stars",
        }
    }

    /// Default field values for this preset. Angles are in degrees.
    pub fn defaults(self) -> PresetDefaults {
        match self {
            Self::Rain => PresetDefaults {
                particle_shape: ParticleShape::Line,
                count: 200,
                speed: 5.0,
                angle: 260.0,
                drift: 0.5,
                size: 4.0,
                opacity: 0.6,
            },
            Self::Snow => PresetDefaults {
                particle_shape: ParticleShape::Circle,
                count: 150,
                speed: 1.5,
                angle: 270.0,
                drift: 1.5,
                size: 4.0,
                opacity: 0.8,
            },
            Self::Fog => PresetDefaults {
                particle_shape: ParticleShape::Circle,
                count: 80,
                speed: 0.5,
                angle: 180.0,
                drift: 0.0,
                size: 20.0,
                opacity: 0.3,
            },
            Self::Dust => PresetDefaults {
                particle_shape: ParticleShape::Circle,
                count: 50,
                speed: 1.0,
                angle: 200.0,
                drift: 2.0,
                size: 2.0,
                opacity: 0.5,
            },
            Self::Stars => PresetDefaults {
                particle_shape: ParticleShape::Circle,
                count: 100,
                speed: 0.0,
                angle: 0.0,
                drift: 0.0,
                size: 2.0,
                opacity: 0.9,
            },
        }
    }
}

/// Caller-supplied particle field overrides, prior to resolution.
///
/// `None` means "not specified": the preset value applies. An explicit
/// value always wins over the preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleOverrides {
    pub particle_shape: Option<ParticleShape>,
    pub count: Option<u32>,
    pub speed: Option<f64>,
    pub angle: Option<f64>,
    pub drift: Option<f64>,
    pub size: Option<f64>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

/// Resolve a preset and explicit overrides into a fully-populated particle
/// system. `color` is never taken from the preset; absent a caller value it
/// falls back to white.
pub fn resolve(preset: ParticlePreset, overrides: ParticleOverrides) -> ParticleSystem {
    let defaults = preset.defaults();
    ParticleSystem {
        preset,
        particle_shape: overrides.particle_shape.unwrap_or(defaults.particle_shape),
        count: overrides.count.unwrap_or(defaults.count),
        speed: overrides.speed.unwrap_or(defaults.speed),
        angle: overrides.angle.unwrap_or(defaults.angle),
        drift: overrides.drift.unwrap_or(defaults.drift),
        size: overrides.size.unwrap_or(defaults.size),
        color: overrides
            .color
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        opacity: overrides.opacity.unwrap_or(defaults.opacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_defaults_resolve_exactly() {
        let system = resolve(ParticlePreset::Rain, ParticleOverrides::default());
        assert_eq!(system.preset, ParticlePreset::Rain);
        assert_eq!(system.particle_shape, ParticleShape::Line);
        assert_eq!(system.count, 200);
        assert_eq!(system.speed, 5.0);
        assert_eq!(system.angle, 260.0);
        assert_eq!(system.drift, 0.5);
        assert_eq!(system.size, 4.0);
        assert_eq!(system.opacity, 0.6);
        assert_eq!(system.color, "#ffffff");
    }

    #[test]
    fn explicit_overrides_win_over_preset() {
        let overrides = ParticleOverrides {
            count: Some(50),
            speed: Some(10.0),
            ..ParticleOverrides::default()
        };
        let system = resolve(ParticlePreset::Rain, overrides);
        assert_eq!(system.count, 50);
        assert_eq!(system.speed, 10.0);
        // Fields without overrides still come from the preset.
        assert_eq!(system.angle, 260.0);
        assert_eq!(system.particle_shape, ParticleShape::Line);
    }

    #[test]
    fn color_is_independent_of_preset() {
        let overrides = ParticleOverrides {
            color: Some("#aaccff".to_string()),
            ..ParticleOverrides::default()
        };
        let system = resolve(ParticlePreset::Snow, overrides);
        assert_eq!(system.color, "#aaccff");

        let plain = resolve(ParticlePreset::Snow, ParticleOverrides::default());
        assert_eq!(plain.color, "#ffffff");
    }

    #[test]
    fn snow_defaults_match_table() {
        let d = ParticlePreset::Snow.defaults();
        assert_eq!(d.particle_shape, ParticleShape::Circle);
        assert_eq!(d.count, 150);
        assert_eq!(d.speed, 1.5);
        assert_eq!(d.angle, 270.0);
        assert_eq!(d.drift, 1.5);
    }

    #[test]
    fn fog_is_large_slow_and_faint() {
        let d = ParticlePreset::Fog.defaults();
        assert_eq!(d.size, 20.0);
        assert_eq!(d.speed, 0.5);
        assert_eq!(d.opacity, 0.3);
    }

    #[test]
    fn stars_do_not_move() {
        let d = ParticlePreset::Stars.defaults();
        assert_eq!(d.speed, 0.0);
        assert_eq!(d.angle, 0.0);
        assert_eq!(d.drift, 0.0);
    }

    #[test]
    fn all_preset_names_parse_back() {
        for preset in ParticlePreset::ALL {
            assert_eq!(ParticlePreset::parse(preset.name()), Some(preset));
        }
        assert_eq!(ParticlePreset::parse("hail"), None);
    }

    #[test]
    fn every_preset_default_count_is_in_range() {
        for preset in ParticlePreset::ALL {
            let count = preset.defaults().count;
            assert!((1..=1000).contains(&count), "{}: {count}", preset.name());
        }
    }
}
