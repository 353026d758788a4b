//! Schema reflection: machine-readable and human-readable descriptions of
//! the scene format for upstream content generators.
//!
//! Both views are derived from the same type definitions the validator
//! enforces — the JSON Schema comes from the `schemars` derives on the
//! scene types, and the guide's preset table is generated from
//! [`ParticlePreset::defaults`] — so documentation cannot drift from what
//! is actually enforced.

use serde_json::Value;

use crate::preset::ParticlePreset;
use crate::scene::SceneResponse;

/// JSON Schema for the full scene document, derived from the scene types.
pub fn scene_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(SceneResponse)
}

/// The scene JSON Schema as a plain `serde_json::Value`.
pub fn scene_schema_json() -> Value {
    serde_json::to_value(scene_schema()).expect("scene schema serializes to JSON")
}

/// Human-readable usage guide for the scene format: schema, element catalog,
/// particle presets, and the weather-to-visual mapping heuristics.
pub fn format_guide() -> String {
    let schema = serde_json::to_string_pretty(&scene_schema_json())
        .expect("scene schema serializes to JSON");

    let mut guide = String::new();
    guide.push_str("## Scene JSON Schema (generated from the scene type definitions)\n\n");
    guide.push_str(&schema);
    guide.push_str("\n\n");
    guide.push_str(STRUCTURE_OVERVIEW);
    guide.push_str(ELEMENT_CATALOG);
    guide.push_str("### Particle Presets\n\nEvery field except `color` defaults from the preset; explicit values win.\n\n");
    guide.push_str(&preset_table());
    guide.push('\n');
    guide.push_str(WEATHER_MAPPING);
    guide.push_str(COLOR_GUIDELINES);
    guide.push_str(RULES);
    guide
}

/// Markdown table of every preset's default field values, generated from the
/// same table the resolver uses.
fn preset_table() -> String {
    let mut rows = String::from(
        "| preset | particle_shape | count | speed | angle | drift | size | opacity |\n\
         |---|---|---|---|---|---|---|---|\n",
    );
    for preset in ParticlePreset::ALL {
        let d = preset.defaults();
        rows.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            preset.name(),
            d.particle_shape.name(),
            d.count,
            d.speed,
            d.angle,
            d.drift,
            d.size,
            d.opacity,
        ));
    }
    rows
}

const STRUCTURE_OVERVIEW: &str = r##"## Structure Overview

Return a JSON object with this top-level shape:
{
  "scene": {
    "canvas": {"width": 800, "height": 600},
    "background": <background>,
    "elements": [<element>, ...],
    "metadata": {"title": "<short title>", "weather_summary": "<conditions summary>"}
  }
}

Elements render in order: later elements paint over earlier ones.

### Background (pick one)
- Solid: {"type": "solid", "color": "#hex"}
- Gradient: {"type": "gradient", "colors": ["#hex1", "#hex2"], "direction": "vertical"|"horizontal"}

"##;

const ELEMENT_CATALOG: &str = r##"### 6 Element Types

1. ellipse — Sun, moon, clouds, puddles (equal width/height makes a circle)
   {"type": "ellipse", "x": N, "y": N, "width": N, "height": N, "fill": "#hex", "stroke": "#hex", "opacity": 0-1}

2. rect — Ground, buildings, sky bands
   {"type": "rect", "x": N, "y": N, "width": N, "height": N, "fill": "#hex", "corner_radius": N, "opacity": 0-1}

3. line — Lightning bolts, streaks
   {"type": "line", "x1": N, "y1": N, "x2": N, "y2": N, "stroke": "#hex", "stroke_weight": N, "opacity": 0-1}

4. text — Labels, temperature display
   {"type": "text", "content": "string", "x": N, "y": N, "size": N, "fill": "#hex", "opacity": 0-1}

5. glow — Sun glow, moon halo, light sources
   {"type": "glow", "x": N, "y": N, "radius": N, "color": "#hex", "intensity": 0-1}

6. particle_system — Rain, snow, fog, dust, stars (ANIMATED — the renderer handles movement)
   {"type": "particle_system", "preset": "rain"|"snow"|"fog"|"dust"|"stars", "color": "#hex"}
   Optional overrides: "count": 1-1000, "speed": N, "angle": degrees, "drift": N, "size": N, "particle_shape": "circle"|"line"|"rect", "opacity": 0-1

"##;

const WEATHER_MAPPING: &str = r#"## Weather-to-Visual Mapping Guide

- Clear day: bright gradient (#87CEEB to #4682B4), sun ellipse + glow, maybe a few clouds
- Clear night: dark gradient (#0a0a2e to #1a1a3e), moon ellipse + glow, particle_system preset "stars"
- Rain: grey gradient, dark cloud ellipses, particle_system preset "rain"
- Snow: blue-grey gradient, particle_system preset "snow"
- Fog: muted gradient, particle_system preset "fog"
- Dusty/hazy: warm muted gradient, particle_system preset "dust"
- Thunderstorm: very dark gradient, line elements for lightning, preset "rain" particles, dark clouds
- Cloudy: grey gradient, multiple cloud ellipses at various positions and opacities
- Windy: override "drift" on particles, angled elements suggesting motion

"#;

const COLOR_GUIDELINES: &str = r##"## Color Guidelines

- Use hex colors only (e.g. "#FF6B35")
- Daytime: warm, bright palettes
- Nighttime: cool, dark palettes with accent colors for moon/stars
- Match mood to weather: cheerful yellows for sun, moody blues for rain, crisp whites for snow

"##;

const RULES: &str = r#"## Rules

- Canvas is always 800x600
- All coordinates must be within the canvas bounds
- Use particle_system for any weather precipitation or atmospheric effects
- Include at least one glow element for sun or moon
- Keep total element count reasonable (under 30 elements)
"#;
