//! `wxart schema` and `wxart guide` — scene format reflection.

use wxart_scene::{format_guide, scene_schema_json};

/// Print the scene JSON Schema.
pub fn run_schema() -> anyhow::Result<u8> {
    println!("{}", serde_json::to_string_pretty(&scene_schema_json())?);
    Ok(0)
}

/// Print the scene format guide.
pub fn run_guide() -> anyhow::Result<u8> {
    println!("{}", format_guide());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_command_succeeds() {
        assert_eq!(run_schema().unwrap(), 0);
    }

    #[test]
    fn guide_command_succeeds() {
        assert_eq!(run_guide().unwrap(), 0);
    }
}
