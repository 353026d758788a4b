//! # wxart-cli — Command-Line Tool
//!
//! Provides the `wxart` command-line interface over the weather-art stack.
//!
//! ## Subcommands
//!
//! - `wxart validate <file|->` — validate a scene document, print the
//!   canonical form.
//! - `wxart schema` — print the scene JSON Schema.
//! - `wxart guide` — print the scene format guide.
//! - `wxart geocode <city>` — resolve a city name (network).
//! - `wxart weather <lat> <lon>` — fetch current conditions (network).
//! - `wxart generate <location>` — run the agent end to end (network +
//!   Ollama).
//! - `wxart describe <location>` — natural-language weather report
//!   (network + Ollama).

pub mod generate;
pub mod schema;
pub mod validate;
pub mod weather;

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read an input document from a file path, or from stdin when the path
/// is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_input_reads_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"scene\": {{}}}}").unwrap();
        let text = read_input(file.path()).unwrap();
        assert_eq!(text, "{\"scene\": {}}");
    }

    #[test]
    fn read_input_reports_missing_files() {
        let err = read_input(Path::new("/definitely/not/a/real/file.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
