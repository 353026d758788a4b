//! `wxart validate` — validate a scene document against the schema.

use std::path::PathBuf;

use clap::Args;

use wxart_scene::{validate_text, SceneError};

use crate::read_input;

/// Arguments for `wxart validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Scene document to validate. Pass `-` to read stdin. Markdown code
    /// fences around the JSON are stripped automatically.
    pub input: PathBuf,

    /// Suppress the canonical scene output on success.
    #[arg(long)]
    pub quiet: bool,
}

/// Validate a scene document and print its canonical form.
///
/// Exit code 0 on success, 1 when the document is rejected.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<u8> {
    let text = read_input(&args.input)?;

    match validate_text(&text) {
        Ok(response) => {
            if !args.quiet {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            tracing::info!("scene is valid");
            Ok(0)
        }
        Err(err) => {
            match &err {
                SceneError::Parse(_) => eprintln!("{err}"),
                SceneError::Validation { .. } => {
                    eprintln!("{err}:");
                    for line in err.report().lines() {
                        eprintln!("  {line}");
                    }
                }
            }
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args_for(content: &str) -> (tempfile::NamedTempFile, ValidateArgs) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        let args = ValidateArgs {
            input: file.path().to_path_buf(),
            quiet: true,
        };
        (file, args)
    }

    #[test]
    fn valid_scene_exits_zero() {
        let (_file, args) = args_for(r#"{"scene": {"elements": []}}"#);
        assert_eq!(run_validate(&args).unwrap(), 0);
    }

    #[test]
    fn fenced_scene_exits_zero() {
        let (_file, args) = args_for("```json\n{\"scene\": {\"elements\": []}}\n```");
        assert_eq!(run_validate(&args).unwrap(), 0);
    }

    #[test]
    fn invalid_scene_exits_one() {
        let (_file, args) = args_for(r#"{"scene": {"elements": [{"type": "hexagon"}]}}"#);
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn non_json_exits_one() {
        let (_file, args) = args_for("not json at all");
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = ValidateArgs {
            input: PathBuf::from("/no/such/scene.json"),
            quiet: true,
        };
        assert!(run_validate(&args).is_err());
    }
}
