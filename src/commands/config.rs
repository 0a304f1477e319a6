//! Config command - show or initialize the configuration file

use super::Result;
use crate::SplitviewError;
use crate::config::SplitviewConfig;
use crate::ui::OutputWriter;
use std::path::Path;

/// Execute the config command
///
/// With `init`, writes the default configuration to `path` (refusing to
/// overwrite unless `force`). Otherwise prints `path` and the effective
/// values.
///
/// # Errors
///
/// Returns `SplitviewError::InvalidInput` if the file exists and `force` is
/// not set, or `SplitviewError::ConfigError` if it cannot be written.
pub fn execute(
    config: &SplitviewConfig,
    path: &Path,
    init: bool,
    force: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    if init {
        if path.exists() && !force {
            return Err(SplitviewError::InvalidInput(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        SplitviewConfig::default().save_to(path)?;
        tracing::info!(path = %path.display(), "default configuration written");
        output.success(&format!("Wrote default configuration to {}", path.display()));
        return Ok(());
    }

    output.heading(&path.display().to_string());
    if !path.exists() {
        output.info("(file not found, using defaults)");
    }

    output.write(&format!("variant = {}", config.variant));
    output.write(&format!(
        "auto_select_on_navigate = {}",
        config.auto_select_on_navigate
    ));
    output.write(&format!(
        "catalog = {}",
        config
            .catalog
            .as_ref()
            .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
    ));
    output.write(&format!("tick_rate_ms = {}", config.tick_rate_ms));
    output.write(&format!("log_filter = {}", config.log_filter));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::Variant;
    use crate::ui::MessageLevel;
    use crate::ui::mock::MockWriter;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("splitview").join("config.toml");
        let output = MockWriter::new();

        execute(&SplitviewConfig::default(), &path, true, false, &output).unwrap();

        assert_eq!(
            SplitviewConfig::load_from(&path).unwrap(),
            SplitviewConfig::default()
        );
        assert_eq!(output.messages()[0].0, MessageLevel::Success);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "variant = \"simple\"\n").unwrap();
        let output = MockWriter::new();

        let err = execute(&SplitviewConfig::default(), &path, true, false, &output).unwrap_err();
        assert!(matches!(err, SplitviewError::InvalidInput(_)));

        execute(&SplitviewConfig::default(), &path, true, true, &output).unwrap();
        assert_eq!(
            SplitviewConfig::load_from(&path).unwrap().variant,
            Variant::ThreeColumn
        );
    }

    #[test]
    fn test_show_effective_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = SplitviewConfig {
            variant: Variant::Simple,
            ..SplitviewConfig::default()
        };
        let output = MockWriter::new();

        execute(&config, &path, false, false, &output).unwrap();

        let lines = output.lines();
        assert_eq!(lines[0], path.display().to_string());
        assert_eq!(lines[1], "(file not found, using defaults)");
        assert!(lines.contains(&"variant = simple".to_string()));
        assert!(lines.contains(&"catalog = (built-in)".to_string()));
    }
}
