use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{format::LoggerFormat, level::LoggerLevel};

/// Logger configuration; every field falls back to its default when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    /// Include the module path of each record.
    pub with_targets: bool,
    /// Allow ANSI colors in text output; still off when stdout is not a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Colors are used only when enabled and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.level.as_str(), "info");
        assert!(cfg.with_targets);
        assert!(cfg.use_color);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let cfg: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.level, LoggerLevel::default());
    }

    #[test]
    fn partial_object_overrides_given_fields() {
        let cfg: LoggerConfig =
            serde_json::from_str(r#"{"format": "json", "level": "gcel_core=debug"}"#).unwrap();
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.level.as_str(), "gcel_core=debug");
        assert!(cfg.with_targets);
    }

    #[test]
    fn invalid_level_fails_deserialization() {
        let res = serde_json::from_str::<LoggerConfig>(r#"{"level": "gcel_core=loud"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn color_disabled_when_turned_off() {
        let cfg = LoggerConfig {
            use_color: false,
            ..Default::default()
        };
        assert!(!cfg.should_use_color());
    }
}
