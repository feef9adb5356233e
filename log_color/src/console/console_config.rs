// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ColorLevel;
use serde::{Deserialize, Serialize};

/// How a [`crate::ConsoleSink`] starts out.
///
/// `level` is what the output stream supports, as decided by the caller. With
/// `enabled: false` the sink writes raw text until [`crate::ConsoleSink::enable`] is
/// called, which switches it to `level`.
///
/// Missing fields take their [`Default`] values when deserializing:
///
/// ```
/// use r3bl_log_color::{ColorLevel, ConsoleConfig};
///
/// let config: ConsoleConfig = serde_json::from_str(r#"{"level": "256"}"#).unwrap();
/// assert_eq!(config.level, ColorLevel::Hundreds);
/// assert!(config.enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub level: ColorLevel,
    pub enabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            level: ColorLevel::Millions,
            enabled: true,
        }
    }
}

impl ConsoleConfig {
    #[must_use]
    pub const fn new(level: ColorLevel) -> Self {
        Self {
            level,
            enabled: true,
        }
    }

    /// Starts disabled, [`crate::ConsoleSink::enable`] switches to `level`.
    #[must_use]
    pub const fn disabled(level: ColorLevel) -> Self {
        Self {
            level,
            enabled: false,
        }
    }

    /// The level a sink writes with right after it is created.
    #[must_use]
    pub const fn initial_level(self) -> ColorLevel {
        if self.enabled { self.level } else { ColorLevel::None }
    }
}

impl From<ColorLevel> for ConsoleConfig {
    fn from(level: ColorLevel) -> Self { Self::new(level) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default() {
        let config = ConsoleConfig::default();
        assert_eq!(config.level, ColorLevel::Millions);
        assert!(config.enabled);
        assert_eq!(config.initial_level(), ColorLevel::Millions);
    }

    #[test]
    fn test_disabled_remembers_level() {
        let config = ConsoleConfig::disabled(ColorLevel::Basic);
        assert_eq!(config.level, ColorLevel::Basic);
        assert_eq!(config.initial_level(), ColorLevel::None);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ConsoleConfig = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert_eq!(config, ConsoleConfig::disabled(ColorLevel::Millions));

        let config: ConsoleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }
}
