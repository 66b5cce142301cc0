// SPDX-License-Identifier: MPL-2.0
//! Theme mode resolution.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the OS preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode to a concrete dark/light choice, asking the OS for
    /// `System`.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(
                dark_light::detect().unwrap_or(dark_light::Mode::Unspecified),
                dark_light::Mode::Dark
            ),
        }
    }

    /// Maps the mode to the Iced theme.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_os_lookup() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn theme_mode_serializes_kebab_case() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "mode",
            ThemeMode::System,
        )]))
        .expect("serialize");
        assert!(toml.contains("system"));
    }
}
