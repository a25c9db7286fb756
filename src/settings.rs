//! User settings that outlive any single document.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#ef4444";

/// Named highlight presets offered by the settings panel.
pub const COLOR_PRESETS: [(&str, &str); 6] = [
    ("Red", "#ef4444"),
    ("Orange", "#f97316"),
    ("Blue", "#3b82f6"),
    ("Green", "#22c55e"),
    ("Purple", "#a855f7"),
    ("Pink", "#ec4899"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(anyhow::anyhow!("unknown theme {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Opaque to the engine; stored and echoed back as given.
    pub highlight_color: String,
    pub theme: Theme,
    pub fullscreen_on_play: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            theme: Theme::System,
            fullscreen_on_play: true,
        }
    }
}

impl Settings {
    /// Steps to the next preset color, starting over after the last one.
    /// Custom colors jump to the first preset.
    pub fn cycle_highlight_color(&mut self) {
        let next = COLOR_PRESETS
            .iter()
            .position(|(_, value)| value.eq_ignore_ascii_case(&self.highlight_color))
            .map(|i| (i + 1) % COLOR_PRESETS.len())
            .unwrap_or(0);
        self.highlight_color = COLOR_PRESETS[next].1.to_string();
    }

    pub fn highlight_color_name(&self) -> &str {
        COLOR_PRESETS
            .iter()
            .find(|(_, value)| value.eq_ignore_ascii_case(&self.highlight_color))
            .map(|(name, _)| *name)
            .unwrap_or(&self.highlight_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_and_parse() {
        let mut t = Theme::Light;
        for expected in [Theme::Dark, Theme::System, Theme::Light] {
            t = t.next();
            assert_eq!(t, expected);
        }
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_color_cycle_wraps() {
        let mut s = Settings::default();
        assert_eq!(s.highlight_color_name(), "Red");
        s.cycle_highlight_color();
        assert_eq!(s.highlight_color, "#f97316");
        for _ in 0..5 {
            s.cycle_highlight_color();
        }
        assert_eq!(s.highlight_color, "#ef4444");
    }

    #[test]
    fn test_custom_color_is_echoed() {
        let mut s = Settings {
            highlight_color: "rebeccapurple".into(),
            ..Default::default()
        };
        assert_eq!(s.highlight_color_name(), "rebeccapurple");
        s.cycle_highlight_color();
        assert_eq!(s.highlight_color, "#ef4444");
    }
}
