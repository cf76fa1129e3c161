use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::colors::{Color, ColorChoice};
use crate::screen::SCREEN_UPDATE_COOLDOWN;
use crate::z1_controller::BOTTOM_LEDS;

/// Settings file read when no path is given on the command line.
pub const DEFAULT_SETTINGS_PATH: &str = "z1-surface.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log every binding action and dump screen messages.
    pub debug: bool,
    pub lights_refresh_ms: u64,
    pub screen_cooldown_ms: u64,
    /// Number of quick effect chain presets the mixer offers, preset 0
    /// included.
    pub chain_presets: u32,
    /// Substring of the MIDI output port to forward parameters to.
    pub midi_port: Option<String>,
    pub device: DeviceSettings,
    pub colors: ColorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            lights_refresh_ms: 25,
            screen_cooldown_ms: SCREEN_UPDATE_COOLDOWN.as_millis() as u64,
            chain_presets: 6,
            midi_port: None,
            device: DeviceSettings::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Load `path` if given, otherwise the default settings file when it
    /// exists, otherwise built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_SETTINGS_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn lights_refresh(&self) -> Duration {
        Duration::from_millis(self.lights_refresh_ms)
    }

    pub fn screen_cooldown(&self) -> Duration {
        Duration::from_millis(self.screen_cooldown_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lights_refresh_ms == 0 {
            return Err(ConfigError::Invalid(
                "lights_refresh_ms must be greater than zero".into(),
            ));
        }
        if self.colors.bottom_leds.len() > BOTTOM_LEDS {
            return Err(ConfigError::Invalid(format!(
                "colors.bottomLeds has {} entries, the controller has {BOTTOM_LEDS}",
                self.colors.bottom_leds.len()
            )));
        }
        Ok(())
    }
}

/// USB identification of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    pub vendor_id: u16,
    pub product_id: u16,
    pub interface: u8,
    pub in_endpoint: u8,
    pub out_endpoint: u8,
    /// Read timeout; bounds how late timer work can run.
    pub timeout_ms: u64,
    /// Timeout for each output report write.
    pub write_timeout_ms: u64,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            vendor_id: 0x17cc,
            product_id: 0x2210,
            interface: 0,
            in_endpoint: 0x81,
            out_endpoint: 0x02,
            timeout_ms: 5,
            write_timeout_ms: 100,
        }
    }
}

/// Colors used for the lights.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorConfig {
    pub theme: Color,
    pub eq_switch: ColorChoice,
    pub stems_switch: ColorChoice,
    /// Colors of the effect presets 1-5.
    pub fx: Vec<Color>,
    pub prelisten_toggle: ColorChoice,
    pub bottom_leds_default: ColorChoice,
    pub bottom_leds: Vec<ColorChoice>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            theme: Color::LightOrange,
            eq_switch: ColorChoice::UseTheme,
            stems_switch: ColorChoice::UseTheme,
            fx: vec![
                Color::Red,
                Color::Green,
                Color::Blue,
                Color::Magenta,
                Color::DarkOrange,
            ],
            prelisten_toggle: ColorChoice::UseTheme,
            bottom_leds_default: ColorChoice::UseTheme,
            bottom_leds: vec![ColorChoice::UseTheme; BOTTOM_LEDS],
        }
    }
}

impl ColorConfig {
    /// Color of effect preset `preset` (1-based). Presets without a
    /// configured color are blue.
    pub fn fx_color(&self, preset: usize) -> Color {
        preset
            .checked_sub(1)
            .and_then(|index| self.fx.get(index))
            .copied()
            .unwrap_or(Color::Blue)
    }

    /// Color of bottom LED `index` (0-based): its own color, else the bottom
    /// default, else the theme.
    pub fn bottom_led(&self, index: usize) -> Color {
        let fallback = self.bottom_leds_default.resolve_default(self.theme);
        self.bottom_leds
            .get(index)
            .copied()
            .unwrap_or_default()
            .resolve_default(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.lights_refresh(), Duration::from_millis(25));
        assert_eq!(settings.screen_cooldown(), Duration::from_millis(20));
    }

    #[test]
    fn parses_colors_and_device() {
        let settings = Settings::from_yaml(
            r#"
debug: true
midi_port: "IAC"
device:
  product_id: 0x1234
colors:
  theme: mint
  eqSwitch: default
  stemsSwitch: violet
  fx: [cyan, lime]
  bottomLedsDefault: yellow
  bottomLeds: [red, default]
"#,
        )
        .unwrap();

        assert!(settings.debug);
        assert_eq!(settings.midi_port.as_deref(), Some("IAC"));
        assert_eq!(settings.device.product_id, 0x1234);
        assert_eq!(settings.device.vendor_id, 0x17cc);
        assert_eq!(settings.device.write_timeout_ms, 100);
        assert_eq!(settings.colors.theme, Color::Mint);
        assert_eq!(settings.colors.eq_switch, ColorChoice::UseTheme);
        assert_eq!(settings.colors.stems_switch, ColorChoice::Explicit(Color::Violet));
        assert_eq!(settings.colors.fx_color(2), Color::Lime);
        assert_eq!(settings.colors.fx_color(5), Color::Blue);
        assert_eq!(settings.colors.bottom_led(0), Color::Red);
        assert_eq!(settings.colors.bottom_led(1), Color::Yellow);
        assert_eq!(settings.colors.bottom_led(5), Color::Yellow);
    }

    #[test]
    fn bottom_leds_fall_back_to_theme() {
        let colors = ColorConfig::default();
        for index in 0..BOTTOM_LEDS {
            assert_eq!(colors.bottom_led(index), Color::LightOrange);
        }
    }

    #[test]
    fn preset_zero_has_no_color_slot() {
        assert_eq!(ColorConfig::default().fx_color(0), Color::Blue);
        assert_eq!(ColorConfig::default().fx_color(1), Color::Red);
    }

    #[test]
    fn rejects_unknown_colors() {
        assert!(matches!(
            Settings::from_yaml("colors: { theme: pink }"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn rejects_zero_refresh() {
        assert!(matches!(
            Settings::from_yaml("lights_refresh_ms: 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_too_many_bottom_leds() {
        let yaml = "colors: { bottomLeds: [red, red, red, red, red, red, red] }";
        assert!(matches!(Settings::from_yaml(yaml), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("/nonexistent/z1-surface.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
