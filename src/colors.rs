use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer};

/// A color which can be displayed by one of the multicolor lights.
///
/// Every color maps to exactly one device code, and to a dimmed variant used
/// to show an inactive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    RedDim,
    Red,
    DarkOrangeDim,
    DarkOrange,
    LightOrangeDim,
    LightOrange,
    WarmYellowDim,
    WarmYellow,
    YellowDim,
    Yellow,
    LimeDim,
    Lime,
    GreenDim,
    Green,
    MintDim,
    Mint,
    CyanDim,
    Cyan,
    TurquoiseDim,
    Turquoise,
    BlueDim,
    Blue,
    PlumDim,
    Plum,
    VioletDim,
    Violet,
    PurpleDim,
    Purple,
    MagentaDim,
    Magenta,
    FuschiaDark,
    Fuschia,
    White,
}

impl Color {
    pub const ALL: [Color; 34] = [
        Color::Black,
        Color::RedDim,
        Color::Red,
        Color::DarkOrangeDim,
        Color::DarkOrange,
        Color::LightOrangeDim,
        Color::LightOrange,
        Color::WarmYellowDim,
        Color::WarmYellow,
        Color::YellowDim,
        Color::Yellow,
        Color::LimeDim,
        Color::Lime,
        Color::GreenDim,
        Color::Green,
        Color::MintDim,
        Color::Mint,
        Color::CyanDim,
        Color::Cyan,
        Color::TurquoiseDim,
        Color::Turquoise,
        Color::BlueDim,
        Color::Blue,
        Color::PlumDim,
        Color::Plum,
        Color::VioletDim,
        Color::Violet,
        Color::PurpleDim,
        Color::Purple,
        Color::MagentaDim,
        Color::Magenta,
        Color::FuschiaDark,
        Color::Fuschia,
        Color::White,
    ];

    /// Device code sent in the lights report.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 0x00,
            Color::RedDim => 0x04,
            Color::Red => 0x06,
            Color::DarkOrangeDim => 0x08,
            Color::DarkOrange => 0x0A,
            Color::LightOrangeDim => 0x0C,
            Color::LightOrange => 0x0E,
            Color::WarmYellowDim => 0x10,
            Color::WarmYellow => 0x12,
            Color::YellowDim => 0x14,
            Color::Yellow => 0x16,
            Color::LimeDim => 0x18,
            Color::Lime => 0x1A,
            Color::GreenDim => 0x1C,
            Color::Green => 0x1E,
            Color::MintDim => 0x20,
            Color::Mint => 0x22,
            Color::CyanDim => 0x24,
            Color::Cyan => 0x26,
            Color::TurquoiseDim => 0x28,
            Color::Turquoise => 0x2A,
            Color::BlueDim => 0x2C,
            Color::Blue => 0x2E,
            Color::PlumDim => 0x30,
            Color::Plum => 0x32,
            Color::VioletDim => 0x34,
            Color::Violet => 0x36,
            Color::PurpleDim => 0x38,
            Color::Purple => 0x3A,
            Color::MagentaDim => 0x3C,
            Color::Magenta => 0x3E,
            Color::FuschiaDark => 0x40,
            Color::Fuschia => 0x42,
            Color::White => 0x46,
        }
    }

    /// The dimmed variant of this color. Dim colors map to themselves.
    pub fn dim(self) -> Color {
        match self {
            Color::Red | Color::RedDim => Color::RedDim,
            Color::DarkOrange | Color::DarkOrangeDim => Color::DarkOrangeDim,
            Color::LightOrange | Color::LightOrangeDim => Color::LightOrangeDim,
            Color::WarmYellow | Color::WarmYellowDim => Color::WarmYellowDim,
            Color::Yellow | Color::YellowDim => Color::YellowDim,
            Color::Lime | Color::LimeDim => Color::LimeDim,
            Color::Green | Color::GreenDim => Color::GreenDim,
            Color::Mint | Color::MintDim => Color::MintDim,
            Color::Cyan | Color::CyanDim => Color::CyanDim,
            Color::Turquoise | Color::TurquoiseDim => Color::TurquoiseDim,
            Color::Blue | Color::BlueDim => Color::BlueDim,
            Color::Plum | Color::PlumDim => Color::PlumDim,
            Color::Violet | Color::VioletDim => Color::VioletDim,
            Color::Purple | Color::PurpleDim => Color::PurpleDim,
            Color::Magenta | Color::MagentaDim => Color::MagentaDim,
            Color::Fuschia | Color::FuschiaDark => Color::FuschiaDark,
            Color::White | Color::Black => Color::Black,
        }
    }

    pub fn dim_when(self, condition: bool) -> Color {
        if condition {
            self.dim()
        } else {
            self
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::RedDim => "redDim",
            Color::Red => "red",
            Color::DarkOrangeDim => "darkOrangeDim",
            Color::DarkOrange => "darkOrange",
            Color::LightOrangeDim => "lightOrangeDim",
            Color::LightOrange => "lightOrange",
            Color::WarmYellowDim => "warmYellowDim",
            Color::WarmYellow => "warmYellow",
            Color::YellowDim => "yellowDim",
            Color::Yellow => "yellow",
            Color::LimeDim => "limeDim",
            Color::Lime => "lime",
            Color::GreenDim => "greenDim",
            Color::Green => "green",
            Color::MintDim => "mintDim",
            Color::Mint => "mint",
            Color::CyanDim => "cyanDim",
            Color::Cyan => "cyan",
            Color::TurquoiseDim => "turquoiseDim",
            Color::Turquoise => "turquoise",
            Color::BlueDim => "blueDim",
            Color::Blue => "blue",
            Color::PlumDim => "plumDim",
            Color::Plum => "plum",
            Color::VioletDim => "violetDim",
            Color::Violet => "violet",
            Color::PurpleDim => "purpleDim",
            Color::Purple => "purple",
            Color::MagentaDim => "magentaDim",
            Color::Magenta => "magenta",
            Color::FuschiaDark => "fuschiaDark",
            Color::Fuschia => "fuschia",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color \"{0}\"")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.name() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// A configured color which may defer to the theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    Explicit(Color),
    #[default]
    UseTheme,
}

impl ColorChoice {
    /// Resolve to a concrete color, using `fallback` for [`ColorChoice::UseTheme`].
    pub fn resolve_default(self, fallback: Color) -> Color {
        match self {
            ColorChoice::Explicit(color) => color,
            ColorChoice::UseTheme => fallback,
        }
    }
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> Self {
        ColorChoice::Explicit(color)
    }
}

impl<'de> Deserialize<'de> for ColorChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == "default" {
            return Ok(ColorChoice::UseTheme);
        }
        name.parse()
            .map(ColorChoice::Explicit)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_is_idempotent() {
        for color in Color::ALL {
            assert_eq!(color.dim().dim(), color.dim(), "{color}");
        }
    }

    #[test]
    fn black_and_white_dim_to_black() {
        assert_eq!(Color::Black.dim(), Color::Black);
        assert_eq!(Color::White.dim(), Color::Black);
    }

    #[test]
    fn warm_yellow_dims_to_its_own_dim_variant() {
        assert_eq!(Color::WarmYellow.dim(), Color::WarmYellowDim);
        assert_eq!(Color::WarmYellowDim.code(), 0x10);
    }

    #[test]
    fn dim_codes_sit_below_their_bright_codes() {
        for color in Color::ALL {
            assert!(color.dim().code() <= color.code(), "{color}");
        }
    }

    #[test]
    fn codes_are_even_and_in_range() {
        for color in Color::ALL {
            assert_eq!(color.code() % 2, 0);
            assert!(color.code() <= 0x46);
        }
    }

    #[test]
    fn dim_when_only_dims_on_condition() {
        assert_eq!(Color::Green.dim_when(true), Color::GreenDim);
        assert_eq!(Color::Green.dim_when(false), Color::Green);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>(), Ok(color));
        }
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn resolve_default_uses_fallback_only_for_theme() {
        assert_eq!(
            ColorChoice::UseTheme.resolve_default(Color::LightOrange),
            Color::LightOrange
        );
        assert_eq!(
            ColorChoice::Explicit(Color::Blue).resolve_default(Color::LightOrange),
            Color::Blue
        );
    }

    #[test]
    fn color_choice_parses_default_keyword() {
        let choices: Vec<ColorChoice> = serde_yaml::from_str("[default, mint]").unwrap();
        assert_eq!(
            choices,
            vec![ColorChoice::UseTheme, ColorChoice::Explicit(Color::Mint)]
        );
        assert!(serde_yaml::from_str::<ColorChoice>("pink").is_err());
    }
}
