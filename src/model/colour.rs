//! Colour table entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A colour table entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,

    /// Tint applied to a theme colour (`\ctintN`)
    pub tint: Option<i32>,

    /// Shade applied to a theme colour (`\cshadeN`)
    pub shade: Option<i32>,

    /// Theme colour slot
    pub theme: Option<ColourTheme>,

    /// The reader should use its own default colour
    pub use_default: bool,
}

/// US spelling alias.
pub type Color = Colour;

impl Colour {
    /// Create a colour from RGB components.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            ..Self::default()
        }
    }

    /// The "reader's default" entry produced by an empty clause.
    pub fn reader_default() -> Self {
        Self {
            use_default: true,
            ..Self::default()
        }
    }

    /// RGB components as a tuple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.use_default {
            return write!(f, "default");
        }
        write!(f, "[{}, {}, {}]", self.red, self.green, self.blue)
    }
}

/// Theme colour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourTheme {
    MainDarkOne,
    MainLightOne,
    MainDarkTwo,
    MainLightTwo,
    AccentOne,
    AccentTwo,
    AccentThree,
    AccentFour,
    AccentFive,
    AccentSix,
    Hyperlink,
    FollowedHyperlink,
    BackgroundOne,
    TextOne,
    BackgroundTwo,
    TextTwo,
}

impl ColourTheme {
    /// Look up a theme from its control word (`cmaindarkone`, ...).
    pub fn from_control(name: &str) -> Option<Self> {
        let theme = match name {
            "cmaindarkone" => ColourTheme::MainDarkOne,
            "cmainlightone" => ColourTheme::MainLightOne,
            "cmaindarktwo" => ColourTheme::MainDarkTwo,
            "cmainlighttwo" => ColourTheme::MainLightTwo,
            "caccentone" => ColourTheme::AccentOne,
            "caccenttwo" => ColourTheme::AccentTwo,
            "caccentthree" => ColourTheme::AccentThree,
            "caccentfour" => ColourTheme::AccentFour,
            "caccentfive" => ColourTheme::AccentFive,
            "caccentsix" => ColourTheme::AccentSix,
            "chyperlink" => ColourTheme::Hyperlink,
            "cfollowedhyperlink" => ColourTheme::FollowedHyperlink,
            "cbackgroundone" => ColourTheme::BackgroundOne,
            "ctextone" => ColourTheme::TextOne,
            "cbackgroundtwo" => ColourTheme::BackgroundTwo,
            "ctexttwo" => ColourTheme::TextTwo,
            _ => return None,
        };
        Some(theme)
    }
}
