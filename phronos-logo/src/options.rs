// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display options for the logo and the rules for merging host-supplied
//! partial options over the defaults.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::error::LogoError;

/// Edge length in pixels used when the host does not supply one.
pub const DEFAULT_SIZE: i32 = 320;

/// Colour scheme of the logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// `"light"` selects [`Theme::Light`]; anything else falls back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Marker class added to the wrapper element. Dark is the unmarked base.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light"),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete option set a render works from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub theme: Theme,
    pub show_text: bool,
    pub show_dots: bool,
    /// Width and height of the wrapper in pixels. Not validated.
    pub size: i32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            show_text: true,
            show_dots: true,
            size: DEFAULT_SIZE,
        }
    }
}

impl DisplayOptions {
    /// Merge `partial` field by field over the defaults.
    ///
    /// An empty theme name and a zero size count as "not provided". The
    /// booleans are only switched off by an explicit `false`.
    pub fn merged(partial: PartialDisplayOptions) -> Self {
        let defaults = Self::default();
        Self {
            theme: partial
                .theme
                .as_deref()
                .filter(|name| !name.is_empty())
                .map(Theme::from_name)
                .unwrap_or(defaults.theme),
            show_text: partial.show_text.unwrap_or(defaults.show_text),
            show_dots: partial.show_dots.unwrap_or(defaults.show_dots),
            size: partial
                .size
                .filter(|size| *size != 0)
                .unwrap_or(defaults.size),
        }
    }

    /// Whether the center overlay is rendered at all.
    pub fn has_center(&self) -> bool {
        self.show_text || self.show_dots
    }
}

/// Convert a JS number to whole pixels: rounded, saturating, `NaN` as 0.
pub fn pixels_from_js(size: f64) -> i32 {
    size.round() as i32
}

/// Options as supplied by a host; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialDisplayOptions {
    pub theme: Option<String>,
    pub show_text: Option<bool>,
    pub show_dots: Option<bool>,
    pub size: Option<i32>,
}

impl PartialDisplayOptions {
    /// Read a plain JS object such as `{ theme: "light", showDots: false }`.
    ///
    /// Each key is read on its own; a value of the wrong type counts as
    /// absent and leaves the other keys intact. `size` may also be given as
    /// `sizePixels`. `undefined` and `null` mean "no options"; any other
    /// non-object is rejected.
    pub fn from_js(value: &JsValue) -> Result<Self, LogoError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_object() {
            return Err(LogoError::InvalidOptions(format!(
                "expected an object, got {value:?}"
            )));
        }
        let field = |key: &str| {
            Reflect::get(value, &JsValue::from_str(key))
                .map_err(|e| LogoError::InvalidOptions(format!("{key}: {e:?}")))
        };
        let size = match field("size")?.as_f64() {
            Some(size) => Some(size),
            None => field("sizePixels")?.as_f64(),
        };
        Ok(Self {
            theme: field("theme")?.as_string(),
            show_text: field("showText")?.as_bool(),
            show_dots: field("showDots")?.as_bool(),
            size: size.map(pixels_from_js),
        })
    }
}

impl From<PartialDisplayOptions> for DisplayOptions {
    fn from(partial: PartialDisplayOptions) -> Self {
        Self::merged(partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let options = DisplayOptions::default();
        assert_eq!(options.theme, Theme::Dark);
        assert!(options.show_text);
        assert!(options.show_dots);
        assert_eq!(options.size, 320);
    }

    #[test]
    fn empty_partial_yields_defaults() {
        assert_eq!(
            DisplayOptions::merged(PartialDisplayOptions::default()),
            DisplayOptions::default()
        );
    }

    #[test]
    fn explicit_false_is_respected() {
        let options = DisplayOptions::merged(PartialDisplayOptions {
            show_text: Some(false),
            show_dots: Some(false),
            ..Default::default()
        });
        assert!(!options.show_text);
        assert!(!options.show_dots);
        assert!(!options.has_center());
    }

    #[test]
    fn absent_fields_keep_defaults_next_to_supplied_ones() {
        let options = DisplayOptions::merged(PartialDisplayOptions {
            theme: Some("light".into()),
            size: Some(128),
            ..Default::default()
        });
        assert_eq!(options.theme, Theme::Light);
        assert_eq!(options.size, 128);
        assert!(options.show_text);
        assert!(options.show_dots);
    }

    #[test]
    fn unknown_or_empty_theme_falls_back_to_dark() {
        for name in ["", "Light", "solarized", "dark"] {
            let options = DisplayOptions::merged(PartialDisplayOptions {
                theme: Some(name.to_string()),
                ..Default::default()
            });
            assert_eq!(options.theme, Theme::Dark, "theme name {name:?}");
        }
    }

    #[test]
    fn zero_size_counts_as_not_provided() {
        let options = DisplayOptions::merged(PartialDisplayOptions {
            size: Some(0),
            ..Default::default()
        });
        assert_eq!(options.size, DEFAULT_SIZE);
    }

    #[test]
    fn negative_size_flows_through_unvalidated() {
        let options = DisplayOptions::merged(PartialDisplayOptions {
            size: Some(-40),
            ..Default::default()
        });
        assert_eq!(options.size, -40);
    }

    #[test]
    fn only_light_carries_a_marker_class() {
        assert_eq!(Theme::Light.css_class(), Some("light"));
        assert_eq!(Theme::Dark.css_class(), None);
        assert_eq!(Theme::from_name("light").to_string(), "light");
    }

    #[test]
    fn js_sizes_round_to_whole_pixels() {
        assert_eq!(pixels_from_js(250.5), 251);
        assert_eq!(pixels_from_js(249.4), 249);
        assert_eq!(pixels_from_js(-3.0), -3);
        assert_eq!(pixels_from_js(f64::NAN), 0);
        assert_eq!(pixels_from_js(1e12), i32::MAX);
    }

    #[test]
    fn either_decoration_keeps_the_center() {
        let text_only = DisplayOptions {
            show_dots: false,
            ..Default::default()
        };
        let dots_only = DisplayOptions {
            show_text: false,
            ..Default::default()
        };
        assert!(text_only.has_center());
        assert!(dots_only.has_center());
    }
}
