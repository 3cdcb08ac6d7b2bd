//! Sheet configuration module.
//!
//! Handles loading and validating `onesheet.toml`. Configuration is sparse:
//! stock defaults cover everything, a user file only needs the keys it wants
//! to override, and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! theme = "minimal"      # minimal | modern | classic
//! template = "auto"      # auto | none | lyrics | recipe
//! # font_size = 14       # Pin the font size; uncomment to disable auto-fit
//!
//! [page]
//! size = "letter"        # letter | a4 | legal
//! max_pages = 1          # Pages the content must fit across (1 or 2)
//! orientation = "portrait"
//! # width = 816          # Explicit px dimensions (96dpi) override `size`;
//! # height = 1056        # set both or neither
//! ```

use crate::layout::{LayoutConfig, Orientation};
use crate::templates::TemplateChoice;
use crate::themes::ThemeName;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Paper size presets, px at 96dpi, portrait base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US letter, 8.5" × 11" (816 × 1056).
    #[default]
    Letter,
    /// ISO A4, 210mm × 297mm (794 × 1123).
    A4,
    /// US legal, 8.5" × 14" (816 × 1344).
    Legal,
}

impl PageSize {
    /// Portrait `(width, height)` in px at 96dpi.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::Letter => (816.0, 1056.0),
            PageSize::A4 => (794.0, 1123.0),
            PageSize::Legal => (816.0, 1344.0),
        }
    }
}

/// Sheet configuration loaded from `onesheet.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Page geometry and budget.
    pub page: PageConfig,
    /// Explicit font size in px. When set, auto-fit never shrinks the type.
    pub font_size: Option<f64>,
    /// Style preset applied to the rendered sheet.
    pub theme: ThemeName,
    /// Content-type template selection.
    pub template: TemplateChoice,
}

/// Page geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Paper preset; ignored when `width`/`height` are set.
    pub size: PageSize,
    /// Explicit portrait page width in px (96dpi). Set together with `height`.
    pub width: Option<f64>,
    /// Explicit portrait page height in px (96dpi). Set together with `width`.
    pub height: Option<f64>,
    /// Number of pages the content must fit across.
    pub max_pages: u32,
    pub orientation: Orientation,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            width: None,
            height: None,
            max_pages: 1,
            orientation: Orientation::default(),
        }
    }
}

impl SheetConfig {
    /// Load config from a `onesheet.toml` file. A missing file yields the
    /// stock defaults; a present file is parsed strictly and validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SheetConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.max_pages == 0 {
            return Err(ConfigError::Validation(
                "page.max_pages must be at least 1".into(),
            ));
        }
        match (self.page.width, self.page.height) {
            (Some(w), Some(h)) if w <= 0.0 || h <= 0.0 => {
                return Err(ConfigError::Validation(
                    "page.width and page.height must be positive".into(),
                ));
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(ConfigError::Validation(
                    "page.width and page.height must be set together".into(),
                ));
            }
            _ => {}
        }
        if let Some(size) = self.font_size {
            if size <= 0.0 {
                return Err(ConfigError::Validation("font_size must be positive".into()));
            }
        }
        Ok(())
    }

    /// The fit request this configuration describes.
    pub fn layout_config(&self) -> LayoutConfig {
        let (preset_w, preset_h) = self.page.size.dimensions();
        LayoutConfig {
            page_width: self.page.width.unwrap_or(preset_w),
            page_height: self.page.height.unwrap_or(preset_h),
            max_pages: self.page.max_pages,
            orientation: self.page.orientation,
            font_size_override: self.font_size,
        }
    }
}

/// Returns a fully-commented stock `onesheet.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Onesheet Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Style preset: minimal | modern | classic
theme = "minimal"

# Content-type template: auto | none | lyrics | recipe
# "auto" detects lyrics ([Verse]/[Chorus] markers) and recipes
# (Ingredients/Instructions blocks); "none" renders plain markdown.
template = "auto"

# Pin the font size in px. When set, fitting still reduces margins and adds
# columns, but never shrinks the type.
# font_size = 14

# ---------------------------------------------------------------------------
# Page geometry
# ---------------------------------------------------------------------------
[page]
# Paper preset: letter | a4 | legal (dimensions in px at 96dpi).
size = "letter"

# Pages the content must fit across, typically 1 or 2.
max_pages = 1

# portrait | landscape. Dimensions above are always the portrait base;
# landscape swaps them.
orientation = "portrait"

# Explicit page dimensions in px at 96dpi. Overrides `size`.
# Set both or neither.
# width = 816
# height = 1056
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_letter_one_page() {
        let config = SheetConfig::default();
        assert_eq!(config.page.size, PageSize::Letter);
        assert_eq!(config.page.max_pages, 1);
        assert_eq!(config.page.orientation, Orientation::Portrait);
        assert!(config.font_size.is_none());
    }

    #[test]
    fn default_config_validates() {
        assert!(SheetConfig::default().validate().is_ok());
    }

    #[test]
    fn stock_config_round_trips() {
        let config: SheetConfig = toml::from_str(stock_config_toml()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.theme, ThemeName::Minimal);
        assert_eq!(config.template, TemplateChoice::Auto);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SheetConfig = toml::from_str("theme = \"modern\"").unwrap();
        assert_eq!(config.theme, ThemeName::Modern);
        assert_eq!(config.page.max_pages, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<SheetConfig, _> = toml::from_str("them = \"modern\"");
        assert!(result.is_err());
    }

    #[test]
    fn page_section_parses() {
        let config: SheetConfig = toml::from_str(
            "[page]\nsize = \"a4\"\nmax_pages = 2\norientation = \"landscape\"",
        )
        .unwrap();
        assert_eq!(config.page.size, PageSize::A4);
        assert_eq!(config.page.max_pages, 2);
        assert_eq!(config.page.orientation, Orientation::Landscape);
    }

    #[test]
    fn zero_pages_fails_validation() {
        let config: SheetConfig = toml::from_str("[page]\nmax_pages = 0").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn lone_width_fails_validation() {
        let config: SheetConfig = toml::from_str("[page]\nwidth = 600").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_dimensions_fail_validation() {
        let config: SheetConfig =
            toml::from_str("[page]\nwidth = -10\nheight = 500").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn layout_config_uses_preset_dimensions() {
        let layout = SheetConfig::default().layout_config();
        assert_eq!(layout.page_width, 816.0);
        assert_eq!(layout.page_height, 1056.0);
    }

    #[test]
    fn explicit_dimensions_override_preset() {
        let config: SheetConfig =
            toml::from_str("[page]\nsize = \"a4\"\nwidth = 600\nheight = 900").unwrap();
        let layout = config.layout_config();
        assert_eq!(layout.page_width, 600.0);
        assert_eq!(layout.page_height, 900.0);
    }

    #[test]
    fn font_size_maps_to_override() {
        let config: SheetConfig = toml::from_str("font_size = 12.5").unwrap();
        assert_eq!(config.layout_config().font_size_override, Some(12.5));
    }

    #[test]
    fn load_returns_default_when_no_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = SheetConfig::load(&tmp.path().join("onesheet.toml")).unwrap();
        assert_eq!(config.page.size, PageSize::Letter);
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("onesheet.toml");
        std::fs::write(&path, "theme = \"classic\"\n[page]\nmax_pages = 2\n").unwrap();
        let config = SheetConfig::load(&path).unwrap();
        assert_eq!(config.theme, ThemeName::Classic);
        assert_eq!(config.page.max_pages, 2);
    }

    #[test]
    fn load_invalid_toml_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("onesheet.toml");
        std::fs::write(&path, "theme = [broken").unwrap();
        assert!(SheetConfig::load(&path).is_err());
    }
}
