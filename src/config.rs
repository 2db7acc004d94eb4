//! Configuration for termpane.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termpane/config.toml`
//! - Default border settings applied to every region
//! - Region declarations registered on the `Screen` at startup
//!
//! # Configuration File
//!
//! ```toml
//! # Colour depth: "16", "256" or "truecolor"
//! colour_mode = "256"
//! log_level = "info"
//!
//! # Used when the terminal size cannot be queried
//! [screen]
//! width = 80
//! height = 24
//!
//! [border]
//! enabled = true
//! glyphs = "dec"          # dec, unicode, ascii
//! foreground = "#5f87af"
//!
//! [[region]]
//! name = "log"
//! group = "main"
//! x = 1
//! y = 1
//! width = 40
//! height = 10
//! foreground = "light_green"
//! style = ["bold"]
//! title = "Log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::border::{Border, Glyphs};
use crate::colour::{Colour, ColourMode, Style};
use crate::error::{Error, Result};
use crate::geometry::Area;
use crate::output::TerminalWriter;
use crate::wm::{Interface, Screen};

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colour_mode: ColourMode,
    /// Log filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    pub screen: ScreenConfig,
    /// Defaults for every region's border
    pub border: BorderConfig,
    #[serde(rename = "region")]
    pub regions: Vec<RegionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colour_mode: ColourMode::default(),
            log_level: "info".to_string(),
            screen: ScreenConfig::default(),
            border: BorderConfig::default(),
            regions: Vec::new(),
        }
    }
}

/// Fallback terminal size
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Border settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub enabled: bool,
    /// Glyph set name: dec, unicode, ascii
    pub glyphs: String,
    pub foreground: String,
    pub background: String,
    pub style: Vec<String>,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            glyphs: "dec".to_string(),
            foreground: String::new(),
            background: String::new(),
            style: Vec::new(),
        }
    }
}

/// One declared region
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub name: String,
    pub group: Option<String>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub foreground: String,
    pub background: String,
    pub style: Vec<String>,
    /// Overrides `[border] enabled` for this region
    pub border: Option<bool>,
    pub title: String,
    pub caption: String,
    /// Defaults to registration order
    pub zindex: Option<u32>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            group: None,
            x: 1,
            y: 1,
            width: 20,
            height: 5,
            foreground: String::new(),
            background: String::new(),
            style: Vec::new(),
            border: None,
            title: String::new(),
            caption: String::new(),
            zindex: None,
        }
    }
}

impl RegionConfig {
    pub fn interface(&self) -> Interface {
        let interface = Interface::new(self.name.as_str())
            .with_colour(Colour::new(self.foreground.as_str(), self.background.as_str()))
            .with_style(Style::from_names(&self.style));
        match &self.group {
            Some(group) => interface.with_group(group.as_str()),
            None => interface,
        }
    }

    pub fn area(&self) -> Result<Area> {
        Area::checked(&self.name, self.x, self.y, self.width, self.height)
    }

    /// This region's border, starting from the configured defaults.
    pub fn border(&self, defaults: &BorderConfig) -> Border {
        let mut border = Border::new(self.name.as_str());
        border.enabled = self.border.unwrap_or(defaults.enabled);
        border.glyphs = Glyphs::by_name(&defaults.glyphs);
        border.colour = Colour::new(defaults.foreground.as_str(), defaults.background.as_str());
        border.style = Style::from_names(&defaults.style);
        border.title = self.title.clone();
        border.caption = self.caption.clone();
        border
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                if let Ok(config) = Self::load_from(&path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load configuration from `path`, reporting why it could not be read
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// `~/.termpane`
    pub fn config_dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termpane"))
    }

    /// Get config file path
    pub fn get_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get log file path
    pub fn log_path() -> PathBuf {
        Self::config_dir()
            .map(|dir| dir.join("termpane.log"))
            .unwrap_or_else(|| PathBuf::from("termpane.log"))
    }

    /// Register every declared region on `screen`, in file order.
    pub fn register_regions<W: TerminalWriter>(&self, screen: &mut Screen<W>) -> Result<()> {
        for region in &self.regions {
            if region.name.is_empty() {
                return Err(Error::Config("region without a name".to_string()));
            }
            screen.register(region.interface(), region.area()?)?;
            screen.set_border(region.border(&self.border))?;
            if let Some(zindex) = region.zindex {
                screen.set_zindex(&region.name, zindex)?;
            }
        }
        Ok(())
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
