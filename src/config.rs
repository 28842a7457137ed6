//! Renderer configuration.
//!
//! ```
//! use fiftyohm_html::{Location, Mode, RenderConfig};
//!
//! let config = RenderConfig::new()
//!     .with_location(Location::new("3", "2", "1"))
//!     .with_section_url("kapitel-2.html")
//!     .with_mode(Mode::Slides);
//! assert_eq!(config.section_url, "kapitel-2.html");
//! ```

#[cfg(feature = "cli")]
use serde::Deserialize;

/// Default target for cross-reference links.
pub const DEFAULT_SECTION_URL: &str = "section.html";

/// Which kind of HTML output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// A linear web page.
    #[default]
    Document,
    /// A reveal.js style slide deck.
    Slides,
}

impl Mode {
    /// Suffix appended to the edition so slide figure numbers never collide
    /// with document figure numbers of the same section.
    pub fn edition_suffix(self) -> &'static str {
        match self {
            Mode::Document => "",
            Mode::Slides => "S",
        }
    }
}

/// Where the rendered section sits in the course.
///
/// Only used to format hierarchical figure numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub edition: String,
    pub chapter: String,
    pub section: String,
}

impl Location {
    /// Create a location. Returns `None` unless all three parts are present.
    pub fn new(
        edition: impl Into<String>,
        chapter: impl Into<String>,
        section: impl Into<String>,
    ) -> Option<Self> {
        let location = Self {
            edition: edition.into(),
            chapter: chapter.into(),
            section: section.into(),
        };
        if location.edition.is_empty() || location.chapter.is_empty() || location.section.is_empty()
        {
            return None;
        }
        Some(location)
    }

    /// Create a location from optional parts, as they come from the
    /// command line or a config file.
    pub fn from_parts(
        edition: Option<&str>,
        chapter: Option<&str>,
        section: Option<&str>,
    ) -> Option<Self> {
        Self::new(edition?, chapter?, section?)
    }
}

/// Options fixed at renderer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(Deserialize))]
#[cfg_attr(feature = "cli", serde(from = "ConfigFile"))]
pub struct RenderConfig {
    /// Numbering context. Figures get bare counters without it.
    pub location: Option<Location>,
    /// Base URL for cross-reference links.
    pub section_url: String,
    pub mode: Mode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            location: None,
            section_url: DEFAULT_SECTION_URL.to_string(),
            mode: Mode::Document,
        }
    }
}

impl RenderConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    pub fn with_section_url(mut self, url: impl Into<String>) -> Self {
        self.section_url = url.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Location parts that may each be missing, as they come from the command
/// line or a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(Deserialize))]
#[cfg_attr(feature = "cli", serde(default))]
pub struct LocationParts {
    pub edition: Option<String>,
    pub chapter: Option<String>,
    pub section: Option<String>,
}

impl LocationParts {
    /// Fill the parts missing here from `fallback`.
    pub fn or(self, fallback: LocationParts) -> Self {
        Self {
            edition: self.edition.or(fallback.edition),
            chapter: self.chapter.or(fallback.chapter),
            section: self.section.or(fallback.section),
        }
    }

    /// The complete location, if all parts are present.
    pub fn resolve(&self) -> Option<Location> {
        Location::from_parts(
            self.edition.as_deref(),
            self.chapter.as_deref(),
            self.section.as_deref(),
        )
    }
}

/// On-disk shape of a config file: flat optional fields.
///
/// Location parts stay separate until [`into_config`](Self::into_config), so
/// a file may hold only some of them.
#[cfg(feature = "cli")]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(flatten)]
    pub location: LocationParts,
    pub section_url: Option<String>,
    pub mode: Mode,
}

#[cfg(feature = "cli")]
impl ConfigFile {
    /// Read a JSON config file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build the config, with `overrides` taking precedence over the
    /// file's location parts.
    pub fn into_config(self, overrides: LocationParts) -> RenderConfig {
        RenderConfig {
            location: overrides.or(self.location).resolve(),
            section_url: self
                .section_url
                .unwrap_or_else(|| DEFAULT_SECTION_URL.to_string()),
            mode: self.mode,
        }
    }
}

#[cfg(feature = "cli")]
impl From<ConfigFile> for RenderConfig {
    fn from(file: ConfigFile) -> Self {
        file.into_config(LocationParts::default())
    }
}

#[cfg(feature = "cli")]
impl RenderConfig {
    /// Read a JSON config file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        Ok(ConfigFile::from_file(path)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_all_or_nothing() {
        assert!(Location::new("3", "2", "1").is_some());
        assert!(Location::new("3", "", "1").is_none());
        assert!(Location::from_parts(Some("3"), None, Some("1")).is_none());
    }

    #[test]
    fn test_default_section_url() {
        assert_eq!(RenderConfig::new().section_url, "section.html");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_config_file_parsing() {
        let config: RenderConfig = serde_json::from_str(
            r#"{"edition": "3", "chapter": "2", "section": "1", "mode": "slides"}"#,
        )
        .unwrap();
        assert_eq!(config.location, Location::new("3", "2", "1"));
        assert_eq!(config.section_url, DEFAULT_SECTION_URL);
        assert_eq!(config.mode, Mode::Slides);

        let partial: RenderConfig = serde_json::from_str(r#"{"edition": "3"}"#).unwrap();
        assert_eq!(partial.location, None);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_partial_file_location_merges_with_overrides() {
        let file: ConfigFile =
            serde_json::from_str(r#"{"edition": "3", "section_url": "k2.html"}"#).unwrap();
        assert_eq!(file.location.edition.as_deref(), Some("3"));

        let overrides = LocationParts {
            edition: None,
            chapter: Some("2".into()),
            section: Some("1".into()),
        };
        let config = file.into_config(overrides);
        assert_eq!(config.location, Location::new("3", "2", "1"));
        assert_eq!(config.section_url, "k2.html");
    }

    #[test]
    fn test_override_parts_win() {
        let file = LocationParts {
            edition: Some("3".into()),
            chapter: Some("2".into()),
            section: Some("1".into()),
        };
        let cli = LocationParts {
            edition: Some("4".into()),
            ..LocationParts::default()
        };
        assert_eq!(cli.or(file).resolve(), Location::new("4", "2", "1"));
        assert_eq!(LocationParts::default().resolve(), None);
    }
}
