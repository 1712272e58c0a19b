//! fontcompare-core - Core library for the font comparison tool
//!
//! This library holds everything the comparison window needs that is not
//! widget code: the validated configuration record and its on-disk store,
//! the fixed sample text, and the state of the two preview panes.

use std::path::PathBuf;
use thiserror::Error;

pub use config::{config_path, load_config, load_config_from, validate_config, Configuration};
pub use preview::{FontSpec, Preview, Side, DEFAULT_POINT_SIZE, RERENDER_POINT_SIZE};
pub use sample::SAMPLE_TEXT;
pub use state::ComparisonState;

/// Core errors for fontcompare
#[derive(Error, Debug)]
pub enum FontCompareError {
    #[error("config.json is missing! A clean config.json has been generated.")]
    ConfigGenerated { path: PathBuf },

    #[error("{0}")]
    ConfigValidation(String),

    #[error("Failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for fontcompare operations
pub type FontCompareResult<T> = Result<T, FontCompareError>;

/// Configuration file store
pub mod config {
    use super::*;
    use serde::{Deserialize, Serialize, Serializer};
    use serde_json::Value;
    use std::fs;
    use std::path::Path;

    /// File name looked up in the working directory.
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Indentation used when writing a generated config file.
    const INDENT: &[u8] = b"    ";

    /// Value kinds the schema distinguishes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        String,
        Number,
    }

    impl Kind {
        fn name(self) -> &'static str {
            match self {
                Kind::String => "string",
                Kind::Number => "number",
            }
        }

        fn matches(self, value: &Value) -> bool {
            match self {
                Kind::String => value.is_string(),
                Kind::Number => value.is_number(),
            }
        }
    }

    /// Required properties, in schema order.
    const SCHEMA: [(&str, Kind); 4] = [
        ("default_font1", Kind::String),
        ("default_font2", Kind::String),
        ("font_size1", Kind::Number),
        ("font_size2", Kind::Number),
    ];

    /// Default font names and point sizes for the two comparison columns.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Configuration {
        /// Font family shown in the left column
        pub default_font1: String,

        /// Font family shown in the right column
        pub default_font2: String,

        /// Initial point size of the left preview
        #[serde(serialize_with = "serialize_points")]
        pub font_size1: f64,

        /// Initial point size of the right preview
        #[serde(serialize_with = "serialize_points")]
        pub font_size2: f64,
    }

    impl Default for Configuration {
        fn default() -> Self {
            Self {
                default_font1: "Arial".to_string(),
                default_font2: "Calibri".to_string(),
                font_size1: 11.0,
                font_size2: 11.0,
            }
        }
    }

    impl Configuration {
        /// Font family configured for a column.
        pub fn font_name(&self, side: Side) -> &str {
            match side {
                Side::Left => &self.default_font1,
                Side::Right => &self.default_font2,
            }
        }

        /// Point size configured for a column.
        pub fn font_size(&self, side: Side) -> f64 {
            match side {
                Side::Left => self.font_size1,
                Side::Right => self.font_size2,
            }
        }
    }

    /// Whole point sizes are written as JSON integers (`11`, not `11.0`).
    fn serialize_points<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Load configuration from the working directory.
    pub fn load_config() -> FontCompareResult<Configuration> {
        load_config_from(&config_path())
    }

    /// Load and validate configuration from a specific path.
    ///
    /// A missing file is replaced by the default configuration and reported
    /// as [`FontCompareError::ConfigGenerated`]; callers are expected to stop
    /// rather than continue with the defaults.
    pub fn load_config_from(path: &Path) -> FontCompareResult<Configuration> {
        if !path.exists() {
            write_default_config(path)?;
            log::info!("Generated default configuration at {}", path.display());
            return Err(FontCompareError::ConfigGenerated {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let raw: Value =
            serde_json::from_str(&contents).map_err(|source| FontCompareError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Err(e) = validate_config(&raw) {
            log::warn!("Rejected configuration {}: {}", path.display(), e);
            return Err(e);
        }

        let config: Configuration =
            serde_json::from_value(raw).map_err(|source| FontCompareError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!(
            "Loaded configuration: {} {}pt / {} {}pt",
            config.default_font1,
            config.font_size1,
            config.default_font2,
            config.font_size2
        );
        Ok(config)
    }

    /// Check a raw JSON document against the configuration schema.
    ///
    /// The root must be an object holding all four keys; font names must be
    /// strings and sizes JSON numbers. Unknown keys are allowed.
    pub fn validate_config(raw: &Value) -> FontCompareResult<()> {
        let Some(object) = raw.as_object() else {
            return Err(FontCompareError::ConfigValidation(format!(
                "{} is not of type 'object'",
                raw
            )));
        };

        for (key, kind) in SCHEMA {
            if let Some(value) = object.get(key) {
                if !kind.matches(value) {
                    return Err(FontCompareError::ConfigValidation(format!(
                        "{} is not of type '{}'",
                        value,
                        kind.name()
                    )));
                }
            }
        }

        if let Some((key, _)) = SCHEMA.iter().find(|(key, _)| !object.contains_key(*key)) {
            return Err(FontCompareError::ConfigValidation(format!(
                "'{}' is a required property",
                key
            )));
        }

        Ok(())
    }

    /// Write the default configuration, indented with four spaces.
    pub fn write_default_config(path: &Path) -> FontCompareResult<()> {
        let mut contents = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut contents, formatter);
        Configuration::default().serialize(&mut serializer)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Fixed sample text
pub mod sample {
    /// Text both previews start with: pangrams, ASCII punctuation and the
    /// accented Latin-1 letters, to exercise glyph coverage.
    pub const SAMPLE_TEXT: &str = "\
The quick brown fox jumps over the lazy dog.
Sphinx of black quartz, judge my vow.
The five boxing wizards jump quickly.

!#$%&'()*+,-./0123456789:;<=>?@
ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`{|}~
ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞßàáâãäåæçèéêëìíîïð";
}

/// Preview pane model
pub mod preview {
    /// Point size every re-render uses, whatever size the pane started at.
    pub const RERENDER_POINT_SIZE: f32 = 11.0;

    /// Point size a configured size of zero stands for.
    pub const DEFAULT_POINT_SIZE: f32 = 11.0;

    /// Which comparison column a font selector and its preview belong to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Side {
        Left,
        Right,
    }

    impl Side {
        pub const ALL: [Side; 2] = [Side::Left, Side::Right];

        /// Grid column index.
        pub fn index(self) -> usize {
            match self {
                Side::Left => 0,
                Side::Right => 1,
            }
        }
    }

    impl std::fmt::Display for Side {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Side::Left => write!(f, "left"),
                Side::Right => write!(f, "right"),
            }
        }
    }

    /// Font family and point size a preview is drawn with.
    #[derive(Debug, Clone, PartialEq)]
    pub struct FontSpec {
        pub family: String,
        pub size: f32,
    }

    impl FontSpec {
        pub fn new(family: impl Into<String>, size: f32) -> Self {
            Self {
                family: family.into(),
                size,
            }
        }

        /// Font for a size read from the config file: zero means the default
        /// size and a negative value is a size in pixels.
        pub fn configured(family: impl Into<String>, size: f64) -> Self {
            let points = if size < 0.0 {
                (-size * 72.0 / 96.0) as f32
            } else {
                size as f32
            };
            // Sizes too small to survive the cast to f32 count as zero.
            if points > 0.0 {
                Self::new(family, points)
            } else {
                Self::new(family, DEFAULT_POINT_SIZE)
            }
        }
    }

    /// Read-only preview pane.
    ///
    /// Fields are private: the only way to change what a pane shows is
    /// [`Preview::render`], which the comparison state calls from its two
    /// edit handlers.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Preview {
        font: FontSpec,
        text: String,
    }

    impl Preview {
        pub fn new(font: FontSpec, text: impl Into<String>) -> Self {
            Self {
                font,
                text: text.into(),
            }
        }

        /// Rebuild the font from `(family, size)` and replace the whole text.
        ///
        /// The family is not checked against installed fonts; an unknown
        /// name falls back to whatever face the toolkit picks.
        pub fn render(&mut self, family: &str, size: f32, text: &str) {
            self.font = FontSpec::new(family, size);
            self.text.clear();
            self.text.push_str(text);
        }

        pub fn font(&self) -> &FontSpec {
            &self.font
        }

        pub fn text(&self) -> &str {
            &self.text
        }
    }
}

/// Comparison window state
pub mod state {
    use super::*;

    /// Everything the comparison window mutates: the shared sample text, one
    /// font name per column, and the two preview panes derived from them.
    #[derive(Debug, Clone)]
    pub struct ComparisonState {
        sample_text: String,
        font_names: [String; 2],
        previews: [Preview; 2],
    }

    impl ComparisonState {
        /// Build the initial state with the fixed sample text.
        pub fn from_config(config: &Configuration) -> Self {
            Self::with_sample_text(config, SAMPLE_TEXT)
        }

        /// Initial previews use the configured sizes; later re-renders don't.
        pub fn with_sample_text(config: &Configuration, sample_text: &str) -> Self {
            let preview_for = |side: Side| {
                Preview::new(
                    FontSpec::configured(config.font_name(side), config.font_size(side)),
                    sample_text,
                )
            };

            Self {
                sample_text: sample_text.to_string(),
                font_names: Side::ALL.map(|side| config.font_name(side).to_string()),
                previews: Side::ALL.map(preview_for),
            }
        }

        pub fn sample_text(&self) -> &str {
            &self.sample_text
        }

        pub fn font_name(&self, side: Side) -> &str {
            &self.font_names[side.index()]
        }

        pub fn preview(&self, side: Side) -> &Preview {
            &self.previews[side.index()]
        }

        /// Source text edit: store the new content and re-render both panes.
        pub fn set_sample_text(&mut self, text: String) {
            self.sample_text = text;
            for side in Side::ALL {
                self.rerender(side);
            }
        }

        /// Font name edit: store the name and re-render that side only.
        pub fn set_font_name(&mut self, side: Side, name: String) {
            self.font_names[side.index()] = name;
            self.rerender(side);
        }

        fn rerender(&mut self, side: Side) {
            let index = side.index();
            log::debug!(
                "Re-rendering {} preview in '{}' at {}pt",
                side,
                self.font_names[index],
                RERENDER_POINT_SIZE
            );
            self.previews[index].render(
                &self.font_names[index],
                RERENDER_POINT_SIZE,
                &self.sample_text,
            );
        }
    }
}

#[cfg(test)]
mod tests;
