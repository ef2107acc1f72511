use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::props;
use crate::Result;

/// Text layout of the normalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Two-space indentation, one property per line
    #[default]
    Pretty,
    /// Single line, no insignificant whitespace
    Compact,
}

/// Properties whose string values are treated as translatable and blanked
/// before two cards are compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    pub properties_to_translate: Vec<String>,
    pub output: OutputStyle,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            properties_to_translate: [
                props::VALUE,
                props::TEXT,
                props::ALT_TEXT,
                props::FALLBACK_TEXT,
                props::DISPLAY_TEXT,
                props::TITLE,
                props::PLACEHOLDER,
                props::DATA,
                props::URL,
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            output: OutputStyle::default(),
        }
    }
}

impl TranslatorSettings {
    /// Replace the full set of translatable properties.
    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties_to_translate = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output(mut self, output: OutputStyle) -> Self {
        self.output = output;
        self
    }

    pub fn translates(&self, property: &str) -> bool {
        self.properties_to_translate.iter().any(|p| p == property)
    }

    pub fn is_empty(&self) -> bool {
        self.properties_to_translate.is_empty()
    }

    /// Parse settings from JSON; absent fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
