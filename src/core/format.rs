//! Format module - JSON and TOML interchange for descriptors
//!
//! Both formats use one key per field, with `fontPairing` nested as a
//! two-key object (a `[fontPairing]` table in TOML).

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

use super::config::extensions;
use super::descriptor::WebsiteTemplate;

/// Interchange format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .with_context(|| format!("No file extension on {}", path.display()))?;

        Self::from_name(ext).with_context(|| format!("Unsupported file: {}", path.display()))
    }

    /// Parse a format name (`json` or `toml`, any case)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            extensions::JSON => Ok(Format::Json),
            extensions::TOML => Ok(Format::Toml),
            other => anyhow::bail!("Unknown format '{}' (expected json or toml)", other),
        }
    }

    /// The format a conversion goes to when none is given
    pub fn other(self) -> Self {
        match self {
            Format::Json => Format::Toml,
            Format::Toml => Format::Json,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => extensions::JSON,
            Format::Toml => extensions::TOML,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Parse a descriptor from text
pub fn parse(text: &str, format: Format) -> Result<WebsiteTemplate> {
    let template: WebsiteTemplate = match format {
        Format::Json => serde_json::from_str(text).context("Invalid JSON descriptor")?,
        Format::Toml => toml::from_str(text).context("Invalid TOML descriptor")?,
    };
    Ok(template)
}

/// Render a descriptor to text
pub fn render(template: &WebsiteTemplate, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut text =
                serde_json::to_string_pretty(template).context("Failed to render JSON")?;
            text.push('\n');
            Ok(text)
        }
        Format::Toml => toml::to_string(template).context("Failed to render TOML"),
    }
}

/// Load a descriptor file, format chosen by extension
pub fn load(path: &Path) -> Result<WebsiteTemplate> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse(&text, format).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Save a descriptor file, format chosen by extension
pub fn save(template: &WebsiteTemplate, path: &Path) -> Result<()> {
    save_as(template, path, Format::from_path(path)?)
}

/// Save a descriptor file in an explicit format, creating parent directories
pub fn save_as(template: &WebsiteTemplate, path: &Path, format: Format) -> Result<()> {
    let text = render(template, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
