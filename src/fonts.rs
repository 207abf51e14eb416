use std::fs;
use std::path::Path;

use html_escape::encode_double_quoted_attribute;

use crate::error::{PreloadError, Result};

/// Appended after every rendered tag so the block lines up under the marker.
const TAG_SEPARATOR: &str = "\n  ";
const UNIFORM_MIME: &str = "font/woff2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    Woff,
    Woff2,
    Ttf,
}

impl FontFormat {
    /// Classifies a file name by the text after its last `.`, ignoring case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "woff" => Some(Self::Woff),
            "woff2" => Some(Self::Woff2),
            "ttf" => Some(Self::Ttf),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Woff => "font/woff",
            Self::Woff2 => "font/woff2",
            Self::Ttf => "font/ttf",
        }
    }
}

/// How the `type` attribute of each preload tag is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MimeMode {
    /// Every tag advertises `font/woff2`, whatever the file really is.
    #[default]
    Uniform,
    ByExtension,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub name: String,
    pub format: FontFormat,
}

/// Lists the font files directly inside `dir`, sorted by name.
///
/// Subdirectories are skipped, not descended into. Entries whose names are
/// not valid UTF-8 cannot be written into the document and are ignored.
pub fn scan(dir: &Path) -> Result<Vec<FontFile>> {
    let entries = fs::read_dir(dir).map_err(|_| PreloadError::not_listable(dir))?;

    let mut fonts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|_| PreloadError::not_listable(dir))?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if let Some(format) = FontFormat::from_file_name(&name) {
            fonts.push(FontFile { name, format });
        }
    }

    fonts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fonts)
}

pub fn preload_tag(font: &FontFile, mode: MimeMode) -> String {
    let mime = match mode {
        MimeMode::Uniform => UNIFORM_MIME,
        MimeMode::ByExtension => font.format.mime_type(),
    };
    format!(
        r#"<link rel="preload" as="font" href="{}" type="{}" crossorigin="anonymous">"#,
        encode_double_quoted_attribute(&font.name),
        mime
    )
}

/// Renders one tag per font, in order. An empty slice renders an empty string.
pub fn preload_block(fonts: &[FontFile], mode: MimeMode) -> String {
    fonts
        .iter()
        .map(|font| preload_tag(font, mode) + TAG_SEPARATOR)
        .collect()
}
