use std::fs;
use std::path::Path;

use crate::error::{PreloadError, Result};

pub const DEFAULT_MARKER: &str = "<!-- PRELOAD FONTS MARKER -->";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub replaced: bool,
}

/// Replaces the first occurrence of `marker` with `block`. Without a marker
/// the text comes back unchanged.
pub fn substitute(text: &str, marker: &str, block: &str) -> Substitution {
    match text.find(marker) {
        Some(start) => {
            let mut out = String::with_capacity(text.len() - marker.len() + block.len());
            out.push_str(&text[..start]);
            out.push_str(block);
            out.push_str(&text[start + marker.len()..]);
            Substitution {
                text: out,
                replaced: true,
            }
        }
        None => Substitution {
            text: text.to_owned(),
            replaced: false,
        },
    }
}

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| PreloadError::from_io(path, err))
}

pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| PreloadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
