use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fonts::{self, FontFile, MimeMode};
use crate::inject;
use crate::log::verbatim;
use crate::manifest;

pub const BANNER_RULE: &str = "----------------------";
pub const BANNER_TEXT: &str = "Fonts replaced! Done!";
pub const DRY_RUN_BANNER_TEXT: &str = "Dry run! Nothing written.";
pub const FONTS_NOT_FOUND: &str = "Warning: Fonts Not Found";

#[derive(Debug, Clone)]
pub struct InjectOptions<'a> {
    pub index_file: &'a str,
    pub marker: &'a str,
    pub mime_mode: MimeMode,
    pub dry_run: bool,
}

impl<'a> InjectOptions<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            index_file: &config.index_file,
            marker: &config.marker,
            mime_mode: config.mime_mode,
            dry_run: config.dry_run,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Injection {
    pub index_path: PathBuf,
    pub fonts: Vec<FontFile>,
    pub block: String,
    pub marker_found: bool,
    pub written: bool,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub project: String,
    pub output_dir: PathBuf,
    pub injection: Injection,
}

/// Resolves the project, then rewrites its index document.
pub fn run(config: &Config) -> Result<RunReport> {
    let project = manifest::project_name(&config.manifest)?;
    let output_dir = config.output_dir(&project);
    log!("project"; "{project} -> {}", output_dir.display());

    let injection = inject_fonts(&output_dir, &InjectOptions::from_config(config))?;
    Ok(RunReport {
        project,
        output_dir,
        injection,
    })
}

/// Scans `output_dir` for fonts and swaps the marker in its index document
/// for the preload tags. Nothing is written unless the read succeeded.
pub fn inject_fonts(output_dir: &Path, options: &InjectOptions<'_>) -> Result<Injection> {
    let fonts = fonts::scan(output_dir)?;
    let block = fonts::preload_block(&fonts, options.mime_mode);

    if fonts.is_empty() {
        verbatim(FONTS_NOT_FOUND);
    } else {
        verbatim(&block);
    }

    let index_path = output_dir.join(options.index_file);
    let document = inject::read_document(&index_path)?;
    let substitution = inject::substitute(&document, options.marker, &block);
    if !substitution.replaced {
        warn!(
            "marker {:?} not found in {}, leaving it unchanged",
            options.marker,
            index_path.display()
        );
    }

    let written = if options.dry_run {
        log!("dry-run"; "skipped writing {}", index_path.display());
        false
    } else {
        inject::write_document(&index_path, &substitution.text)?;
        log!("write"; "{}", index_path.display());
        true
    };

    verbatim(BANNER_RULE);
    verbatim(banner_text(options.dry_run));
    verbatim(BANNER_RULE);

    Ok(Injection {
        index_path,
        fonts,
        block,
        marker_found: substitution.replaced,
        written,
    })
}

pub fn banner_text(dry_run: bool) -> &'static str {
    if dry_run { DRY_RUN_BANNER_TEXT } else { BANNER_TEXT }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options() -> InjectOptions<'static> {
        InjectOptions {
            index_file: "index.html",
            marker: inject::DEFAULT_MARKER,
            mime_mode: MimeMode::Uniform,
            dry_run: false,
        }
    }

    #[test]
    fn dry_run_leaves_document_untouched() {
        let dir = TempDir::new().unwrap();
        let html = "<head><!-- PRELOAD FONTS MARKER --></head>";
        fs::write(dir.path().join("index.html"), html).unwrap();
        fs::write(dir.path().join("a.woff2"), b"").unwrap();

        let mut opts = options();
        opts.dry_run = true;
        let injection = inject_fonts(dir.path(), &opts).unwrap();

        assert!(injection.marker_found);
        assert!(!injection.written);
        assert_eq!(injection.fonts.len(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), html);
    }

    #[test]
    fn banner_only_claims_replacement_when_written() {
        assert_eq!(banner_text(false), "Fonts replaced! Done!");
        assert_eq!(banner_text(true), DRY_RUN_BANNER_TEXT);
        assert!(!banner_text(true).contains("replaced"));
    }

    #[test]
    fn unreadable_index_is_io_and_is_left_alone() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("index.html")).unwrap();
        fs::write(dir.path().join("a.woff2"), b"").unwrap();

        let err = inject_fonts(dir.path(), &options()).unwrap_err();
        assert!(matches!(err, crate::error::PreloadError::Io { .. }));
        assert!(dir.path().join("index.html").is_dir());
    }

    #[test]
    fn missing_index_is_not_found_and_nothing_is_created() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.woff2"), b"").unwrap();

        let err = inject_fonts(dir.path(), &options()).unwrap_err();
        assert!(matches!(err, crate::error::PreloadError::NotFound { .. }));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn custom_index_file_and_marker_are_honoured() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.html"), "<!-- FONTS -->").unwrap();
        fs::write(dir.path().join("b.ttf"), b"").unwrap();

        let opts = InjectOptions {
            index_file: "app.html",
            marker: "<!-- FONTS -->",
            mime_mode: MimeMode::ByExtension,
            dry_run: false,
        };
        let injection = inject_fonts(dir.path(), &opts).unwrap();

        assert!(injection.written);
        let html = fs::read_to_string(dir.path().join("app.html")).unwrap();
        assert!(html.contains(r#"href="b.ttf" type="font/ttf""#));
        assert!(!html.contains("<!-- FONTS -->"));
    }
}
