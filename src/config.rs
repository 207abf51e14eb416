use std::env;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser};

use crate::error::{PreloadError, Result};
use crate::fonts::MimeMode;
use crate::inject::DEFAULT_MARKER;

const DEFAULT_MANIFEST: &str = "package.json";
const DEFAULT_INDEX_FILE: &str = "index.html";

#[derive(Debug, Parser)]
#[command(
    name = "font-preload",
    version,
    about = "Inject <link rel=\"preload\"> tags for built font files into index.html."
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Manifest holding the project name (package.json or a *.toml file).
    #[arg(long, env = "FONT_PRELOAD_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Directory containing one build output folder per project.
    /// Defaults to ../dist next to the directory holding this executable.
    #[arg(long, env = "FONT_PRELOAD_DIST_DIR")]
    pub dist_dir: Option<PathBuf>,

    /// Name of the HTML file to rewrite inside the output folder.
    #[arg(long, env = "FONT_PRELOAD_INDEX_FILE", default_value = DEFAULT_INDEX_FILE)]
    pub index_file: String,

    /// Literal placeholder replaced by the generated tags.
    #[arg(long, env = "FONT_PRELOAD_MARKER", default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Advertise font/woff, font/woff2 or font/ttf per file instead of font/woff2 for all.
    #[arg(long, env = "FONT_PRELOAD_MIME_BY_EXTENSION")]
    pub mime_by_extension: bool,

    /// Compute and print the tags without rewriting the HTML file.
    #[arg(long)]
    pub dry_run: bool,

    /// Only report errors.
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub manifest: PathBuf,
    pub dist_dir: PathBuf,
    pub index_file: String,
    pub marker: String,
    pub mime_mode: MimeMode,
    pub dry_run: bool,
    pub quiet: bool,
}

impl Config {
    pub fn from_cli() -> anyhow::Result<Self> {
        let cli = Cli::parse();
        let dist_dir = match cli.common.dist_dir.clone() {
            Some(dir) => dir,
            None => default_dist_dir().context("cannot locate the dist directory")?,
        };
        Ok(Config::from_parts(cli.common, dist_dir)?)
    }

    pub fn from_parts(common: CommonArgs, dist_dir: PathBuf) -> Result<Self> {
        if common.marker.is_empty() {
            return Err(PreloadError::invalid_option("--marker", "must not be empty"));
        }

        validate_index_file(&common.index_file)?;

        let mime_mode = if common.mime_by_extension {
            MimeMode::ByExtension
        } else {
            MimeMode::Uniform
        };

        Ok(Self {
            manifest: common.manifest,
            dist_dir,
            index_file: common.index_file,
            marker: common.marker,
            mime_mode,
            dry_run: common.dry_run,
            quiet: common.quiet,
        })
    }

    pub fn output_dir(&self, project: &str) -> PathBuf {
        self.dist_dir.join(project)
    }
}

/// `<dir of the executable>/../dist`, mirroring where the build pipeline
/// keeps this tool relative to its output.
pub fn default_dist_dir() -> anyhow::Result<PathBuf> {
    let exe = env::current_exe().context("cannot resolve the running executable")?;
    let exe_dir = exe
        .parent()
        .with_context(|| format!("executable has no parent directory: {}", exe.display()))?;
    Ok(exe_dir.join("..").join("dist"))
}

fn validate_index_file(index_file: &str) -> Result<()> {
    let mut components = Path::new(index_file).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(PreloadError::invalid_option(
            "--index-file",
            format!("expected a bare file name, got {index_file:?}"),
        )),
    }
}
