//! Command-line front end.
//!
//! Flags override the configuration file, which overrides built-in defaults.
//! Arguments of the form `@path` are replaced by the lines of `path` before
//! parsing, one argument per line.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use textpath_core::{compile, preview, GlyphRepository};
use textpath_glyphs::{load_repository, read_text, write_toolpath, STDIO_PATH};
use textpath_settings::Config;
use tracing::{debug, info};

/// Prefix marking an argument file.
pub const ARG_FILE_PREFIX: char = '@';

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Convert text into a pen toolpath using per-character glyph definitions.
#[derive(Debug, Clone, Parser)]
#[command(name = "textpath", version, long_version = LONG_VERSION, about)]
pub struct Args {
    /// Text file to convert (`-` reads stdin)
    #[arg(short, long, default_value = STDIO_PATH)]
    pub input: PathBuf,

    /// Toolpath file to write (`-` writes stdout)
    #[arg(short, long, required_unless_present = "check")]
    pub output: Option<PathBuf>,

    /// Directory containing the glyph definition files
    #[arg(short, long)]
    pub glyph_directory: Option<PathBuf>,

    /// Maximum length of a line before wrapping
    #[arg(short, long)]
    pub line_length: Option<f64>,

    /// Distance between two subsequent lines
    #[arg(short = 's', long)]
    pub line_spacing: Option<f64>,

    /// Empty space between characters
    #[arg(short, long, allow_negative_numbers = true)]
    pub padding: Option<f64>,

    /// Number of stroke passes per character
    #[arg(short = 'n', long)]
    pub passes: Option<u32>,

    /// Height of the anchor moves between passes
    #[arg(short, long, allow_negative_numbers = true)]
    pub baseline: Option<f64>,

    /// Configuration file (JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Advance width of the space character
    #[arg(long)]
    pub space_width: Option<f64>,

    /// Only report characters of the input without a glyph
    #[arg(long)]
    pub check: bool,

    /// Log a summary of the generated toolpath
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log events as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Replaces every `@path` argument with the lines of `path`.
///
/// The program name is never expanded. Empty lines are skipped and a
/// trailing `\r` is dropped; expanded lines are not expanded again.
pub fn expand_arg_files<I>(args: I) -> io::Result<Vec<OsString>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut expanded = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        let file = arg
            .to_str()
            .and_then(|s| s.strip_prefix(ARG_FILE_PREFIX))
            .filter(|path| index > 0 && !path.is_empty());

        match file {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                expanded.extend(
                    content
                        .lines()
                        .map(|line| line.trim_end_matches('\r'))
                        .filter(|line| !line.is_empty())
                        .map(OsString::from),
                );
            }
            None => expanded.push(arg),
        }
    }
    Ok(expanded)
}

impl Args {
    /// Loads the configuration file and applies the flags on top of it.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => load_default_config()?,
        };

        let config = self.apply_overrides(config);
        config.validate().context("Invalid settings")?;
        Ok(config)
    }

    /// Overwrites config values with the flags that were given.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        let layout = &mut config.layout;
        if let Some(value) = self.line_length {
            layout.line_length = value;
        }
        if let Some(value) = self.line_spacing {
            layout.line_spacing = value;
        }
        if let Some(value) = self.padding {
            layout.padding = value;
        }
        if let Some(value) = self.passes {
            layout.passes = value;
        }
        if let Some(value) = self.baseline {
            layout.baseline = value;
        }

        if let Some(dir) = &self.glyph_directory {
            config.glyphs.directory = dir.clone();
        }
        if let Some(value) = self.space_width {
            config.glyphs.space_width = value;
        }
        config
    }
}

fn load_default_config() -> anyhow::Result<Config> {
    let path = match Config::default_path() {
        Ok(path) => path,
        Err(err) => {
            debug!("No default config location: {}", err);
            return Ok(Config::default());
        }
    };

    if !path.is_file() {
        return Ok(Config::default());
    }
    Config::load_from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

/// Runs one conversion as described by `args`.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.resolve_config()?;

    let glyph_dir = &config.glyphs.directory;
    let repository = load_repository(glyph_dir, config.glyphs.space_width)
        .with_context(|| format!("Failed to load glyphs from {}", glyph_dir.display()))?;
    info!("Loaded {} glyphs from {}", repository.len(), glyph_dir.display());

    let text = read_text(&args.input)
        .with_context(|| format!("Failed to read input {}", args.input.display()))?;

    if args.check {
        return check_coverage(&repository, &text);
    }

    let toolpath = compile(&repository, &text, &config.layout.to_params())
        .context("Failed to compile text")?;

    if args.stats {
        log_stats(&toolpath);
    }

    let Some(output) = args.output.as_deref() else {
        bail!("No output file given");
    };
    write_toolpath(output, &toolpath)
        .with_context(|| format!("Failed to write toolpath {}", output.display()))?;
    info!("Wrote toolpath to {}", describe(output));
    Ok(())
}

fn check_coverage(repository: &GlyphRepository, text: &str) -> anyhow::Result<()> {
    let missing = repository.missing_characters(text);
    if missing.is_empty() {
        info!("All {} characters have a glyph", text.chars().count());
        return Ok(());
    }

    let listed: Vec<String> = missing.iter().map(|ch| format!("{ch:?}")).collect();
    bail!("No glyph for {} character(s): {}", missing.len(), listed.join(", "))
}

fn log_stats(toolpath: &str) {
    let preview = preview::extract(toolpath);
    let (drawn, travel) = preview.path_lengths();
    info!(
        "{} points, {} pen-down, drawn {:.3}, travel {:.3}",
        preview.points.len(),
        preview.stroke_count(),
        drawn,
        travel
    );
    if let Some(bounds) = preview.bounds {
        info!(
            "Extent {:.3} x {:.3} (x {:.3}..{:.3}, y {:.3}..{:.3})",
            bounds.width(),
            bounds.height(),
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y
        );
    }
}

fn describe(path: &Path) -> String {
    if path.as_os_str() == STDIO_PATH {
        "stdout".to_string()
    } else {
        path.display().to_string()
    }
}
