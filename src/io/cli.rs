//! Command-line interface for order generation and batch alpha-map extraction

use crate::game::{DifficultyLevel, OrderGenerator, RoundTimer};
use crate::io::configuration::{
    DEFAULT_LEVEL, DEFAULT_ORDER_COUNT, DEFAULT_SEED, DEFAULT_TIME_LIMIT_SECS,
};
use crate::io::error::{Result, StackError, WithPath, invalid_parameter};
use crate::io::image::{load_texture, save_alpha_map, texture_dimensions};
use crate::io::progress::ProgressManager;
use crate::texture::extract::{alpha_map_path, extract_alpha, is_alpha_map};
use crate::texture::import::{AlphaMapMode, ImportSettings, Platform};
use crate::texture::scope::ScopedOverride;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "stackburger")]
#[command(
    author,
    version,
    about = "Generate hamburger orders and extract alpha maps from textures"
)]
/// Command-line arguments shared by all subcommands
pub struct Cli {
    /// Suppress progress output and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Print randomly generated burger orders
    Orders(OrderArgs),
    /// Extract alpha channels of PNG textures into separate alpha maps
    Alpha(AlphaArgs),
}

/// Arguments for order generation
#[derive(Args, Debug, Clone)]
pub struct OrderArgs {
    /// Difficulty level selecting the filling count range
    #[arg(short, long, default_value_t = DEFAULT_LEVEL, allow_negative_numbers = true)]
    pub level: i32,

    /// Number of orders to generate
    #[arg(short, long, default_value_t = DEFAULT_ORDER_COUNT)]
    pub count: usize,

    /// Random seed for reproducible orders
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Seconds allowed per round
    #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    pub time_limit: f32,
}

/// Arguments for alpha-map extraction
#[derive(Args, Debug, Clone)]
pub struct AlphaArgs {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Storage depth of the alpha maps
    #[arg(short, long, value_enum, default_value_t = AlphaMapMode::Compressed)]
    pub mode: AlphaMapMode,

    /// Platform whose compressed format is targeted
    #[arg(short, long, value_enum, default_value_t = Platform::Android)]
    pub platform: Platform,

    /// Reject textures whose width and height differ
    #[arg(short = 'S', long)]
    pub require_square: bool,

    /// Process files even if their alpha map exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl AlphaArgs {
    /// Check if existing alpha maps should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, output or file processing fails
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Orders(args) => {
                let stdout = std::io::stdout();
                OrderPrinter::new(args).write_to(&mut stdout.lock())
            }
            Command::Alpha(args) => {
                let summary = FileProcessor::new(args, self.quiet).process()?;
                info!(
                    written = summary.written.len(),
                    skipped = summary.skipped,
                    failed = summary.failed,
                    format = %summary.output_settings.format,
                    npot_scale = ?summary.output_settings.npot_scale,
                    "alpha extraction finished"
                );
                Ok(())
            }
        }
    }
}

/// Writes generated orders with their round countdown, one per line
pub struct OrderPrinter {
    args: OrderArgs,
}

impl OrderPrinter {
    /// Create a printer for the given arguments
    pub const fn new(args: OrderArgs) -> Self {
        Self { args }
    }

    /// Generate the orders and write them to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the time limit is invalid or writing fails
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let mut timer = RoundTimer::new(self.args.time_limit)?;
        let mut generator = OrderGenerator::seeded(self.args.seed);
        let level = DifficultyLevel::new(self.args.level);

        for order in generator.generate_batch(level, self.args.count) {
            timer.start();
            writeln!(out, "{order} ({})", timer.display()).map_err(|e| StackError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write order",
                source: e,
            })?;
        }

        Ok(())
    }
}

/// Files written, skipped and failed during a batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Alpha maps written at source size, in processing order
    pub written: Vec<PathBuf>,
    /// Sources skipped because they were rejected or already processed
    pub skipped: usize,
    /// Sources that could not be read, extracted or saved
    pub failed: usize,
    /// Import settings the engine should apply to every written alpha map
    pub output_settings: ImportSettings,
}

/// Orchestrates batch extraction of alpha maps with progress tracking
pub struct FileProcessor {
    args: AlphaArgs,
    source_settings: ImportSettings,
    progress: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor for the given arguments
    pub fn new(args: AlphaArgs, quiet: bool) -> Self {
        let progress = if quiet {
            ProgressManager::hidden()
        } else {
            ProgressManager::new()
        };

        Self {
            args,
            source_settings: ImportSettings::default(),
            progress,
        }
    }

    /// Import settings sources are read under outside of extraction
    pub const fn source_settings(&self) -> &ImportSettings {
        &self.source_settings
    }

    /// Process every eligible file under the target
    ///
    /// A file that fails to load, extract or save is logged and counted in
    /// [`ProcessSummary::failed`]; the rest of the batch still runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing or not a PNG file or directory
    pub fn process(&mut self) -> Result<ProcessSummary> {
        let (files, skipped) = self.collect_files()?;
        let mut summary = ProcessSummary {
            skipped,
            output_settings: self.args.mode.output_settings(self.args.platform),
            ..ProcessSummary::default()
        };

        self.progress.initialize(files.len());
        for file in &files {
            self.progress.start_file(file);
            match self.process_file(file) {
                Ok(Some(output)) => summary.written.push(output),
                Ok(None) => summary.skipped += 1,
                Err(error) => {
                    warn!(path = %file.display(), "{error}");
                    summary.failed += 1;
                }
            }
            self.progress.complete_file();
        }
        debug!(processed = self.progress.position(), "batch complete");
        self.progress.finish();

        Ok(summary)
    }

    fn collect_files(&self) -> Result<(Vec<PathBuf>, usize)> {
        let target = &self.args.target;
        let candidates = if target.is_file() {
            if !is_png(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            vec![target.clone()]
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if is_png(&path) {
                    files.push(path);
                }
            }
            files.sort();
            files
        } else {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ));
        };

        let total = candidates.len();
        let files: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| self.should_process_file(path))
            .collect();
        let skipped = total - files.len();
        Ok((files, skipped))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if is_alpha_map(input_path) {
            debug!(path = %input_path.display(), "skipping alpha map");
            return false;
        }

        if self.args.skip_existing() && alpha_map_path(input_path).exists() {
            info!(path = %input_path.display(), "skipping, alpha map exists");
            return false;
        }

        true
    }

    fn process_file(&mut self, input_path: &Path) -> Result<Option<PathBuf>> {
        if self.args.require_square {
            let (width, height) = texture_dimensions(input_path)?;
            if width != height {
                let error = StackError::NotSquare {
                    path: input_path.to_path_buf(),
                    width,
                    height,
                };
                warn!("{error}");
                return Ok(None);
            }
        }

        let grid = {
            if self.source_settings.needs_reimport() {
                debug!(
                    path = %input_path.display(),
                    settings = ?self.source_settings,
                    "reimporting readable for extraction"
                );
            }
            let settings = ScopedOverride::apply(
                &mut self.source_settings,
                ImportSettings::prepared_for_extraction,
            );
            load_texture(input_path, &settings)?
        };

        let alpha = extract_alpha(&grid)?;
        let output = alpha.to_rgb_image();
        let output_path = alpha_map_path(input_path);
        save_alpha_map(&output, &output_path)?;

        let settings = self.args.mode.output_settings(self.args.platform);
        let (width, height) = output.dimensions();
        info!(
            source = %input_path.display(),
            output = %output_path.display(),
            format = %settings.format,
            platform = %self.args.platform,
            width,
            height,
            import_size = ?settings.npot_scale.target_size(width, height),
            "wrote alpha map"
        );

        Ok(Some(output_path))
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
