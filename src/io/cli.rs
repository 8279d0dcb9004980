//! Command-line interface for batch generation from inventory documents

use crate::algorithm::executor::MatrixGenerator;
use crate::algorithm::usage::record_usage;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, INPUT_EXTENSION, MAX_CELL_SIZE, MAX_GENERATION_ATTEMPTS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::{export_matrix_as_png, palette_from_inventory};
use crate::io::inventory_file::InventoryDocument;
use crate::io::progress::ProgressManager;
use crate::io::report::GenerationReport;
use crate::model::{GenerationOutcome, GridSpec};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "panelmatrix")]
#[command(
    author,
    version,
    about = "Generate panel colour matrices with no adjacent repeats"
)]
/// Command-line arguments for the matrix generation tool
pub struct Cli {
    /// Inventory JSON file or directory of them
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation (defaults to OS entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum full-grid attempts per file (at least 1)
    #[arg(short, long, default_value_t = MAX_GENERATION_ATTEMPTS)]
    pub attempts: usize,

    /// Override the document's row count
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Override the document's column count
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Edge length in pixels of one panel in the exported image (1 to 256)
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid for a document after applying command-line overrides
    pub fn grid_for(&self, document: &InventoryDocument) -> GridSpec {
        GridSpec::new(
            self.rows.unwrap_or(document.rows),
            self.columns.unwrap_or(document.columns),
        )
    }
}

/// Orchestrates batch generation with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Infeasible or failed generations are reported, not treated as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, document loading or output
    /// writing fails
    pub fn process(&mut self) -> Result<()> {
        if !(1..=MAX_CELL_SIZE).contains(&self.cli.cell_size) {
            return Err(invalid_parameter(
                "cell-size",
                &self.cli.cell_size,
                &format!("must be between 1 and {MAX_CELL_SIZE} pixels"),
            ));
        }
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"at least one attempt is required",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let result = files
            .iter()
            .enumerate()
            .try_for_each(|(index, file)| self.process_file(file, index));

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if Self::is_input_document(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"Target file must be a JSON inventory document",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if Self::is_input_document(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"Target must be a JSON file or directory",
            ))
        }
    }

    /// JSON files that are not reports written by a previous run
    fn is_input_document(path: &Path) -> bool {
        let is_json = path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION);
        let is_report = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
        is_json && !is_report
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let report_path = Self::get_report_path(input_path);
        if report_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let document = InventoryDocument::from_path(input_path)?;
        let mut inventory = document.inventory();
        let grid = self.cli.grid_for(&document);

        let mut generator = self
            .cli
            .seed
            .map_or_else(MatrixGenerator::from_entropy, MatrixGenerator::new)
            .with_max_attempts(self.cli.attempts);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, generator.max_attempts());
        }

        let progress = &mut self.progress_manager;
        let generation = generator.generate_with_observer(&inventory, grid, |attempt| {
            if let Some(pm) = progress.as_mut() {
                pm.update_attempt(index, attempt);
            }
        });

        let kind = generation.outcome.kind();
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, kind.label());
        }

        match &generation.outcome {
            GenerationOutcome::Success(matrix) => {
                record_usage(&mut inventory, matrix);
                let palette = palette_from_inventory(&inventory)?;
                export_matrix_as_png(
                    matrix,
                    &palette,
                    self.cli.cell_size,
                    &Self::get_image_path(input_path),
                )?;
                log::info!(
                    "{}: {}x{} matrix after {} attempts",
                    input_path.display(),
                    grid.major_count,
                    grid.minor_count,
                    generation.attempts
                );
            }
            GenerationOutcome::Skipped => {
                log::warn!(
                    "{}: skipped, needs at least two colours and a grid within bounds",
                    input_path.display()
                );
            }
            _ => {
                log::warn!("{}: {}", input_path.display(), kind.label());
            }
        }

        GenerationReport::new(&generation, &inventory, grid)
            .write_to(&Self::get_report_path(input_path))
    }

    fn get_output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    /// Path of the JSON report written next to an input document
    pub fn get_report_path(input_path: &Path) -> PathBuf {
        Self::get_output_path(input_path, INPUT_EXTENSION)
    }

    /// Path of the PNG written next to an input document
    pub fn get_image_path(input_path: &Path) -> PathBuf {
        Self::get_output_path(input_path, "png")
    }
}
