//! Command-line interface for turning photos into avatars

use crate::avatar::features::{EyeShape, FeatureRecord, HairStyle};
use crate::avatar::render::save_avatar;
use crate::color::hex::HexColor;
use crate::extraction::extractor::{ColorExtractor, ExtractorConfig};
use crate::io::configuration::{AVATAR_SUFFIX, REPORT_SUFFIX, SUPPORTED_EXTENSIONS, TARGET_WIDTH};
use crate::io::error::{AvatarError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::write_report;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "toonface")]
#[command(
    author,
    version,
    about = "Estimate hair, skin and eye colors from photos and render cartoon avatars"
)]
/// Command-line arguments for the avatar tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Photo or directory of photos; with --manual, the output path stem
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Hair shape to draw
    #[arg(long, value_enum, default_value_t = HairStyle::Short)]
    pub hair_style: HairStyle,

    /// Eye shape to draw
    #[arg(long, value_enum, default_value_t = EyeShape::Round)]
    pub eye_shape: EyeShape,

    /// Override the skin tone (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub skin_tone: Option<HexColor>,

    /// Override the hair color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub hair_color: Option<HexColor>,

    /// Override the eye color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub eye_color: Option<HexColor>,

    /// Skip extraction and render from defaults plus overrides
    #[arg(short, long)]
    pub manual: bool,

    /// Width photos are resampled to before sampling
    #[arg(short, long, default_value_t = TARGET_WIDTH)]
    pub width: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process photos even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log region geometry and sampled means
    #[arg(short, long)]
    pub verbose: bool,
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

    /// Starting record for every photo: defaults with the chosen shapes
    pub fn base_record(&self) -> FeatureRecord {
        let mut record = FeatureRecord::default();
        record.set_hair_style(self.hair_style);
        record.set_eye_shape(self.eye_shape);
        record
    }

    /// Apply explicit color overrides on top of extracted or default colors
    pub const fn apply_overrides(&self, record: &mut FeatureRecord) {
        if let Some(color) = self.skin_tone {
            record.set_skin_tone(color);
        }
        if let Some(color) = self.hair_color {
            record.set_hair_color(color);
        }
        if let Some(color) = self.eye_color {
            record.set_eye_color(color);
        }
    }
}

/// How a single photo was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Avatar and report written from this record
    Rendered(FeatureRecord),
    /// Outputs already existed
    Skipped,
    /// Extraction failed with this user-facing notice
    Failed(String),
}

/// Counts of what happened during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Photos that produced an avatar
    pub rendered: usize,
    /// Photos skipped because outputs existed
    pub skipped: usize,
    /// Photos whose extraction failed
    pub failed: Vec<PathBuf>,
}

/// Orchestrates batch extraction with progress tracking
pub struct FileProcessor {
    cli: Cli,
    extractor: ColorExtractor,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the normalization width is zero
    pub fn new(cli: Cli) -> Result<Self> {
        let extractor = ColorExtractor::new(ExtractorConfig {
            target_width: cli.width,
            ..ExtractorConfig::default()
        })?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            extractor,
            progress_manager,
        })
    }

    /// Process photos according to CLI arguments
    ///
    /// Photos that fail to decode are reported and skipped; the rest of the
    /// batch continues
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails or outputs cannot be written
    pub fn process(&mut self) -> Result<ProcessSummary> {
        if self.cli.manual {
            return self.process_manual();
        }

        let files = self.collect_files()?;
        let mut summary = ProcessSummary::default();

        if files.is_empty() {
            return Ok(summary);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let result = self.process_batch(&files, &mut summary);

        // Clear the bars before any error reaches the terminal
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        result.map(|()| summary)
    }

    fn process_batch(&mut self, files: &[PathBuf], summary: &mut ProcessSummary) -> Result<()> {
        for (index, file) in files.iter().enumerate() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, file);
            }

            let outcome = self.process_file(file)?;

            if let FileOutcome::Failed(message) = &outcome {
                let notice = format!("{}: {message}", file.display());
                match self.progress_manager {
                    Some(ref pm) => pm.notify(&notice),
                    None => warn!("{notice}"),
                }
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(index, &outcome);
            }

            match outcome {
                FileOutcome::Rendered(_) => summary.rendered += 1,
                FileOutcome::Skipped => summary.skipped += 1,
                FileOutcome::Failed(_) => summary.failed.push(file.clone()),
            }
        }

        Ok(())
    }

    fn process_manual(&self) -> Result<ProcessSummary> {
        let mut record = self.cli.base_record();
        self.cli.apply_overrides(&mut record);
        Self::write_outputs(&self.cli.target, &record)?;

        Ok(ProcessSummary {
            rendered: 1,
            ..ProcessSummary::default()
        })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("expected one of: {}", SUPPORTED_EXTENSIONS.join(", ")),
                ))
            }
        } else if target.is_dir() {
            let read_error = |e| AvatarError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file() && is_supported_image(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<FileOutcome> {
        if self.cli.skip_existing() && Self::get_avatar_path(input_path).exists() {
            warn!(path = %input_path.display(), "skipping, output exists");
            return Ok(FileOutcome::Skipped);
        }

        let bytes = std::fs::read(input_path).map_err(|e| AvatarError::FileSystem {
            path: input_path.to_path_buf(),
            operation: "read image",
            source: e,
        })?;

        let mut record = self.cli.base_record();
        match record.apply_photo(&self.extractor, &bytes) {
            Ok(result) => {
                info!(
                    path = %input_path.display(),
                    skin = %result.skin_tone,
                    hair = %result.hair_color,
                    eyes = %result.eye_color,
                    "extracted colors"
                );
            }
            Err(error) if error.is_extraction_failure() => {
                debug!(path = %input_path.display(), %error, "extraction failed");
                return Ok(FileOutcome::Failed(error.user_message()));
            }
            Err(error) => return Err(error),
        }

        self.cli.apply_overrides(&mut record);
        Self::write_outputs(input_path, &record)?;
        Ok(FileOutcome::Rendered(record))
    }

    fn write_outputs(base_path: &Path, record: &FeatureRecord) -> Result<()> {
        let avatar_path = Self::get_avatar_path(base_path);
        save_avatar(record, &avatar_path)?;
        write_report(record, &Self::get_report_path(base_path))?;
        debug!(path = %avatar_path.display(), "wrote avatar");
        Ok(())
    }

    /// Avatar path for a photo: `<stem>_avatar.svg` beside the input
    pub fn get_avatar_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, AVATAR_SUFFIX, "svg")
    }

    /// Report path for a photo: `<stem>_features.json` beside the input
    pub fn get_report_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, REPORT_SUFFIX, "json")
    }

    fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Whether a path has one of the supported image extensions
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
