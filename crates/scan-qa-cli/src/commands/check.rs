//! Check command - validate images against quality thresholds.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use scan_qa_adapters::FsImageSource;
use scan_qa_core::{
    ConfigOverrides, ImageDimensions, ImageQualityValidator, ImageSource, Preset, ProgressEvent,
    ProgressSink, QualityConfig, ResultOutput, ValidationRecord,
};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar};

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Named preset selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PresetArg {
    /// General-purpose defaults
    Default,
    /// ID/payment card capture
    CardScanning,
    /// Full-page document capture
    DocumentScanning,
    /// Photographic capture
    PhotoCapture,
    /// Lenient thresholds
    Relaxed,
    /// Archival-grade thresholds
    Strict,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Default => Self::Default,
            PresetArg::CardScanning => Self::CardScanning,
            PresetArg::DocumentScanning => Self::DocumentScanning,
            PresetArg::PhotoCapture => Self::PhotoCapture,
            PresetArg::Relaxed => Self::Relaxed,
            PresetArg::Strict => Self::Strict,
        }
    }
}

/// Parse and validate a positive threshold value.
fn parse_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{value} is not positive"))
    }
}

/// Parse and validate a brightness bound (0-255).
fn parse_channel(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=255.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=255.0"))
    }
}

/// Parse and validate a non-negative threshold value.
fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{value} is negative"))
    }
}

/// Shared arguments for image validation.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Files or directories to validate
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Threshold preset to start from
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Laplacian-variance blur threshold (> 0)
    #[arg(long, value_parser = parse_positive)]
    pub blur_threshold: Option<f64>,

    /// Minimum acceptable average brightness (0-255)
    #[arg(long, value_parser = parse_channel)]
    pub min_brightness: Option<f64>,

    /// Maximum acceptable average brightness (0-255)
    #[arg(long, value_parser = parse_channel)]
    pub max_brightness: Option<f64>,

    /// Minimum acceptable contrast score (>= 0)
    #[arg(long, value_parser = parse_non_negative)]
    pub min_contrast: Option<f64>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,
}

impl CheckArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Preset defaults
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Recursive: config applies only if CLI --recursive not passed
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Thresholds and preset: CLI > config (resolve_config applies the
        // preset fallback)
        if args.preset.is_none() {
            args.preset = config.quality.preset.map(|p| match p {
                Preset::Default => PresetArg::Default,
                Preset::CardScanning => PresetArg::CardScanning,
                Preset::DocumentScanning => PresetArg::DocumentScanning,
                Preset::PhotoCapture => PresetArg::PhotoCapture,
                Preset::Relaxed => PresetArg::Relaxed,
                Preset::Strict => PresetArg::Strict,
            });
        }
        args.blur_threshold = args.blur_threshold.or(config.quality.blur_threshold);
        args.min_brightness = args.min_brightness.or(config.quality.min_brightness);
        args.max_brightness = args.max_brightness.or(config.quality.max_brightness);
        args.min_contrast = args.min_contrast.or(config.quality.min_contrast);

        // Output format: CLI > config
        if args.format.is_none() {
            args.format = config.output.format.as_ref().and_then(|s| match s.as_str() {
                "json" => Some(OutputFormat::Json),
                "jsonl" => Some(OutputFormat::Jsonl),
                _ => None,
            });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args
    }

    /// Resolve the effective quality config: preset, then overrides.
    fn resolve_config(&self) -> Result<QualityConfig> {
        let preset = self.preset.map_or(Preset::Default, Preset::from);
        let overrides = ConfigOverrides {
            blur_threshold: self.blur_threshold,
            min_brightness: self.min_brightness,
            max_brightness: self.max_brightness,
            min_contrast: self.min_contrast,
        };
        preset
            .config()
            .with_overrides(&overrides)
            .with_context(|| format!("invalid thresholds on top of preset '{}'", preset.name()))
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the check command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct CheckResult {
    /// Number of images validated.
    pub processed: usize,
    /// Number of images skipped.
    pub skipped: usize,
    /// Number of images that failed validation.
    pub invalid: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the check command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &CheckArgs) -> Result<CheckResult> {
    info!("Running check command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let quality_config = args.resolve_config()?;
    debug!(?quality_config, "Resolved quality thresholds");
    let validator = ImageQualityValidator::new(quality_config);

    // Initialize image source
    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    // Determine if we should show progress
    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());

    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);
    let output = JsonOutput::stdout();

    process_images(&source, &validator, &output, &progress_bar, args)
}

/// Validate images from the source and write records.
fn process_images(
    source: &FsImageSource,
    validator: &ImageQualityValidator,
    output: &JsonOutput,
    progress: &ProgressBar,
    args: &CheckArgs,
) -> Result<CheckResult> {
    let total = source.count_hint();
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut invalid = 0usize;
    let mut all_records: Vec<ValidationRecord> = Vec::new();

    for (index, image_result) in source.images().enumerate() {
        let image = match image_result {
            Ok(img) => img,
            Err(e) => {
                // The error message carries the path via anyhow context
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("image {index}"),
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        let path = image.path.clone();

        progress.on_event(ProgressEvent::Started {
            path: path.clone(),
            index,
            total,
        });

        let quality = validator.validate(&image);
        if !quality.is_valid {
            invalid += 1;
        }

        let record = ValidationRecord {
            path,
            timestamp: rfc3339_timestamp(),
            dimensions: ImageDimensions::new(image.width, image.height),
            quality,
        };

        progress.on_event(ProgressEvent::Completed {
            record: record.clone(),
        });

        match args.format() {
            OutputFormat::Jsonl => {
                output.write(&record)?;
            }
            OutputFormat::Json => {
                all_records.push(record);
            }
        }

        processed += 1;
    }

    // For JSON format, output all records as one array
    if matches!(args.format(), OutputFormat::Json) {
        output.write_array(&all_records, args.pretty)?;
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished { processed, skipped });

    let exit_code = if invalid > 0 {
        ExitCode::IssuesFound
    } else {
        ExitCode::Success
    };

    Ok(CheckResult {
        processed,
        skipped,
        invalid,
        exit_code,
    })
}

/// Generate an RFC 3339 UTC timestamp.
fn rfc3339_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> CheckArgs {
        CheckArgs {
            paths: vec![],
            recursive: false,
            preset: None,
            blur_threshold: None,
            min_brightness: None,
            max_brightness: None,
            min_contrast: None,
            progress: false,
            quiet: false,
            format: None,
            pretty: false,
        }
    }

    #[test]
    fn test_resolve_defaults_to_default_preset() {
        let config = bare_args().resolve_config().expect("default resolves");
        assert_eq!(config, Preset::Default.config());
    }

    #[test]
    fn test_resolve_applies_preset_and_overrides() {
        let mut args = bare_args();
        args.preset = Some(PresetArg::CardScanning);
        args.min_contrast = Some(10.0);

        let config = args.resolve_config().expect("valid combination");
        assert!((config.blur_threshold() - 80.0).abs() < f64::EPSILON);
        assert!((config.min_contrast() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_rejects_inverted_bounds() {
        let mut args = bare_args();
        args.min_brightness = Some(230.0);
        // Default preset max is 220, so min 230 inverts the window
        assert!(args.resolve_config().is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert!(parse_positive("100").is_ok());
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-5").is_err());
        assert!(parse_positive("abc").is_err());
    }

    #[test]
    fn test_parse_channel() {
        assert!(parse_channel("0").is_ok());
        assert!(parse_channel("255").is_ok());
        assert!(parse_channel("256").is_err());
        assert!(parse_channel("-1").is_err());
    }
}
