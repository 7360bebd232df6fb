//! Presets command - list the named threshold presets.

use anyhow::Result;
use clap::Args;
use scan_qa_core::Preset;

/// Arguments for the presets command.
#[derive(Args, Clone)]
pub struct PresetsArgs {
    /// Emit the preset table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the presets command.
pub fn run(args: &PresetsArgs) -> Result<()> {
    if args.json {
        let entries: Vec<_> = Preset::ALL
            .iter()
            .map(|preset| {
                let config = preset.config();
                serde_json::json!({
                    "name": preset.name(),
                    "blur_threshold": config.blur_threshold(),
                    "min_brightness": config.min_brightness(),
                    "max_brightness": config.max_brightness(),
                    "min_contrast": config.min_contrast(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!(
            "{:<20} {:>6} {:>8} {:>8} {:>9}",
            "preset", "blur", "min-br", "max-br", "contrast"
        );
        for preset in Preset::ALL {
            let config = preset.config();
            println!(
                "{:<20} {:>6} {:>8} {:>8} {:>9}",
                preset.name(),
                config.blur_threshold(),
                config.min_brightness(),
                config.max_brightness(),
                config.min_contrast()
            );
        }
    }
    Ok(())
}
