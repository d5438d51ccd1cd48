use crate::Args;
use kezuri_core as game;

/// Preset configuration with the URL overrides applied. Invalid overrides fall back to the preset.
pub(crate) fn effect_config(args: &Args) -> game::EffectConfig {
    let preset = game::Preset::from(args.preset);
    let mut config = preset.config();
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(radius) = args.brush {
        config.brush = game::BrushSize::Fixed(radius);
    }

    match config.validate() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}, using the {} preset as is", err, preset.name());
            preset.config()
        }
    }
}
