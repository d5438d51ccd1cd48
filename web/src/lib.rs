use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use kezuri_core as game;
use wasm_bindgen::prelude::*;

mod card;
mod fetch;
mod input;
mod settings;
mod surface;
mod utils;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    Classic,
    #[default]
    Fetched,
    Mobile,
}

impl From<PresetArg> for game::Preset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Classic => game::Preset::Classic,
            PresetArg::Fetched => game::Preset::Fetched,
            PresetArg::Mobile => game::Preset::Mobile,
        }
    }
}

/// Options read from the page URL fragment, e.g. `#-v&--preset=mobile&--threshold=0.3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Which card variant to run
    #[arg(long, value_enum, default_value_t)]
    preset: PresetArg,

    /// Revealed fraction that shows the reward, overriding the preset
    #[arg(long)]
    threshold: Option<f64>,

    /// Fixed brush radius in canvas pixels, overriding the preset
    #[arg(long)]
    brush: Option<f64>,

    /// Where to ask for the outcome
    #[arg(long, default_value = "/getResult")]
    endpoint: String,

    /// Force the seed of the random fallback outcome
    #[arg(short, long)]
    seed: Option<u64>,

    /// Id of the canvas element to scratch
    #[arg(long, default_value = "scratchCanvas")]
    canvas: String,

    /// Id of the element to show once enough is revealed
    #[arg(long, default_value = "revealButton")]
    reward: String,
}

/// Splits a location hash into clap arguments, with a placeholder binary name first.
fn fragment_args(location_hash: &str) -> impl Iterator<Item = &str> {
    std::iter::once("kezuri").chain(
        location_hash
            .split(['#', '&'])
            .filter(|arg| !arg.is_empty()),
    )
}

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let (args, parse_error) = match Args::try_parse_from(fragment_args(&location_hash)) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from(fragment_args("")), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level()
        && let Err(err) = console_log::init_with_level(log_level)
    {
        web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
    }
    if let Some(err) = parse_error {
        log::error!("ignoring URL options: {}", err);
    }

    let config = settings::effect_config(&args);
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("config: {:?}, fallback seed: {}", config, seed);

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = if config.fetch_outcome {
            Some(fetch::acquire_outcome(&args.endpoint, seed).await)
        } else {
            None
        };
        match card::ScratchCard::mount(config, outcome, &args.canvas, &args.reward) {
            Ok(_card) => log::debug!("App started"),
            Err(err) => log::error!("could not start scratch card: {:?}", err),
        }
    });
    Ok(())
}
