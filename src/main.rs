#[allow(non_snake_case)]
pub mod Petri;
pub mod settings;

use Petri::petri_pipeline::PetriData;
use log::error;
use settings::Settings;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();
    let settings = Settings::new();
    let mut petri_data = PetriData::new();
    if let Err(e) = petri_data.run_full_pipeline(&settings) {
        error!("{}", e);
        std::process::exit(1);
    }
}
