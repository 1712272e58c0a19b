//! Main entry point for the font comparison tool.
//!
//! Shows one sample text twice, side by side, in two fonts chosen by name.

mod app;
mod fonts;
mod message;
mod styles;
mod update;
mod view;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Missing or malformed config.json is fatal; a missing one is regenerated first.
    let config = match fontcompare_core::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    app::run(config)
}
