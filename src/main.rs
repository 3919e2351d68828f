use anyhow::Result;
use chrono::Local;

use placar::config::Config;
use placar::uhapi::client::HttpSource;

fn main() -> Result<()> {
    // Begin logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let source = HttpSource::new(&config.api_base, config.timeout)?;

    let results = placar::placar::run_placar(&config, &source, Local::now().naive_local())?;
    for result in &results {
        log::debug!("{}", result);
    }

    log::info!("Scoreboard updated for {} players.", results.len());
    Ok(())
}
