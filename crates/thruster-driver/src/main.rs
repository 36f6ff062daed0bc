use std::process::ExitCode;

use tracing::{error, info};

use thruster_driver::errors::DriverError;
use thruster_driver::logging;
use thruster_driver::scenario::Scenario;
use thruster_driver::{Driver, DriverConfig};

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    logging::init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "driver failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DriverError> {
    let config = DriverConfig::from_env()?;
    info!(
        scenario = %config.scenario_path.display(),
        ticks = config.ticks,
        atomic_fuel_moves = config.atomic_fuel_moves,
        "starting driver"
    );

    let scenario = Scenario::load(&config.scenario_path)?;
    let mut driver = Driver::from_scenario(config, scenario)?;
    let snapshot = driver.run();
    info!(
        ticks = driver.time().tick,
        failed = snapshot.failures.len(),
        "driver finished"
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
