use anyhow::Error;
use log::{error, info};
use pitch_page::{HostConfig, Scenario};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

/// Run the scenario named on the command line, or the built-in tour.
fn run() -> Result<bool, Error> {
    let config = HostConfig::from_env();
    let scenario = match env::args_os().nth(1) {
        Some(path) => Scenario::load(&PathBuf::from(path))?,
        None => {
            info!("no scenario given; running the built-in tour");
            Scenario::tour()
        }
    };

    let report = scenario.run(&config)?;
    for failure in &report.failures {
        error!("{failure}");
    }
    if let Some(state) = report.final_state() {
        info!(
            "finished {} steps: active={} scrolled={}",
            report.outcomes.len(),
            state.active,
            state.scrolled
        );
    }
    Ok(report.passed())
}
