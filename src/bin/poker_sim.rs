use poker_sim::config::SimulationConfig;
use poker_sim::simulation::Simulator;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("poker-sim {}", poker_sim::VERSION);

    let config = match SimulationConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulator::new(config);
    match sim.run() {
        Ok(estimate) => {
            println!("{estimate}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("simulation of {} failed: {err}", sim.config().target);
            ExitCode::FAILURE
        }
    }
}
