use clap::Parser;
use colored::Colorize;
use loadrig::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    telemetry, Result,
};

fn main() {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(e) = run(cli, &config) {
        eprintln!("{} {}", "✗".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Jmeter {
            plan,
            duration,
            threads,
            timeout,
            gui,
        } => {
            commands::execute_jmeter(config, &plan, duration, threads, timeout, gui)?;
        }
        Commands::K6 {
            script,
            duration,
            vus,
        } => {
            commands::execute_k6(config, &script, &duration, vus)?;
        }
        Commands::Locust {
            test_file,
            host,
            users,
            spawn_rate,
            run_time,
            web_ui,
        } => {
            commands::execute_locust(
                config,
                &test_file,
                host.as_deref(),
                users,
                spawn_rate,
                run_time.as_deref(),
                web_ui,
            )?;
        }
        Commands::Gatling {
            dir,
            simulation,
            build_tool,
        } => {
            commands::execute_gatling(config, &dir, simulation.as_deref(), build_tool.as_deref())?;
        }
    }

    Ok(())
}
