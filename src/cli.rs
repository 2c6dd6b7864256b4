use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loadrig")]
#[command(version)]
#[command(about = "Run load tests through JMeter, k6, Locust or Gatling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a JMeter test plan
    Jmeter {
        /// Path to the test plan (.jmx)
        #[arg(short, long)]
        plan: PathBuf,

        /// Test duration in seconds
        #[arg(short, long)]
        duration: Option<u32>,

        /// Number of virtual users
        #[arg(short, long)]
        threads: Option<u32>,

        /// Wall-clock timeout in seconds for the non-GUI run
        #[arg(long)]
        timeout: Option<u64>,

        /// Launch the interactive GUI instead of running in non-GUI mode
        #[arg(long)]
        gui: bool,
    },

    /// Run a k6 test script
    K6 {
        /// Path to the test script (.js)
        #[arg(short, long)]
        script: PathBuf,

        /// Test duration (e.g. "30s", "1m")
        #[arg(short, long, default_value = "30s")]
        duration: String,

        /// Number of virtual users
        #[arg(short = 'u', long, default_value = "10")]
        vus: u32,
    },

    /// Run a Locust test file
    Locust {
        /// Path to the Locust test file
        #[arg(short = 'f', long)]
        test_file: PathBuf,

        /// Target host URL (defaults to LOCUST_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Number of concurrent users (defaults to LOCUST_USERS)
        #[arg(short, long)]
        users: Option<u32>,

        /// Users spawned per second (defaults to LOCUST_SPAWN_RATE)
        #[arg(short = 'r', long)]
        spawn_rate: Option<u32>,

        /// Test duration, e.g. "30s" (defaults to LOCUST_RUNTIME)
        #[arg(short = 't', long)]
        run_time: Option<String>,

        /// Serve the web control UI instead of running headless
        #[arg(long)]
        web_ui: bool,
    },

    /// Run a Gatling simulation project
    Gatling {
        /// Simulation directory containing a Maven or Gradle wrapper
        #[arg(short, long)]
        dir: PathBuf,

        /// Simulation class to run (all simulations if not specified)
        #[arg(short, long)]
        simulation: Option<String>,

        /// Build tool, mvn or gradle (defaults to GATLING_RUNNER)
        #[arg(short, long)]
        build_tool: Option<String>,
    },
}
