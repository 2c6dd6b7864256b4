//! Environment-backed configuration for the tool runners
//!
//! Every key is optional; defaults match the stock installation of each tool.
//! `.env` loading happens once in the entry point (`dotenv::dotenv().ok()`),
//! this module only reads the process environment.

/// Configuration for all four runners
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub jmeter: JmeterConfig,
    pub k6: K6Config,
    pub locust: LocustConfig,
    pub gatling: GatlingConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            jmeter: JmeterConfig::from_env(),
            k6: K6Config::from_env(),
            locust: LocustConfig::from_env(),
            gatling: GatlingConfig::from_env(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JmeterConfig {
    /// Path or bare name of the JMeter binary
    pub binary: String,
    /// Extra JVM options merged into the child's JAVA_OPTS
    pub java_opts: Option<String>,
}

impl JmeterConfig {
    pub fn from_env() -> Self {
        Self {
            binary: env_or("JMETER_BIN", "jmeter"),
            java_opts: std::env::var("JMETER_JAVA_OPTS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

impl Default for JmeterConfig {
    fn default() -> Self {
        Self {
            binary: "jmeter".to_string(),
            java_opts: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct K6Config {
    pub binary: String,
}

impl K6Config {
    pub fn from_env() -> Self {
        Self {
            binary: env_or("K6_BIN", "k6"),
        }
    }
}

impl Default for K6Config {
    fn default() -> Self {
        Self {
            binary: "k6".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocustConfig {
    pub binary: String,
    pub host: String,
    pub users: u32,
    pub spawn_rate: u32,
    pub run_time: String,
    pub headless: bool,
}

impl LocustConfig {
    pub fn from_env() -> Self {
        Self {
            binary: env_or("LOCUST_BIN", "locust"),
            host: env_or("LOCUST_HOST", "http://localhost:8089"),
            users: env_parse_or("LOCUST_USERS", 100),
            spawn_rate: env_parse_or("LOCUST_SPAWN_RATE", 10),
            run_time: env_or("LOCUST_RUNTIME", "30s"),
            headless: std::env::var("LOCUST_HEADLESS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
        }
    }
}

impl Default for LocustConfig {
    fn default() -> Self {
        Self {
            binary: "locust".to_string(),
            host: "http://localhost:8089".to_string(),
            users: 100,
            spawn_rate: 10,
            run_time: "30s".to_string(),
            headless: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GatlingConfig {
    /// Default build tool used to drive simulations ("mvn" or "gradle")
    pub build_tool: String,
}

impl GatlingConfig {
    pub fn from_env() -> Self {
        Self {
            build_tool: env_or("GATLING_RUNNER", "mvn"),
        }
    }
}

impl Default for GatlingConfig {
    fn default() -> Self {
        Self {
            build_tool: "mvn".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.jmeter.binary, "jmeter");
        assert_eq!(config.k6.binary, "k6");
        assert_eq!(config.locust.binary, "locust");
        assert_eq!(config.locust.host, "http://localhost:8089");
        assert_eq!(config.locust.users, 100);
        assert_eq!(config.locust.spawn_rate, 10);
        assert_eq!(config.locust.run_time, "30s");
        assert!(config.locust.headless);
        assert_eq!(config.gatling.build_tool, "mvn");
    }
}
