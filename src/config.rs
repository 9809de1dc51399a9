//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::engine::DEFAULT_START_KEY;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "persistent-stopwatch")]
#[command(about = "A persistent stopwatch that survives restarts and backgrounding")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// File the start instant is persisted in
    #[arg(short, long, default_value = "stopwatch.json")]
    pub store_path: PathBuf,

    /// Store key the start instant is kept under
    #[arg(short, long, default_value = DEFAULT_START_KEY)]
    pub key: String,

    /// Label refresh interval in milliseconds while running
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["persistent-stopwatch"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.key, "start_time");
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "persistent-stopwatch",
            "--port",
            "9000",
            "--store-path",
            "/tmp/sw.json",
            "--tick-ms",
            "250",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.store_path, PathBuf::from("/tmp/sw.json"));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Config::try_parse_from(["persistent-stopwatch", "--tick-ms", "0"]).is_err());
    }
}
