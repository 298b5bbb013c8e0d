//! Optimizer configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/optimize/config_test.rs"]
mod config_test;

use super::interruption::create_interruption_quota;
use routing_core::prelude::*;
use routing_core::search::DEFAULT_MAX_ITERATIONS;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An optimizer configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies 2-opt local search configuration.
    pub local_search: Option<LocalSearchConfig>,
    /// Specifies genetic algorithm configuration.
    pub genetic: Option<GeneticConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies random generator configuration.
    pub random: Option<RandomConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A 2-opt local search configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSearchConfig {
    /// Max amount of 2-opt scans. Default is 1000.
    pub max_iterations: Option<usize>,
}

/// A termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max time of algorithm run in seconds.
    pub max_time: Option<usize>,
}

/// A random generator configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomConfig {
    /// A seed for repeatable runs.
    pub seed: Option<u64>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies how often best individual of genetic algorithm is logged. Default is 100 (generations).
    pub log_best: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a `RouteOptimizer` from config.
pub fn create_optimizer_from_config(config: &Config) -> RouteOptimizer {
    let random: Arc<dyn Random> =
        Arc::new(DefaultRandom::new_with_seed(config.random.as_ref().and_then(|random| random.seed)));
    let quota = create_interruption_quota(config.termination.as_ref().and_then(|termination| termination.max_time));
    let is_logging = get_logging_config(config).is_some_and(|logging| logging.enabled);
    let logger: InfoLogger = if is_logging { Environment::stdout_logger() } else { Arc::new(|_: &str| {}) };

    let max_iterations = config
        .local_search
        .as_ref()
        .and_then(|local_search| local_search.max_iterations)
        .unwrap_or(DEFAULT_MAX_ITERATIONS);

    RouteOptimizer::new(Arc::new(Environment::new(random, Some(quota), logger))).with_max_iterations(max_iterations)
}

/// Returns genetic algorithm configuration with telemetry settings applied.
pub fn get_genetic_config(config: &Config) -> GeneticConfig {
    let genetic = config.genetic.clone().unwrap_or_default();
    let log_best = genetic.log_best.or_else(|| get_logging_config(config).and_then(|logging| logging.log_best));

    GeneticConfig { log_best, ..genetic }
}

fn get_logging_config(config: &Config) -> Option<&LoggingConfig> {
    config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref())
}
