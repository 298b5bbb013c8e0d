use crate::utils::{DefaultRandom, Quota, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the optimizer.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, quota: Option<Arc<dyn Quota + Send + Sync>>, logger: InfoLogger) -> Self {
        Self { random, quota, logger }
    }

    /// Creates an instance of `Environment` with repeatable random and no logging.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }

    /// Returns true if the quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }

    /// Creates a logger which writes to standard output.
    pub fn stdout_logger() -> InfoLogger {
        Arc::new(|msg: &str| println!("{msg}"))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, Arc::new(|_| {}))
    }
}
