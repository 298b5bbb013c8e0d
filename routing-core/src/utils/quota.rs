#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::{Float, Timer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Specifies a computational quota for route optimization.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// A quota which is reached when an external flag is raised or an inner quota is reached.
pub struct FlagQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    flag: Arc<AtomicBool>,
}

impl FlagQuota {
    /// Creates a new instance of `FlagQuota`.
    pub fn new(inner: Option<Arc<dyn Quota + Send + Sync>>, flag: Arc<AtomicBool>) -> Self {
        Self { inner, flag }
    }
}

impl Quota for FlagQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.flag.load(Ordering::Relaxed)
    }
}
