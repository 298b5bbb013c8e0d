//! Interruption handler.

use routing_core::prelude::{Quota, TimeQuota};
use routing_core::utils::{FlagQuota, Float};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Creates interruption quota which is reached on Ctrl-C or when `max_time` (in seconds) is elapsed.
pub fn create_interruption_quota(max_time: Option<usize>) -> Arc<dyn Quota + Send + Sync> {
    let inner = max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as Float)));

    Arc::new(FlagQuota::new(inner, get_interruption_flag()))
}

fn get_interruption_flag() -> Arc<AtomicBool> {
    static SHOULD_INTERRUPT: OnceLock<Arc<AtomicBool>> = OnceLock::new();

    // NOTE ctrlc allows to set handler only once per process
    SHOULD_INTERRUPT
        .get_or_init(|| {
            let should_interrupt = Arc::new(AtomicBool::new(false));

            if let Err(err) = ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || should_interrupt.store(true, Ordering::Relaxed)
            }) {
                eprintln!("cannot set interruption handler: '{err}'");
            }

            should_interrupt
        })
        .clone()
}
