// Volatile service implementation
use std::sync::atomic::{AtomicI32, Ordering};

use sqlnet_core::port::volatile::VolatileService;

/// Volatile service for the generic platform (release store)
#[derive(Debug, Default, Clone, Copy)]
pub struct VolatileServiceGeneric;

impl VolatileServiceGeneric {
    pub fn new() -> Self {
        Self
    }
}

impl VolatileService for VolatileServiceGeneric {
    fn write(&self, location: &AtomicI32, value: i32) {
        location.store(value, Ordering::Release);
    }
}
