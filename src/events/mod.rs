// src/events/mod.rs
//
// Internal Event System - Public API
//
// NOTE: the type-erased EventHandler alias is internal to the bus module
// and must NOT be exported.

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    NotificationKind,
    NotificationRequested,
    NotificationStyle,
    ProductCreated,
    ProductRemoved,
    ProductUpdated,
};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
