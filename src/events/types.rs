// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// PRODUCT DOMAIN EVENTS
// ============================================================================

/// Emitted when a new product is committed to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: Uuid,
    pub title: String,
}

impl ProductCreated {
    pub fn new(product_id: Uuid, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
            title,
        }
    }
}

impl DomainEvent for ProductCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProductCreated" }
}

/// Emitted when an edit commit replaces a product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: Uuid,
}

impl ProductUpdated {
    pub fn new(product_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
        }
    }
}

impl DomainEvent for ProductUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProductUpdated" }
}

/// Emitted when a product is removed from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: Uuid,
}

impl ProductRemoved {
    pub fn new(product_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
        }
    }
}

impl DomainEvent for ProductRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProductRemoved" }
}

// ============================================================================
// NOTIFICATION INTENTS
// ============================================================================

/// What kind of catalog mutation a notification announces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Create,
    Edit,
    Delete,
}

/// Style hint for the toast layer; the core does not know how (or whether)
/// the notification is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStyle {
    Dark,
    Danger,
}

impl NotificationKind {
    pub fn style(&self) -> NotificationStyle {
        match self {
            NotificationKind::Create | NotificationKind::Edit => NotificationStyle::Dark,
            NotificationKind::Delete => NotificationStyle::Danger,
        }
    }
}

/// Emitted after every successful create/edit/delete so a toast layer can
/// give user feedback. This is an intent: message plus style hint only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: NotificationKind,
    pub message: String,
}

impl NotificationRequested {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            message: message.into(),
        }
    }

    pub fn style(&self) -> NotificationStyle {
        self.kind.style()
    }
}

impl DomainEvent for NotificationRequested {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "NotificationRequested" }
}
