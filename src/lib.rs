// src/lib.rs
// ProductHub - Client-side product catalog editor core
//
// Architecture:
// - Domain-centric: validation rules and entities live in `domain`
// - Event-driven: services announce mutations through a synchronous bus
// - Explicit: no implicit behavior, no stringly-typed field dispatch
// - Transient: the collection is in-memory only and dies with the session
//
// The visual layer (list, modals, chips, toasts) is not part of this crate;
// it drives the editor and catalog services and subscribes to the bus.

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod catalog_data;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod util;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    effective_colors,
    validate_draft,
    Category,
    FieldErrors,
    Product,
    ProductDraft,
    ProductField,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventBus,
    EventLogEntry,
    NotificationKind,
    NotificationRequested,
    NotificationStyle,
    ProductCreated,
    ProductRemoved,
    ProductUpdated,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{MemoryProductRepository, ProductRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CatalogService,
    CreateProductRequest,
    EditorService,
    UpdateProductRequest,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{bootstrap, AppState};
pub use application::dto;
