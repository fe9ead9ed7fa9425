// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer is the boundary between the UI shell and the services
// - It translates between DTOs and domain entities
// - It owns construction order (bootstrap) and nothing else

pub mod dto;
pub mod state;

pub use dto::*;
pub use state::{bootstrap, AppState};
