//! Application layer: the gallery navigation engine.
//!
//! This module sits between the runtime (main.rs) and the domain, repository
//! and worker layers.
//!
//! # Architecture
//!
//! Data flows in one direction:
//!
//! ```text
//! Commands → Events → Event Handler → State Mutations → Actions → Side Effects
//!                          ↑                                 ↓
//!                          └──────── Page Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing and page transitions
//! - [`modes`]: transition kinds and their follow-up selection
//! - [`state`]: gallery state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{SelectionAfterLoad, Transition};
pub use state::{GalleryState, PendingLoad, GRID_COLUMNS};
