//! Scene event distribution.
//!
//! Scene store mutations and collaborator outcomes are published here so
//! derived computation (BOM, meshes) can recompute without polling.

mod bus;
mod events;

pub use bus::{EventBus, EventBusConfig, EventBusError, EventFilter, SubscriptionId};
pub use events::{
    CatalogEvent, DesignEvent, ErrorEvent, EventCategory, GenerationEvent, SceneEvent,
};
