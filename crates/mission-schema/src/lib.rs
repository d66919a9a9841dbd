//! Mission document schema binding
//!
//! Typed object tree mirroring the external Mission XML schema, with
//! serde/quick-xml (de)serialization.
//!
//! # Core Concepts
//!
//! - [`Mission`]: root of the document tree, owns everything below it
//! - [`ServerSection`]/[`ServerHandlers`]: world generation, drawing, time
//! - [`AgentSection`]/[`AgentHandlers`]: per-agent start state, observation
//!   producers, rewards, command handlers
//! - [`ModifierList`]: allow-list XOR deny-list for a command handler (the
//!   type carries exactly one list, so both at once is unrepresentable)
//!
//! # Example
//!
//! ```rust
//! use mission_schema::Mission;
//!
//! let mission = Mission::default();
//! let xml = mission.to_xml(false).unwrap();
//! let parsed = Mission::from_xml(&xml, true).unwrap();
//! assert_eq!(mission, parsed);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod agent;
mod commands;
mod drawing;
mod error;
mod mission;
mod server;
mod strict;

pub use agent::{
    AgentHandlers, AgentQuitFromReachingPosition, AgentSection, AgentStart, GameMode,
    GridCorner, GridDefinition, NamedPoint, ObservationFromChat, ObservationFromDistance,
    ObservationFromFullInventory, ObservationFromGrid, ObservationFromHotBar,
    ObservationFromRecentCommands, Placement, PositionMarker, QuitMarker,
    RewardForReachingPosition, VideoProducer,
};
pub use commands::{CommandHandler, ModifierKind, ModifierList};
pub use drawing::{DrawObject, DrawingDecorator};
pub use error::SchemaError;
pub use mission::{About, Mission};
pub use server::{
    DefaultWorldGenerator, FlatWorldGenerator, ServerHandlers, ServerInitialConditions,
    ServerQuitFromTimeUp, ServerSection, Time,
};

/// XML namespace every mission document is rooted in.
pub const XML_NAMESPACE: &str = "http://ProjectMalmo.microsoft.com";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
