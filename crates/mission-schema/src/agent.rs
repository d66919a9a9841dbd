//! Per-agent mission settings
//!
//! Each agent section carries a name, a game mode, an optional start
//! placement and the handler block: observation producers, video, rewards,
//! quit conditions and command handlers.

use serde::{Deserialize, Serialize};

use crate::commands::CommandHandler;

/// Player mode for an agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Normal play: takes damage, cannot fly
    #[default]
    Survival,
    /// Can fly, does not sustain damage
    Creative,
    /// Can fly and pass through objects, cannot interact
    Spectator,
}

/// One agent's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSection {
    #[serde(rename = "@mode", default)]
    pub mode: GameMode,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "AgentStart", default)]
    pub start: AgentStart,

    #[serde(rename = "AgentHandlers", default)]
    pub handlers: AgentHandlers,
}

impl AgentSection {
    /// Agent with the given name, survival mode, no placement, no handlers
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            mode: GameMode::default(),
            name: name.into(),
            start: AgentStart::default(),
            handlers: AgentHandlers::default(),
        }
    }
}

/// Start state for an agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentStart {
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

/// World position and optional facing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "@x")]
    pub x: f64,
    #[serde(rename = "@y")]
    pub y: f64,
    #[serde(rename = "@z")]
    pub z: f64,
    #[serde(rename = "@yaw", skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f64>,
    #[serde(rename = "@pitch", skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
}

impl Placement {
    /// Placement without a facing direction
    #[inline]
    #[must_use]
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            yaw: None,
            pitch: None,
        }
    }
}

/// The full handler block for one agent.
///
/// Every field is optional; at most one element per handler kind, which the
/// `Option` layout enforces by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentHandlers {
    // Observation producers
    #[serde(
        rename = "ObservationFromRecentCommands",
        skip_serializing_if = "Option::is_none"
    )]
    pub observe_recent_commands: Option<ObservationFromRecentCommands>,

    #[serde(
        rename = "ObservationFromHotBar",
        skip_serializing_if = "Option::is_none"
    )]
    pub observe_hot_bar: Option<ObservationFromHotBar>,

    #[serde(
        rename = "ObservationFromFullInventory",
        skip_serializing_if = "Option::is_none"
    )]
    pub observe_full_inventory: Option<ObservationFromFullInventory>,

    #[serde(
        rename = "ObservationFromGrid",
        skip_serializing_if = "Option::is_none"
    )]
    pub observe_grid: Option<ObservationFromGrid>,

    #[serde(
        rename = "ObservationFromDistance",
        skip_serializing_if = "Option::is_none"
    )]
    pub observe_distance: Option<ObservationFromDistance>,

    #[serde(
        rename = "ObservationFromChat",
        skip_serializing_if = "Option::is_none"
    )]
    pub observe_chat: Option<ObservationFromChat>,

    // Video
    #[serde(rename = "VideoProducer", skip_serializing_if = "Option::is_none")]
    pub video_producer: Option<VideoProducer>,

    // Rewards and quit conditions
    #[serde(
        rename = "RewardForReachingPosition",
        skip_serializing_if = "Option::is_none"
    )]
    pub reward_for_reaching_position: Option<RewardForReachingPosition>,

    #[serde(
        rename = "AgentQuitFromReachingPosition",
        skip_serializing_if = "Option::is_none"
    )]
    pub quit_from_reaching_position: Option<AgentQuitFromReachingPosition>,

    // Command handlers
    #[serde(
        rename = "ContinuousMovementCommands",
        skip_serializing_if = "Option::is_none"
    )]
    pub continuous_movement_commands: Option<CommandHandler>,

    #[serde(
        rename = "DiscreteMovementCommands",
        skip_serializing_if = "Option::is_none"
    )]
    pub discrete_movement_commands: Option<CommandHandler>,

    #[serde(
        rename = "AbsoluteMovementCommands",
        skip_serializing_if = "Option::is_none"
    )]
    pub absolute_movement_commands: Option<CommandHandler>,

    #[serde(
        rename = "InventoryCommands",
        skip_serializing_if = "Option::is_none"
    )]
    pub inventory_commands: Option<CommandHandler>,

    #[serde(rename = "ChatCommands", skip_serializing_if = "Option::is_none")]
    pub chat_commands: Option<CommandHandler>,
}

impl AgentHandlers {
    /// Remove every command handler, leaving observations and video intact
    pub fn clear_command_handlers(&mut self) {
        self.continuous_movement_commands = None;
        self.discrete_movement_commands = None;
        self.absolute_movement_commands = None;
        self.inventory_commands = None;
        self.chat_commands = None;
    }
}

/// Reports commands acted on since the last observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationFromRecentCommands {}

/// Reports the contents of the hot-bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationFromHotBar {}

/// Reports the full item inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationFromFullInventory {}

/// Reports chat messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationFromChat {}

/// Reports block types inside named cuboids relative to the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationFromGrid {
    #[serde(rename = "Grid", default)]
    pub grids: Vec<GridDefinition>,
}

/// One named observation cuboid, relative to the agent's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDefinition {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "min")]
    pub min: GridCorner,
    #[serde(rename = "max")]
    pub max: GridCorner,
}

/// Inclusive corner of an observation grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCorner {
    #[serde(rename = "@x")]
    pub x: i32,
    #[serde(rename = "@y")]
    pub y: i32,
    #[serde(rename = "@z")]
    pub z: i32,
}

/// Reports the Euclidean distance to each named point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationFromDistance {
    #[serde(rename = "Marker", default)]
    pub points: Vec<NamedPoint>,
}

/// A labelled point; the observation is reported as `distanceFrom<name>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPoint {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@x")]
    pub x: f64,
    #[serde(rename = "@y")]
    pub y: f64,
    #[serde(rename = "@z")]
    pub z: f64,
}

/// Requests image frames from the agent's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoProducer {
    /// When true, frames carry a depth channel (RGBD)
    #[serde(rename = "@want_depth", default)]
    pub want_depth: bool,

    #[serde(rename = "Width")]
    pub width: i32,

    #[serde(rename = "Height")]
    pub height: i32,
}

impl VideoProducer {
    /// Channels per pixel: 3 for RGB, 4 for RGBD
    #[inline]
    #[must_use]
    pub fn channels(&self) -> i32 {
        if self.want_depth {
            4
        } else {
            3
        }
    }
}

/// Sends a reward when the agent comes within tolerance of a marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardForReachingPosition {
    #[serde(rename = "Marker", default)]
    pub markers: Vec<PositionMarker>,
}

/// Reward marker: position, reward value, Euclidean tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionMarker {
    #[serde(rename = "@x")]
    pub x: f64,
    #[serde(rename = "@y")]
    pub y: f64,
    #[serde(rename = "@z")]
    pub z: f64,
    #[serde(rename = "@reward")]
    pub reward: f32,
    #[serde(rename = "@tolerance")]
    pub tolerance: f32,
}

/// Ends the mission when the agent comes within tolerance of a marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentQuitFromReachingPosition {
    #[serde(rename = "Marker", default)]
    pub markers: Vec<QuitMarker>,
}

/// Quit marker: position and Euclidean tolerance, no reward attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuitMarker {
    #[serde(rename = "@x")]
    pub x: f64,
    #[serde(rename = "@y")]
    pub y: f64,
    #[serde(rename = "@z")]
    pub z: f64,
    #[serde(rename = "@tolerance")]
    pub tolerance: f32,
}
