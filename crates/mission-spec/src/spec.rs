//! The `MissionSpec` builder
//!
//! Owns one [`Mission`] tree for its whole lifetime. Mutators shape the
//! tree; getters read it back. Serialization goes through the schema crate.

use tracing::warn;

use mission_schema::{
    AgentQuitFromReachingPosition, AgentSection, CommandHandler, DefaultWorldGenerator,
    DrawObject, GameMode, GridCorner, GridDefinition, Mission, ModifierKind, NamedPoint,
    ObservationFromChat, ObservationFromDistance, ObservationFromFullInventory,
    ObservationFromGrid, ObservationFromHotBar, ObservationFromRecentCommands, Placement,
    PositionMarker, QuitMarker, ServerInitialConditions, ServerQuitFromTimeUp, Time,
    VideoProducer,
};

use crate::error::MissionSpecError;

/// Block coordinates are integer corners; agents and markers live at block
/// centres, so horizontal coordinates get this offset when converted.
const BLOCK_CENTRE_OFFSET: f64 = 0.5;

/// Tolerance for position markers created from block coordinates.
const DEFAULT_MARKER_TOLERANCE: f32 = 0.5;

/// Default mission length in seconds.
const DEFAULT_TIME_LIMIT_SECONDS: f32 = 10.0;

/// Command handler kinds that carry an allow/deny list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Velocity-style commands ("move 0.5", "turn -1")
    ContinuousMovement,
    /// Single-step commands ("movenorth", "turn 90")
    DiscreteMovement,
    /// Teleport-style commands ("tpx", "tpz")
    AbsoluteMovement,
    /// Inventory manipulation ("selectInventoryItem")
    Inventory,
}

/// Builder for a mission document.
///
/// `new()` gives a runnable mission: flat world, ten-second time limit, one
/// survival-mode agent accepting all continuous movement commands. Every
/// agent-targeting mutator edits the first agent; multi-agent missions are
/// authored as XML and loaded with [`MissionSpec::from_xml`].
#[derive(Debug, Clone, PartialEq)]
pub struct MissionSpec {
    mission: Mission,
}

impl Default for MissionSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionSpec {
    /// Mission with default parameters: a flat world with a ten-second time
    /// limit and continuous movement.
    #[must_use]
    pub fn new() -> Self {
        let mut spec = Self {
            mission: Mission::default(),
        };
        spec.time_limit_in_seconds(DEFAULT_TIME_LIMIT_SECONDS);
        spec.allow_all_commands(CommandKind::ContinuousMovement);
        spec
    }

    /// Build from existing mission XML.
    ///
    /// # Errors
    /// Returns an error when the XML is malformed, or fails the schema's
    /// structural checks while `validate` is set.
    pub fn from_xml(xml: &str, validate: bool) -> Result<Self, MissionSpecError> {
        let mission = Mission::from_xml(xml, validate)?;
        Ok(Self { mission })
    }

    /// The mission specification as an XML string.
    ///
    /// `pretty` adds indentation and newlines, for saving to a file.
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized.
    pub fn as_xml(&self, pretty: bool) -> Result<String, MissionSpecError> {
        Ok(self.mission.to_xml(pretty)?)
    }

    /// Read access to the underlying document tree.
    #[inline]
    #[must_use]
    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    /// Give up the builder and keep the document.
    #[inline]
    #[must_use]
    pub fn into_mission(self) -> Mission {
        self.mission
    }

    // -------------------- settings for the server -------------------------

    /// Short human-readable description, stored in the About section.
    pub fn set_summary(&mut self, summary: &str) {
        self.mission.about.summary = summary.to_string();
    }

    /// Time limit for the mission, in seconds.
    pub fn time_limit_in_seconds(&mut self, s: f32) {
        self.mission.server.handlers.quit_from_time_up = Some(ServerQuitFromTimeUp {
            time_limit_ms: s * 1000.0,
        });
    }

    /// Replace the default flat world with generated terrain.
    pub fn create_default_terrain(&mut self) {
        let handlers = &mut self.mission.server.handlers;
        handlers.flat_world_generator = None;
        handlers.default_world_generator = Some(DefaultWorldGenerator { force_reset: None });
    }

    /// Time of day at mission start, in world ticks (0 = dawn, 6000 = noon,
    /// 12000 = sunset, 18000 = midnight). With `allow_time_to_pass` unset
    /// the sun stays fixed.
    pub fn set_time_of_day(&mut self, t: i32, allow_time_to_pass: bool) {
        self.mission
            .server
            .initial_conditions
            .get_or_insert_with(ServerInitialConditions::default)
            .time = Some(Time {
            start_time: Some(t),
            allow_passage_of_time: Some(allow_time_to_pass),
        });
    }

    /// Draw a single block.
    pub fn draw_block(&mut self, x: i32, y: i32, z: i32, block_type: &str) {
        self.push_draw(DrawObject::DrawBlock {
            x,
            y,
            z,
            block_type: block_type.to_string(),
        });
    }

    /// Draw a solid cuboid between two corners (inclusive).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_cuboid(
        &mut self,
        x1: i32,
        y1: i32,
        z1: i32,
        x2: i32,
        y2: i32,
        z2: i32,
        block_type: &str,
    ) {
        self.push_draw(DrawObject::DrawCuboid {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
            block_type: block_type.to_string(),
        });
    }

    /// Drop an item into the world.
    pub fn draw_item(&mut self, x: i32, y: i32, z: i32, item_type: &str) {
        self.push_draw(DrawObject::DrawItem {
            x,
            y,
            z,
            item_type: item_type.to_string(),
        });
    }

    /// Draw a solid sphere of blocks around a centre.
    pub fn draw_sphere(&mut self, x: i32, y: i32, z: i32, radius: i32, block_type: &str) {
        self.push_draw(DrawObject::DrawSphere {
            x,
            y,
            z,
            radius,
            block_type: block_type.to_string(),
        });
    }

    /// Draw a line of blocks between two endpoints (inclusive).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        z1: i32,
        x2: i32,
        y2: i32,
        z2: i32,
        block_type: &str,
    ) {
        self.push_draw(DrawObject::DrawLine {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
            block_type: block_type.to_string(),
        });
    }

    // -------------------- settings for the agents -------------------------

    /// Start location for the first agent, centred on the block.
    pub fn start_at(&mut self, x: i32, y: i32, z: i32) {
        if let Some(agent) = self.first_agent_mut() {
            agent.start.placement = Some(Placement::at(
                f64::from(x) + BLOCK_CENTRE_OFFSET,
                f64::from(y),
                f64::from(z) + BLOCK_CENTRE_OFFSET,
            ));
        }
    }

    /// End the mission when the first agent reaches this block.
    ///
    /// Call repeatedly for several ending positions.
    pub fn end_at(&mut self, x: i32, y: i32, z: i32) {
        if let Some(agent) = self.first_agent_mut() {
            agent
                .handlers
                .quit_from_reaching_position
                .get_or_insert_with(AgentQuitFromReachingPosition::default)
                .markers
                .push(QuitMarker {
                    x: f64::from(x) + BLOCK_CENTRE_OFFSET,
                    y: f64::from(y),
                    z: f64::from(z) + BLOCK_CENTRE_OFFSET,
                    tolerance: DEFAULT_MARKER_TOLERANCE,
                });
        }
    }

    /// Creative mode for the first agent: flight, no damage.
    pub fn set_mode_to_creative(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.mode = GameMode::Creative;
        }
    }

    /// Spectator mode for the first agent: flight, passes through objects.
    pub fn set_mode_to_spectator(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.mode = GameMode::Spectator;
        }
    }

    /// Request RGB frames for the first agent.
    ///
    /// Width should be divisible by 4 and height by 2 for the encoder.
    pub fn request_video(&mut self, width: i32, height: i32) {
        self.set_video(width, height, false);
    }

    /// Request RGBD frames (depth channel included) for the first agent.
    pub fn request_video_with_depth(&mut self, width: i32, height: i32) {
        self.set_video(width, height, true);
    }

    /// Reward the first agent when it comes within `tolerance` (Euclidean)
    /// of the block at (x, y, z).
    pub fn reward_for_reaching_position(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        amount: f32,
        tolerance: f32,
    ) {
        if let Some(agent) = self.first_agent_mut() {
            agent
                .handlers
                .reward_for_reaching_position
                .get_or_insert_with(Default::default)
                .markers
                .push(PositionMarker {
                    x: f64::from(x) + BLOCK_CENTRE_OFFSET,
                    y: f64::from(y),
                    z: f64::from(z) + BLOCK_CENTRE_OFFSET,
                    reward: amount,
                    tolerance,
                });
        }
    }

    /// Include commands acted on since the last timestep in the
    /// observations, under `CommandsSinceLastObservation`.
    pub fn observe_recent_commands(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.handlers.observe_recent_commands = Some(ObservationFromRecentCommands {});
        }
    }

    /// Include the hot-bar contents in the observations, under
    /// `Hotbar_0_size`, `Hotbar_0_item`, and so on.
    pub fn observe_hot_bar(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.handlers.observe_hot_bar = Some(ObservationFromHotBar {});
        }
    }

    /// Include the full inventory in the observations, under
    /// `Inventory_0_size`, `Inventory_0_item`, and so on.
    pub fn observe_full_inventory(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.handlers.observe_full_inventory = Some(ObservationFromFullInventory {});
        }
    }

    /// Observe block types inside a cuboid relative to the agent, reported
    /// as a flat array under `name`.
    #[allow(clippy::too_many_arguments)]
    pub fn observe_grid(
        &mut self,
        x1: i32,
        y1: i32,
        z1: i32,
        x2: i32,
        y2: i32,
        z2: i32,
        name: &str,
    ) {
        if let Some(agent) = self.first_agent_mut() {
            agent
                .handlers
                .observe_grid
                .get_or_insert_with(ObservationFromGrid::default)
                .grids
                .push(GridDefinition {
                    name: name.to_string(),
                    min: GridCorner {
                        x: x1,
                        y: y1,
                        z: z1,
                    },
                    max: GridCorner {
                        x: x2,
                        y: y2,
                        z: z2,
                    },
                });
        }
    }

    /// Observe the Euclidean distance to a block, reported as
    /// `distanceFrom<name>`.
    pub fn observe_distance(&mut self, x: i32, y: i32, z: i32, name: &str) {
        if let Some(agent) = self.first_agent_mut() {
            agent
                .handlers
                .observe_distance
                .get_or_insert_with(ObservationFromDistance::default)
                .points
                .push(NamedPoint {
                    name: name.to_string(),
                    x: f64::from(x) + BLOCK_CENTRE_OFFSET,
                    y: f64::from(y),
                    z: f64::from(z) + BLOCK_CENTRE_OFFSET,
                });
        }
    }

    /// Include chat messages in the observations.
    pub fn observe_chat(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.handlers.observe_chat = Some(ObservationFromChat {});
        }
    }

    // -------------------- command handlers --------------------------------

    /// Remove every command handler from the first agent. Combine with the
    /// `allow_*` methods to add back exactly the handlers you want.
    pub fn remove_all_command_handlers(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.handlers.clear_command_handlers();
        }
    }

    /// Install a handler of the given kind with neither an allow-list nor a
    /// deny-list, so every verb of that kind is accepted.
    pub fn allow_all_commands(&mut self, kind: CommandKind) {
        if let Some(agent) = self.first_agent_mut() {
            *Self::handler_slot(&mut agent.handlers, kind) = Some(CommandHandler::accept_all());
        }
    }

    /// Put `verb` on the allow-list of the given handler kind.
    ///
    /// Installs the handler if absent and replaces any deny-list with a
    /// fresh allow-list. Once an allow-list exists, only listed verbs are
    /// accepted.
    pub fn allow_command(&mut self, kind: CommandKind, verb: &str) {
        if let Some(agent) = self.first_agent_mut() {
            Self::handler_slot(&mut agent.handlers, kind)
                .get_or_insert_with(CommandHandler::accept_all)
                .put_verb_on_list(verb, ModifierKind::AllowList);
        }
    }

    /// Accept all continuous movement commands.
    pub fn allow_all_continuous_movement_commands(&mut self) {
        self.allow_all_commands(CommandKind::ContinuousMovement);
    }

    /// Allow a continuous movement verb, e.g. `"move"`.
    pub fn allow_continuous_movement_command(&mut self, verb: &str) {
        self.allow_command(CommandKind::ContinuousMovement, verb);
    }

    /// Accept all discrete movement commands.
    pub fn allow_all_discrete_movement_commands(&mut self) {
        self.allow_all_commands(CommandKind::DiscreteMovement);
    }

    /// Allow a discrete movement verb, e.g. `"movenorth"`.
    pub fn allow_discrete_movement_command(&mut self, verb: &str) {
        self.allow_command(CommandKind::DiscreteMovement, verb);
    }

    /// Accept all absolute movement commands.
    pub fn allow_all_absolute_movement_commands(&mut self) {
        self.allow_all_commands(CommandKind::AbsoluteMovement);
    }

    /// Allow an absolute movement verb, e.g. `"tpx"`.
    pub fn allow_absolute_movement_command(&mut self, verb: &str) {
        self.allow_command(CommandKind::AbsoluteMovement, verb);
    }

    /// Accept all inventory commands.
    pub fn allow_all_inventory_commands(&mut self) {
        self.allow_all_commands(CommandKind::Inventory);
    }

    /// Allow an inventory verb, e.g. `"selectInventoryItem"`.
    pub fn allow_inventory_command(&mut self, verb: &str) {
        self.allow_command(CommandKind::Inventory, verb);
    }

    /// Accept all chat commands. Chat has no per-verb lists.
    pub fn allow_all_chat_commands(&mut self) {
        if let Some(agent) = self.first_agent_mut() {
            agent.handlers.chat_commands = Some(CommandHandler::accept_all());
        }
    }

    // ------------------------- information --------------------------------

    /// Number of agents involved in this mission.
    #[must_use]
    pub fn number_of_agents(&self) -> usize {
        self.mission.agents.len()
    }

    /// Whether video has been requested for the agent with this zero-based
    /// role. Out-of-range roles report `false`.
    #[must_use]
    pub fn is_video_requested(&self, role: usize) -> bool {
        self.mission
            .agents
            .get(role)
            .map_or(false, |agent| agent.handlers.video_producer.is_some())
    }

    /// Width in pixels of the requested video for this role.
    ///
    /// # Errors
    /// Fails when the role is out of range or has no video requested.
    pub fn video_width(&self, role: usize) -> Result<i32, MissionSpecError> {
        self.video(role).map(|v| v.width)
    }

    /// Height in pixels of the requested video for this role.
    ///
    /// # Errors
    /// Fails when the role is out of range or has no video requested.
    pub fn video_height(&self, role: usize) -> Result<i32, MissionSpecError> {
        self.video(role).map(|v| v.height)
    }

    /// Channels in the requested video for this role: 3 for RGB, 4 for RGBD.
    ///
    /// # Errors
    /// Fails when the role is out of range or has no video requested.
    pub fn video_channels(&self, role: usize) -> Result<i32, MissionSpecError> {
        self.video(role).map(VideoProducer::channels)
    }

    // ------------------------- internals -----------------------------------

    fn push_draw(&mut self, object: DrawObject) {
        self.mission
            .server
            .handlers
            .drawing_decorator_mut()
            .push(object);
    }

    fn set_video(&mut self, width: i32, height: i32, want_depth: bool) {
        if let Some(agent) = self.first_agent_mut() {
            agent.handlers.video_producer = Some(VideoProducer {
                want_depth,
                width,
                height,
            });
        }
    }

    /// First agent, if any. A zero-agent tree can only come from a lenient
    /// `from_xml`; mutators are no-ops on it rather than panicking.
    fn first_agent_mut(&mut self) -> Option<&mut AgentSection> {
        let agent = self.mission.agents.first_mut();
        if agent.is_none() {
            warn!("mission has no agent section, mutator ignored");
        }
        agent
    }

    fn video(&self, role: usize) -> Result<&VideoProducer, MissionSpecError> {
        let agents = self.mission.agents.len();
        let agent = self
            .mission
            .agents
            .get(role)
            .ok_or(MissionSpecError::NoSuchAgent { role, agents })?;
        agent
            .handlers
            .video_producer
            .as_ref()
            .ok_or(MissionSpecError::VideoNotRequested { role })
    }

    fn handler_slot(
        handlers: &mut mission_schema::AgentHandlers,
        kind: CommandKind,
    ) -> &mut Option<CommandHandler> {
        match kind {
            CommandKind::ContinuousMovement => &mut handlers.continuous_movement_commands,
            CommandKind::DiscreteMovement => &mut handlers.discrete_movement_commands,
            CommandKind::AbsoluteMovement => &mut handlers.absolute_movement_commands,
            CommandKind::Inventory => &mut handlers.inventory_commands,
        }
    }
}
