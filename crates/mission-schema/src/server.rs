//! Server-side mission settings
//!
//! World generation, initial conditions (time of day), drawing, and the
//! time-limit quit handler.

use serde::{Deserialize, Serialize};

use crate::drawing::DrawingDecorator;

/// Server half of a mission document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(
        rename = "ServerInitialConditions",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_conditions: Option<ServerInitialConditions>,

    #[serde(rename = "ServerHandlers")]
    pub handlers: ServerHandlers,
}

/// World state at mission start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerInitialConditions {
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,
}

/// Time of day, in world ticks (thousandths of an hour since dawn).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Time {
    /// 0 = dawn, 6000 = noon, 12000 = sunset, 18000 = midnight
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i32>,

    /// When false the sun stays fixed for the whole mission
    #[serde(
        rename = "AllowPassageOfTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_passage_of_time: Option<bool>,
}

/// World generator, decorators and server-side quit conditions.
///
/// Exactly one world generator must be present; [`crate::Mission::validate`]
/// enforces it since the element layout cannot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerHandlers {
    #[serde(
        rename = "FlatWorldGenerator",
        skip_serializing_if = "Option::is_none"
    )]
    pub flat_world_generator: Option<FlatWorldGenerator>,

    #[serde(
        rename = "DefaultWorldGenerator",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_world_generator: Option<DefaultWorldGenerator>,

    #[serde(rename = "DrawingDecorator", skip_serializing_if = "Option::is_none")]
    pub drawing_decorator: Option<DrawingDecorator>,

    #[serde(
        rename = "ServerQuitFromTimeUp",
        skip_serializing_if = "Option::is_none"
    )]
    pub quit_from_time_up: Option<ServerQuitFromTimeUp>,
}

impl ServerHandlers {
    /// Drawing decorator, created on first use.
    ///
    /// Draw calls funnel through here so the decorator element only appears
    /// once something has been drawn.
    pub fn drawing_decorator_mut(&mut self) -> &mut DrawingDecorator {
        self.drawing_decorator
            .get_or_insert_with(DrawingDecorator::default)
    }
}

/// Superflat world with a layer recipe string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatWorldGenerator {
    /// Layer recipe in the generator's own mini-format
    #[serde(
        rename = "@generatorString",
        skip_serializing_if = "Option::is_none"
    )]
    pub generator_string: Option<String>,
}

impl FlatWorldGenerator {
    /// Three stone layers under grass, the standard flat starting world
    pub const DEFAULT_GENERATOR_STRING: &'static str = "3;7,220*1,5*3,2;3;,biome_1";
}

impl Default for FlatWorldGenerator {
    fn default() -> Self {
        Self {
            generator_string: Some(Self::DEFAULT_GENERATOR_STRING.to_string()),
        }
    }
}

/// Standard terrain generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultWorldGenerator {
    /// Force regeneration instead of reusing a previous world
    #[serde(rename = "@forceReset", skip_serializing_if = "Option::is_none")]
    pub force_reset: Option<bool>,
}

/// Ends the mission after a wall-clock time limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerQuitFromTimeUp {
    /// Limit in milliseconds
    #[serde(rename = "@timeLimitMs")]
    pub time_limit_ms: f32,
}
