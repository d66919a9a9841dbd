//! The mission document root
//!
//! [`Mission`] owns the whole tree and is the only place XML enters or
//! leaves the crate. Parsing is lenient by default; `validate = true` runs
//! the structural checks the external schema would impose.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::AgentSection;
use crate::error::SchemaError;
use crate::server::ServerSection;
use crate::XML_NAMESPACE;

fn default_namespace() -> String {
    XML_NAMESPACE.to_string()
}

/// Root element of a mission document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    #[serde(rename = "@xmlns", default = "default_namespace")]
    pub xmlns: String,

    #[serde(rename = "About")]
    pub about: About,

    #[serde(rename = "ServerSection")]
    pub server: ServerSection,

    #[serde(rename = "AgentSection", default)]
    pub agents: Vec<AgentSection>,
}

/// Human-readable mission description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(rename = "Summary", default)]
    pub summary: String,
}

impl Default for Mission {
    /// Minimal valid mission: flat world, one survival-mode agent with no
    /// handlers, no quit conditions.
    ///
    /// Builders layer their own defaults on top; see the `mission-spec`
    /// crate for the full default mission.
    fn default() -> Self {
        Self {
            xmlns: default_namespace(),
            about: About::default(),
            server: ServerSection {
                initial_conditions: None,
                handlers: crate::server::ServerHandlers {
                    flat_world_generator: Some(crate::server::FlatWorldGenerator::default()),
                    ..crate::server::ServerHandlers::default()
                },
            },
            agents: vec![AgentSection::named("Agent0")],
        }
    }
}

impl Mission {
    /// Serialize the document to an XML string with a leading declaration.
    ///
    /// `pretty` adds two-space indentation and newlines.
    ///
    /// # Errors
    /// Returns [`SchemaError::Serialize`] if the tree cannot be written.
    pub fn to_xml(&self, pretty: bool) -> Result<String, SchemaError> {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        if pretty {
            serializer.indent(' ', 2);
        }
        self.serialize(serializer)?;

        debug!(pretty, bytes = body.len(), "serialized mission document");
        let separator = if pretty { "\n" } else { "" };
        Ok(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>{separator}{body}"
        ))
    }

    /// Parse a mission document from XML.
    ///
    /// With `validate` set, the document namespace must match
    /// [`XML_NAMESPACE`], every element must be one the schema defines for
    /// its position (serde alone would silently drop a typo'd handler), and
    /// the structural checks of [`Mission::validate`] run after parsing.
    /// Without it, anything serde can make sense of is accepted.
    ///
    /// # Errors
    /// Returns [`SchemaError::Parse`] on malformed XML, or any validation
    /// error when `validate` is set.
    pub fn from_xml(xml: &str, validate: bool) -> Result<Self, SchemaError> {
        let mission: Self = quick_xml::de::from_str(xml)?;
        debug!(
            validate,
            agents = mission.agents.len(),
            "parsed mission document"
        );

        if validate {
            if mission.xmlns != XML_NAMESPACE {
                debug!(found = %mission.xmlns, "rejecting mission: wrong namespace");
                return Err(SchemaError::WrongNamespace {
                    found: mission.xmlns,
                });
            }
            crate::strict::verify_known_elements(xml)?;
            mission.validate()?;
        }
        Ok(mission)
    }

    /// Structural checks the external schema imposes:
    ///
    /// - at least one agent section
    /// - exactly one world generator
    /// - positive video dimensions
    /// - unique observation grid names per agent
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.agents.is_empty() {
            debug!("rejecting mission: no agent section");
            return Err(SchemaError::NoAgents);
        }

        let generators = usize::from(self.server.handlers.flat_world_generator.is_some())
            + usize::from(self.server.handlers.default_world_generator.is_some());
        if generators != 1 {
            debug!(found = generators, "rejecting mission: world generator count");
            return Err(SchemaError::WorldGeneratorCount { found: generators });
        }

        for (role, agent) in self.agents.iter().enumerate() {
            if let Some(video) = &agent.handlers.video_producer {
                if video.width <= 0 || video.height <= 0 {
                    debug!(
                        role,
                        width = video.width,
                        height = video.height,
                        "rejecting mission: invalid video size"
                    );
                    return Err(SchemaError::InvalidVideoSize {
                        role,
                        width: video.width,
                        height: video.height,
                    });
                }
            }
            if let Some(grid) = &agent.handlers.observe_grid {
                let mut seen: Vec<&str> = Vec::with_capacity(grid.grids.len());
                for definition in &grid.grids {
                    if seen.contains(&definition.name.as_str()) {
                        debug!(role, name = %definition.name, "rejecting mission: duplicate grid name");
                        return Err(SchemaError::DuplicateGridName {
                            name: definition.name.clone(),
                        });
                    }
                    seen.push(&definition.name);
                }
            }
        }
        Ok(())
    }
}
