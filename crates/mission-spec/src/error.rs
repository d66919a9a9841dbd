//! Error types for the builder facade

use mission_schema::SchemaError;

/// Errors surfaced by [`crate::MissionSpec`].
#[derive(Debug, thiserror::Error)]
pub enum MissionSpecError {
    /// The underlying schema binding rejected the document
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A read-back getter was asked about an agent that does not exist
    #[error("no agent with role {role}, mission has {agents}")]
    NoSuchAgent {
        /// Zero-based agent index asked for
        role: usize,
        /// Number of agents in the mission
        agents: usize,
    },

    /// A video getter was called for an agent with no video producer
    #[error("video was not requested for agent {role}")]
    VideoNotRequested {
        /// Zero-based agent index asked for
        role: usize,
    },
}
