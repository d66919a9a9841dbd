//! Mission builder facade
//!
//! [`MissionSpec`] constructs and edits a mission document without exposing
//! the underlying schema tree. Every mutator targets either the server
//! section or the first agent; multi-agent missions are authored as XML and
//! loaded with [`MissionSpec::from_xml`].
//!
//! # Example
//!
//! ```rust
//! use mission_spec::MissionSpec;
//!
//! let mut mission = MissionSpec::new();
//! mission.time_limit_in_seconds(30.0);
//! mission.draw_block(0, 45, 0, "gold_block");
//! mission.start_at(-2, 46, -2);
//! mission.request_video(320, 240);
//!
//! assert!(mission.is_video_requested(0));
//! let xml = mission.as_xml(true).unwrap();
//! assert!(xml.contains("gold_block"));
//! ```

#![warn(unreachable_pub)]

mod error;
mod spec;

pub use error::MissionSpecError;
pub use spec::{CommandKind, MissionSpec};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
