//! World drawing commands
//!
//! A [`DrawingDecorator`] holds an ordered list of draw objects. Order is
//! meaningful: later objects overwrite earlier ones where they overlap, so
//! the vector must keep insertion order through serialization.

use serde::{Deserialize, Serialize};

/// Ordered list of objects drawn into the world at mission start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawingDecorator {
    /// Draw objects in application order
    #[serde(rename = "$value", default)]
    pub objects: Vec<DrawObject>,
}

impl DrawingDecorator {
    /// Append a draw object, preserving draw order
    #[inline]
    pub fn push(&mut self, object: DrawObject) {
        self.objects.push(object);
    }
}

/// A single drawing primitive.
///
/// Variant names match the schema element names exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawObject {
    /// Single block at a position
    DrawBlock {
        #[serde(rename = "@x")]
        x: i32,
        #[serde(rename = "@y")]
        y: i32,
        #[serde(rename = "@z")]
        z: i32,
        #[serde(rename = "@type")]
        block_type: String,
    },

    /// Solid axis-aligned cuboid between two corners (inclusive)
    DrawCuboid {
        #[serde(rename = "@x1")]
        x1: i32,
        #[serde(rename = "@y1")]
        y1: i32,
        #[serde(rename = "@z1")]
        z1: i32,
        #[serde(rename = "@x2")]
        x2: i32,
        #[serde(rename = "@y2")]
        y2: i32,
        #[serde(rename = "@z2")]
        z2: i32,
        #[serde(rename = "@type")]
        block_type: String,
    },

    /// Dropped item at a position
    DrawItem {
        #[serde(rename = "@x")]
        x: i32,
        #[serde(rename = "@y")]
        y: i32,
        #[serde(rename = "@z")]
        z: i32,
        #[serde(rename = "@type")]
        item_type: String,
    },

    /// Solid sphere of blocks around a centre
    DrawSphere {
        #[serde(rename = "@x")]
        x: i32,
        #[serde(rename = "@y")]
        y: i32,
        #[serde(rename = "@z")]
        z: i32,
        #[serde(rename = "@radius")]
        radius: i32,
        #[serde(rename = "@type")]
        block_type: String,
    },

    /// Line of blocks between two endpoints (inclusive)
    DrawLine {
        #[serde(rename = "@x1")]
        x1: i32,
        #[serde(rename = "@y1")]
        y1: i32,
        #[serde(rename = "@z1")]
        z1: i32,
        #[serde(rename = "@x2")]
        x2: i32,
        #[serde(rename = "@y2")]
        y2: i32,
        #[serde(rename = "@z2")]
        z2: i32,
        #[serde(rename = "@type")]
        block_type: String,
    },
}
