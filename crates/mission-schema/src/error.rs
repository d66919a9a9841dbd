//! Error types for the schema binding
//!
//! Parse and serialize failures come straight from quick-xml; structural
//! violations get their own variants so callers can tell what broke.

/// Errors raised while parsing, serializing or validating a mission document.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// XML deserialization failed
    #[error("xml parse error: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// XML serialization failed
    #[error("xml serialize error: {0}")]
    Serialize(#[from] quick_xml::SeError),

    /// Low-level XML reading failed during strict element checking
    #[error("xml read error: {0}")]
    Read(#[from] quick_xml::Error),

    /// Strict parsing found an element the schema does not define
    #[error("unknown element <{element}> under <{parent}>")]
    UnknownElement {
        /// The element the schema does not define here
        element: String,
        /// Its parent element; empty at document root
        parent: String,
    },

    /// Document declares a namespace other than the mission namespace
    #[error("unexpected xml namespace: {found}")]
    WrongNamespace {
        /// The namespace the document declared
        found: String,
    },

    /// Document has no agent section
    #[error("mission has no agent section")]
    NoAgents,

    /// Server handlers must carry exactly one world generator
    #[error("expected exactly one world generator, found {found}")]
    WorldGeneratorCount {
        /// How many generators the document carried
        found: usize,
    },

    /// Video dimensions must be positive
    #[error("invalid video dimensions {width}x{height} for agent {role}")]
    InvalidVideoSize {
        /// Zero-based agent index
        role: usize,
        /// Requested width in pixels
        width: i32,
        /// Requested height in pixels
        height: i32,
    },

    /// Two observation grids share a name
    #[error("duplicate observation grid name: {name}")]
    DuplicateGridName {
        /// The offending grid name
        name: String,
    },
}
