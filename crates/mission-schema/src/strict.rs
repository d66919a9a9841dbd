//! Strict element checking
//!
//! Serde drops elements it has no field for, so a lenient parse cannot tell
//! a typo'd handler from an omitted one. Validating parses walk the raw
//! event stream first and reject any element the schema does not define for
//! its parent, the way the external schema validator would.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::SchemaError;

/// Elements the schema allows directly under `parent`.
///
/// `None` means the parent itself is not a schema element; since the walk
/// rejects unknown elements on entry, it never descends into one.
fn allowed_children(parent: &str) -> Option<&'static [&'static str]> {
    Some(match parent {
        "Mission" => &["About", "ServerSection", "AgentSection"],
        "About" => &["Summary"],
        "ServerSection" => &["ServerInitialConditions", "ServerHandlers"],
        "ServerInitialConditions" => &["Time"],
        "Time" => &["StartTime", "AllowPassageOfTime"],
        "ServerHandlers" => &[
            "FlatWorldGenerator",
            "DefaultWorldGenerator",
            "DrawingDecorator",
            "ServerQuitFromTimeUp",
        ],
        "DrawingDecorator" => &["DrawBlock", "DrawCuboid", "DrawItem", "DrawSphere", "DrawLine"],
        "AgentSection" => &["Name", "AgentStart", "AgentHandlers"],
        "AgentStart" => &["Placement"],
        "AgentHandlers" => &[
            "ObservationFromRecentCommands",
            "ObservationFromHotBar",
            "ObservationFromFullInventory",
            "ObservationFromGrid",
            "ObservationFromDistance",
            "ObservationFromChat",
            "VideoProducer",
            "RewardForReachingPosition",
            "AgentQuitFromReachingPosition",
            "ContinuousMovementCommands",
            "DiscreteMovementCommands",
            "AbsoluteMovementCommands",
            "InventoryCommands",
            "ChatCommands",
        ],
        "ObservationFromGrid" => &["Grid"],
        "Grid" => &["min", "max"],
        "ObservationFromDistance" | "RewardForReachingPosition" | "AgentQuitFromReachingPosition" => {
            &["Marker"]
        }
        "VideoProducer" => &["Width", "Height"],
        "ContinuousMovementCommands"
        | "DiscreteMovementCommands"
        | "AbsoluteMovementCommands"
        | "InventoryCommands"
        | "ChatCommands" => &["ModifierList"],
        "ModifierList" => &["command"],
        // Leaf elements: text or attributes only.
        "Summary" | "StartTime" | "AllowPassageOfTime" | "FlatWorldGenerator"
        | "DefaultWorldGenerator" | "ServerQuitFromTimeUp" | "DrawBlock" | "DrawCuboid"
        | "DrawItem" | "DrawSphere" | "DrawLine" | "Name" | "Placement"
        | "ObservationFromRecentCommands" | "ObservationFromHotBar"
        | "ObservationFromFullInventory" | "ObservationFromChat" | "min" | "max" | "Marker"
        | "Width" | "Height" | "command" => &[],
        _ => return None,
    })
}

/// Walk the document and reject the first element the schema does not
/// define at its position.
pub(crate) fn verify_known_elements(xml: &str) -> Result<(), SchemaError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = check_element(&stack, e.local_name().as_ref())?;
                stack.push(name);
            }
            // Self-closing elements have no children, so they stay off the stack.
            Event::Empty(e) => {
                check_element(&stack, e.local_name().as_ref())?;
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

fn check_element(stack: &[String], local_name: &[u8]) -> Result<String, SchemaError> {
    let name = String::from_utf8_lossy(local_name).into_owned();
    let ok = match stack.last() {
        None => name == "Mission",
        Some(parent) => allowed_children(parent)
            .map_or(false, |children| children.contains(&name.as_str())),
    };
    if ok {
        Ok(name)
    } else {
        Err(SchemaError::UnknownElement {
            element: name,
            parent: stack.last().cloned().unwrap_or_default(),
        })
    }
}
