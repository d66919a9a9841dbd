//! Command handler elements
//!
//! Each agent may carry at most one command handler per kind (continuous,
//! discrete, absolute, inventory, chat). A handler without a modifier list
//! accepts every verb; with a list, the list kind decides whether it is an
//! allow-list or a deny-list. One list per handler, so allow and deny can
//! never coexist.

use serde::{Deserialize, Serialize};

/// Whether a [`ModifierList`] allows or denies the verbs it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Only the listed verbs are accepted
    #[serde(rename = "allow-list")]
    AllowList,
    /// Every verb except the listed ones is accepted
    #[serde(rename = "deny-list")]
    DenyList,
}

/// Allow-list or deny-list of command verbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierList {
    /// List polarity
    #[serde(rename = "@type")]
    pub kind: ModifierKind,

    /// The verbs on the list
    #[serde(rename = "command", default)]
    pub commands: Vec<String>,
}

impl ModifierList {
    /// Empty list of the given polarity
    #[inline]
    #[must_use]
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            kind,
            commands: Vec::new(),
        }
    }

    /// Add a verb unless it is already listed
    pub fn add_command(&mut self, verb: &str) {
        if !self.commands.iter().any(|c| c == verb) {
            self.commands.push(verb.to_string());
        }
    }
}

/// A command handler element, shared by every list-bearing handler kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandHandler {
    /// Optional allow/deny list; absent means all verbs accepted
    #[serde(rename = "ModifierList", skip_serializing_if = "Option::is_none")]
    pub modifier_list: Option<ModifierList>,
}

impl CommandHandler {
    /// Handler that accepts every verb
    #[inline]
    #[must_use]
    pub fn accept_all() -> Self {
        Self {
            modifier_list: None,
        }
    }

    /// Ensure the handler carries a list of the given polarity, replacing a
    /// list of the opposite polarity, then add the verb to it.
    pub fn put_verb_on_list(&mut self, verb: &str, kind: ModifierKind) {
        let needs_reset = self
            .modifier_list
            .as_ref()
            .map_or(true, |list| list.kind != kind);
        if needs_reset {
            self.modifier_list = Some(ModifierList::new(kind));
        }
        if let Some(list) = self.modifier_list.as_mut() {
            list.add_command(verb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_added_once() {
        let mut handler = CommandHandler::accept_all();
        handler.put_verb_on_list("move", ModifierKind::AllowList);
        handler.put_verb_on_list("move", ModifierKind::AllowList);
        handler.put_verb_on_list("turn", ModifierKind::AllowList);

        let list = handler.modifier_list.as_ref().unwrap();
        assert_eq!(list.commands, vec!["move", "turn"]);
    }

    #[test]
    fn allow_replaces_deny() {
        let mut handler = CommandHandler {
            modifier_list: Some(ModifierList {
                kind: ModifierKind::DenyList,
                commands: vec!["jump".to_string()],
            }),
        };
        handler.put_verb_on_list("move", ModifierKind::AllowList);

        let list = handler.modifier_list.as_ref().unwrap();
        assert_eq!(list.kind, ModifierKind::AllowList);
        assert_eq!(list.commands, vec!["move"]);
    }

    #[test]
    fn modifier_list_round_trips() {
        let mut list = ModifierList::new(ModifierKind::DenyList);
        list.add_command("attack");
        let handler = CommandHandler {
            modifier_list: Some(list),
        };
        let xml = quick_xml::se::to_string_with_root("ChatCommands", &handler).unwrap();
        assert_eq!(
            xml,
            "<ChatCommands><ModifierList type=\"deny-list\"><command>attack</command></ModifierList></ChatCommands>"
        );
    }
}
