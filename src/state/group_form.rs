//! Create-group modal draft.
//!
//! The modal lists every conversation partner as a checkbox and a growable
//! list of goal inputs. Validation happens locally before anything is sent.

#[cfg(test)]
#[path = "group_form_test.rs"]
mod group_form_test;

use std::collections::BTreeSet;

use crate::net::types::CreateGroupRequest;
use crate::state::conversations::ConversationEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GroupFormError {
    #[error("group name is required")]
    MissingName,
}

impl GroupFormError {
    /// User-facing alert text.
    pub fn alert_message(self) -> &'static str {
        match self {
            Self::MissingName => "Digite um nome para o grupo.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    candidates: Vec<ConversationEntry>,
    members: BTreeSet<String>,
    goals: Vec<String>,
}

impl GroupDraft {
    /// Start a fresh draft offering `candidates` as members.
    pub fn reset(&mut self, candidates: Vec<ConversationEntry>) {
        *self = Self { candidates, ..Self::default() };
    }

    pub fn candidates(&self) -> &[ConversationEntry] {
        &self.candidates
    }

    pub fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    /// Check or uncheck a member. Returns whether the member is now checked.
    pub fn toggle_member(&mut self, id: &str) -> bool {
        if self.members.remove(id) {
            false
        } else {
            self.members.insert(id.to_owned());
            true
        }
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Append an empty goal row and return its index.
    pub fn add_goal(&mut self) -> usize {
        self.goals.push(String::new());
        self.goals.len() - 1
    }

    /// Update goal row `index`. Out-of-range indices are ignored.
    pub fn set_goal(&mut self, index: usize, value: &str) {
        if let Some(goal) = self.goals.get_mut(index) {
            value.clone_into(goal);
        }
    }

    /// Remove goal row `index`. Out-of-range indices are ignored.
    pub fn remove_goal(&mut self, index: usize) {
        if index < self.goals.len() {
            self.goals.remove(index);
        }
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// Build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`GroupFormError::MissingName`] when the trimmed name is empty.
    pub fn to_request(&self) -> Result<CreateGroupRequest, GroupFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(GroupFormError::MissingName);
        }
        let goals = self
            .goals
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(CreateGroupRequest {
            name: name.to_owned(),
            members: self.members.iter().cloned().collect(),
            goals,
        })
    }
}
