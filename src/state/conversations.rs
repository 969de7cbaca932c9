//! Conversation list shown in the chat sidebar.

#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

use std::collections::BTreeSet;

/// Label used when a conversation row has no name.
pub const DEFAULT_CONVERSATION_NAME: &str = "Usuário";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationEntry {
    pub id: String,
    pub name: String,
}

impl ConversationEntry {
    pub fn new(id: impl Into<String>, name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_CONVERSATION_NAME);
        Self { id: id.into(), name: name.to_owned() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationList {
    entries: Vec<ConversationEntry>,
}

impl ConversationList {
    pub fn load(&mut self, entries: Vec<ConversationEntry>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Drop rows whose ids were deleted. Returns how many were removed.
    pub fn remove_ids<S: AsRef<str>>(&mut self, ids: &[S]) -> usize {
        let doomed: BTreeSet<&str> = ids.iter().map(S::as_ref).collect();
        let before = self.entries.len();
        self.entries.retain(|e| !doomed.contains(e.id.as_str()));
        before - self.entries.len()
    }

    /// Every conversation partner, offered as a member when creating a group.
    pub fn member_candidates(&self) -> Vec<ConversationEntry> {
        self.entries.clone()
    }
}
