//! Request/response bodies for the chat and community endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON keys exactly (including the
//! Portuguese `nome`/`cor` on community creation) so serde output can be
//! posted as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body for `POST /chat/delete_conversations/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConversationsRequest {
    pub conversation_ids: Vec<String>,
}

/// Body for `POST /chat/create_group/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub members: Vec<String>,
    pub goals: Vec<String>,
}

/// Body for `POST /criar-comunidade/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommunityRequest {
    pub nome: String,
    /// Canonical `#rrggbb` card color.
    pub cor: String,
}

/// Response from `POST /criar-comunidade/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommunityResponse {
    pub status: String,
}

impl CreateCommunityResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
