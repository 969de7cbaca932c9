//! Community listing: search filter, hover details, join confirmation and
//! the admin "new community" form.
//!
//! DESIGN
//! ======
//! Cards keep their raw color strings; the readable text color is derived
//! on demand from the shared `ContrastEngine`.

#[cfg(test)]
#[path = "communities_test.rs"]
mod communities_test;

use crate::net::types::CreateCommunityRequest;
use crate::util::color::parse_hex_rgb;
use crate::util::contrast::{ContrastEngine, ContrastError, ContrastResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommunityFormError {
    #[error("community name is required")]
    MissingName,
    #[error("invalid community color: {0:?}")]
    InvalidColor(String),
}

/// One community card as rendered by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunityCard {
    pub id: String,
    pub name: String,
    pub admin: String,
    pub members: String,
    pub color: Option<String>,
}

impl CommunityCard {
    /// Text color for the card. Cards without a usable color fall back to dark text.
    pub fn text_contrast(&self, engine: &ContrastEngine) -> ContrastResult {
        match engine.decide_first(&[self.color.as_deref()]) {
            Ok(result) => result,
            Err(ContrastError::UndeterminedColor) => ContrastResult::DarkText,
            Err(e) => {
                log::warn!("community {}: {e}", self.id);
                ContrastResult::DarkText
            }
        }
    }

    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommunitiesState {
    cards: Vec<CommunityCard>,
    filter: String,
    pending_join: Option<String>,
    hovered: Option<String>,
    pub add_modal_open: bool,
}

impl CommunitiesState {
    pub fn new(cards: Vec<CommunityCard>) -> Self {
        Self { cards, ..Self::default() }
    }

    pub fn cards(&self) -> &[CommunityCard] {
        &self.cards
    }

    /// Update the search box. Matching is a case-insensitive substring test on the name.
    pub fn set_filter(&mut self, query: &str) {
        self.filter = query.to_lowercase();
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.cards.iter().any(|c| c.id == id && c.matches(&self.filter))
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &CommunityCard> {
        self.cards.iter().filter(|c| c.matches(&self.filter))
    }

    pub fn find(&self, id: &str) -> Option<&CommunityCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn hover_enter(&mut self, id: &str) {
        self.hovered = Some(id.to_owned());
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    /// `(admin, members)` for the hovered card, if any.
    pub fn hover_info(&self) -> Option<(&str, &str)> {
        let card = self.find(self.hovered.as_deref()?)?;
        Some((card.admin.as_str(), card.members.as_str()))
    }

    /// Card click: open the join confirmation. Unknown ids are ignored.
    pub fn request_join(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.pending_join = Some(id.to_owned());
        true
    }

    pub fn join_modal_open(&self) -> bool {
        self.pending_join.is_some()
    }

    /// Confirmation sentence for the pending join.
    pub fn join_prompt(&self) -> Option<String> {
        let card = self.find(self.pending_join.as_deref()?)?;
        Some(format!("Você deseja entrar na comunidade \"{}\"?", card.name))
    }

    /// Confirm: close the modal and return the id to join.
    pub fn confirm_join(&mut self) -> Option<String> {
        self.pending_join.take()
    }

    pub fn cancel_join(&mut self) {
        self.pending_join = None;
    }

    pub fn open_add(&mut self) {
        self.add_modal_open = true;
    }

    pub fn close_add(&mut self) {
        self.add_modal_open = false;
    }
}

/// Admin form for a new community.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommunityDraft {
    pub nome: String,
    pub cor: String,
}

impl CommunityDraft {
    /// Build the request body with the color normalized to `#rrggbb`.
    ///
    /// # Errors
    ///
    /// [`CommunityFormError::MissingName`] for a blank name,
    /// [`CommunityFormError::InvalidColor`] when `cor` is not a hex color.
    pub fn to_request(&self) -> Result<CreateCommunityRequest, CommunityFormError> {
        let nome = self.nome.trim();
        if nome.is_empty() {
            return Err(CommunityFormError::MissingName);
        }
        let rgb = parse_hex_rgb(&self.cor).ok_or_else(|| CommunityFormError::InvalidColor(self.cor.clone()))?;
        Ok(CreateCommunityRequest { nome: nome.to_owned(), cor: rgb.to_hex() })
    }
}
