//! Client-side interaction state.
//!
//! DESIGN
//! ======
//! State is split by concern (`selection`, `chat_menu`, `conversations`,
//! `group_form`, `communities`) so each event handler depends only on the
//! small model it mutates. Models are plain structs owned by the caller and
//! passed by reference; none of them reach into the DOM.

pub mod chat_menu;
pub mod communities;
pub mod conversations;
pub mod group_form;
pub mod selection;
