//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state models
//! so the interaction logic stays testable without a DOM.

pub mod color;
pub mod composer;
pub mod contrast;
pub mod csrf;
pub mod visibility;
