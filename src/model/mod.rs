//! Transcript model types for chat export.
//!
//! This module defines the intermediate representation that bridges chat
//! session data and the export renderers. Messages carry a restricted
//! Markdown dialect in their body text; the parser decomposes it into
//! [`Token`] streams consumed by the page-flow layout engine.

mod message;
mod token;

pub use message::{Citation, Message, Sender, Transcript};
pub use token::{Token, TokenKind};
