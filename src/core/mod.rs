//! Core chat turn handling

mod chat;

pub use chat::{ChatEngine, ChatError, ChatTurnRequest, ChatTurnResponse};
