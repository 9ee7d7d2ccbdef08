//! Page Magic realtime channel.
//!
//! One editing session per document: a tokio task (the session actor) owns
//! the canonical UI tree and drains a mailbox of client requests. Mutations
//! are serialized by the mailbox: applied to the canonical tree first,
//! then broadcast to every subscriber except the sender. Preview requests
//! render the current tree and reply to the requester only. Clients hold
//! copies; the canonical tree never leaves the actor except by clone.

pub mod message;
pub mod session;

pub use message::{ClientMessage, NodePatch, ServerMessage};
pub use session::{DocumentSession, SessionError, SessionHandle, SessionResult};
