//! The per-document session actor.

use std::collections::BTreeMap;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use pagemagic_compiler::enrich_accessibility;
use pagemagic_emit::emit;
use pagemagic_types::{ConversionOptions, Framework, UINode};

use crate::message::{ClientMessage, NodePatch, ServerMessage};

/// Errors surfaced to callers of a [`SessionHandle`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session actor has shut down; the handle is stale.
    #[error("session closed")]
    Closed,
}

/// Session result type alias.
pub type SessionResult<T> = Result<T, SessionError>;

enum Command {
    Attach {
        client_id: String,
        sender: mpsc::UnboundedSender<ServerMessage>,
    },
    Detach {
        client_id: String,
    },
    Request {
        client_id: String,
        message: ClientMessage,
    },
    Snapshot {
        reply: oneshot::Sender<UINode>,
    },
}

/// An editing session over one document.
///
/// The actor task exclusively owns the canonical tree; the mailbox
/// serializes mutations, so one mutation is applied and broadcast before
/// the next is looked at. Dropping every handle shuts the actor down.
pub struct DocumentSession;

impl DocumentSession {
    /// Spawn the session actor for a compiled document.
    pub fn spawn(root: UINode, options: ConversionOptions) -> SessionHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let actor = SessionActor {
            root,
            options,
            revision: 0,
            subscribers: BTreeMap::new(),
        };
        tokio::spawn(actor.run(rx));
        SessionHandle { tx }
    }
}

/// A cheap, cloneable handle to a running session actor.
///
/// The actor shuts down once every handle has been dropped.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl SessionHandle {
    /// Register a client; it will receive broadcasts from other clients.
    pub fn attach(
        &self,
        client_id: impl Into<String>,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> SessionResult<()> {
        self.send(Command::Attach {
            client_id: client_id.into(),
            sender,
        })
    }

    /// Unregister a client. Pending responses to it are dropped.
    pub fn detach(&self, client_id: impl Into<String>) -> SessionResult<()> {
        self.send(Command::Detach {
            client_id: client_id.into(),
        })
    }

    /// Submit a mutation targeting `node_id` on behalf of a client.
    pub fn mutate(
        &self,
        client_id: impl Into<String>,
        node_id: impl Into<String>,
        patch: NodePatch,
    ) -> SessionResult<()> {
        self.send(Command::Request {
            client_id: client_id.into(),
            message: ClientMessage::AstUpdate {
                node_id: node_id.into(),
                patch,
            },
        })
    }

    /// Request a preview render; the result goes to the requester only.
    pub fn preview(
        &self,
        client_id: impl Into<String>,
        framework: Framework,
    ) -> SessionResult<()> {
        self.send(Command::Request {
            client_id: client_id.into(),
            message: ClientMessage::PreviewRequest { framework },
        })
    }

    /// Fetch a clone of the canonical tree.
    pub async fn snapshot(&self) -> SessionResult<UINode> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot { reply })?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    fn send(&self, command: Command) -> SessionResult<()> {
        self.tx.send(command).map_err(|_| SessionError::Closed)
    }
}

struct SessionActor {
    root: UINode,
    options: ConversionOptions,
    revision: u64,
    subscribers: BTreeMap<String, mpsc::UnboundedSender<ServerMessage>>,
}

impl SessionActor {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Command>) {
        info!(document = %self.root.id, "editing session started");
        while let Some(command) = rx.recv().await {
            match command {
                Command::Attach { client_id, sender } => {
                    debug!(%client_id, "client attached");
                    self.subscribers.insert(client_id, sender);
                }
                Command::Detach { client_id } => {
                    debug!(%client_id, "client detached");
                    self.subscribers.remove(&client_id);
                }
                Command::Request { client_id, message } => match message {
                    ClientMessage::AstUpdate { node_id, patch } => {
                        self.apply_mutation(&client_id, &node_id, &patch);
                    }
                    ClientMessage::PreviewRequest { framework } => {
                        self.render_preview(&client_id, framework);
                    }
                },
                Command::Snapshot { reply } => {
                    let _ = reply.send(self.root.clone());
                }
            }
        }
        info!(document = %self.root.id, "editing session ended");
    }

    /// Apply a patch to the canonical tree, then broadcast the recomputed
    /// subtree to everyone except the sender.
    fn apply_mutation(&mut self, sender_id: &str, node_id: &str, patch: &NodePatch) {
        let level = self.options.accessibility_level;
        let subtree = match self.root.find_mut(node_id) {
            Some(node) => {
                patch.apply(node);
                // Collaborative edits must not regress the contrast floor
                // or drop derived labels.
                enrich_accessibility(node, level);
                node.clone()
            }
            None => {
                warn!(%node_id, "mutation target not found");
                self.reply(
                    sender_id,
                    ServerMessage::Error {
                        message: format!("no node with id `{node_id}`"),
                    },
                );
                return;
            }
        };

        self.revision += 1;
        let update = ServerMessage::AstUpdated {
            node_id: node_id.to_string(),
            node: subtree,
            revision: self.revision,
            fingerprint: self.root.fingerprint(),
        };
        self.broadcast_except(sender_id, update);
    }

    fn render_preview(&mut self, client_id: &str, framework: Framework) {
        let message = match emit(&self.root, framework) {
            Ok(source) => ServerMessage::PreviewReady { framework, source },
            // Emitter failures propagate unchanged to the requester.
            Err(error) => ServerMessage::Error {
                message: error.to_string(),
            },
        };
        self.reply(client_id, message);
    }

    /// Send to one client; a closed channel drops the subscriber.
    fn reply(&mut self, client_id: &str, message: ServerMessage) {
        if let Some(sender) = self.subscribers.get(client_id) {
            if sender.send(message).is_err() {
                debug!(%client_id, "dropping disconnected client");
                self.subscribers.remove(client_id);
            }
        }
    }

    /// Send to every subscriber except `sender_id`, pruning dead channels.
    fn broadcast_except(&mut self, sender_id: &str, message: ServerMessage) {
        self.subscribers.retain(|client_id, sender| {
            if client_id == sender_id {
                return true;
            }
            if sender.send(message.clone()).is_err() {
                debug!(%client_id, "dropping disconnected client");
                return false;
            }
            true
        });
    }
}
