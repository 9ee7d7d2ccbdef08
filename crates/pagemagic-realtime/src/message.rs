//! Wire messages exchanged over an editing session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use pagemagic_types::{Framework, UINode};

/// A request from a connected client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Mutate the subtree rooted at `node_id`.
    AstUpdate { node_id: String, patch: NodePatch },
    /// Render the current document for the given framework.
    PreviewRequest { framework: Framework },
}

/// A push from the session to connected clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A mutation was applied; `node` is the recomputed subtree.
    AstUpdated {
        node_id: String,
        node: UINode,
        /// Monotonic per-session mutation counter.
        revision: u64,
        /// Fingerprint of the whole canonical tree after the mutation.
        fingerprint: String,
    },
    /// A preview render, sent only to the requester.
    PreviewReady { framework: Framework, source: String },
    /// A request failed; sent only to the requester.
    Error { message: String },
}

/// An incremental edit to a single node.
///
/// Applied to the canonical server-side tree only; clients never merge
/// locally. `set_props` overwrites, `remove_props` deletes, and
/// `replace_children` (when present) swaps the whole child list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub set_props: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_props: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_children: Option<Vec<UINode>>,
}

impl NodePatch {
    /// Apply this patch to the target node.
    pub fn apply(&self, node: &mut UINode) {
        for (key, value) in &self.set_props {
            node.set_prop(key.clone(), value.clone());
        }
        for key in &self.remove_props {
            node.props.remove(key);
        }
        if let Some(children) = &self.replace_children {
            node.children = children.clone();
        }
    }
}
