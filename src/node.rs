use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Shared handle to a node in the source tree.
///
/// Branch visits run as spawned tasks, so nodes are handed around behind an
/// `Arc` rather than borrowed across task boundaries.
pub type NodeRef = Arc<dyn TreeNode>;

/// Collaborator contract consumed by the traversal engine.
///
/// A `TreeNode` is an opaque handle for either a directory or a file. The
/// engine only ever calls [`list_children`](TreeNode::list_children) on
/// directory nodes and [`size`](TreeNode::size) on file nodes, never mutates
/// a node, and treats every returned error as opaque.
///
/// Both operations receive the traversal's cancellation token. Implementors
/// that perform blocking work should honor it, but are not required to —
/// the engine layers its own cancellation checks regardless.
#[async_trait]
pub trait TreeNode: Send + Sync {
    /// Lists the immediate children of a directory node as
    /// `(subdirectories, files)`. No ordering is implied.
    async fn list_children(
        &self,
        cancel: &CancellationToken,
    ) -> anyhow::Result<(Vec<NodeRef>, Vec<NodeRef>)>;

    /// Returns the byte size of a file node.
    async fn size(&self, cancel: &CancellationToken) -> anyhow::Result<u64>;
}
