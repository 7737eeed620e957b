use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::FsError;
use crate::node::{NodeRef, TreeNode};

/// Tree node backed by a real filesystem entry.
///
/// Symlinks and other special entries are skipped during listing, never
/// followed, so a traversal cannot loop through a link cycle.
#[derive(Debug, Clone)]
pub struct FsNode {
    path: PathBuf,
}

impl FsNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Convenience constructor for handing a root to the sizer.
    pub fn root(path: impl Into<PathBuf>) -> NodeRef {
        Arc::new(Self::new(path))
    }
}

#[async_trait]
impl TreeNode for FsNode {
    async fn list_children(
        &self,
        cancel: &CancellationToken,
    ) -> anyhow::Result<(Vec<NodeRef>, Vec<NodeRef>)> {
        let mut rd = tokio::fs::read_dir(&self.path).await.map_err(|source| FsError::ReadDir {
            path: self.path.clone(),
            source,
        })?;

        let mut subdirs: Vec<NodeRef> = Vec::new();
        let mut files: Vec<NodeRef> = Vec::new();

        loop {
            if cancel.is_cancelled() {
                break;
            }
            let entry = match rd.next_entry().await.map_err(|source| FsError::ReadDir {
                path: self.path.clone(),
                source,
            })? {
                Some(entry) => entry,
                None => break,
            };

            // file_type() does not follow symlinks; links and special files
            // fall through both branches and are ignored.
            let file_type = entry.file_type().await.map_err(|source| FsError::Metadata {
                path: entry.path(),
                source,
            })?;

            if file_type.is_dir() {
                subdirs.push(Arc::new(FsNode::new(entry.path())));
            } else if file_type.is_file() {
                files.push(Arc::new(FsNode::new(entry.path())));
            }
        }

        Ok((subdirs, files))
    }

    async fn size(&self, _cancel: &CancellationToken) -> anyhow::Result<u64> {
        let meta = tokio::fs::metadata(&self.path).await.map_err(|source| FsError::Metadata {
            path: self.path.clone(),
            source,
        })?;
        Ok(meta.len())
    }
}
