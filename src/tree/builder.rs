//! TreeBuilder - depth-bounded walk that builds the full tree in memory

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Skip, TraversalError};
use crate::fs::{Entry, FileSystem, HostFs};

use super::cancel::CancelToken;
use super::config::BuilderConfig;
use super::node::Node;
use super::utils::{root_name, should_ignore_name, sort_children};

/// Outcome of visiting one descendant that did not produce a node.
enum WalkError {
    /// Recovered: the entry is left out and its siblings are still visited.
    Skipped(Skip),
    /// Ends the whole walk.
    Fatal(TraversalError),
}

impl From<Skip> for WalkError {
    fn from(skip: Skip) -> Self {
        WalkError::Skipped(skip)
    }
}

impl From<TraversalError> for WalkError {
    fn from(err: TraversalError) -> Self {
        WalkError::Fatal(err)
    }
}

/// Builds a [`Node`] tree from a root path, listing at most `max_depth`
/// directory levels below it.
///
/// The walk is depth-first and touches each entry once. Entries below the
/// depth bound are never listed or classified, so deep or cyclic structures
/// (e.g. a symlink pointing at its own parent) cost at most `max_depth`
/// levels of work.
pub struct TreeBuilder<F> {
    fs: F,
    config: BuilderConfig,
    cancel: Option<CancelToken>,
}

impl<F: FileSystem> TreeBuilder<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            config: BuilderConfig::default(),
            cancel: None,
        }
    }

    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop the walk once `token` is cancelled. Any partial tree is dropped
    /// and [`TraversalError::Cancelled`] is returned.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Walk `root` and return its tree.
    ///
    /// A depth of 0 yields the root alone. A depth of `d` lists directories
    /// up to `d - 1` levels below the root; directories at level `d` appear
    /// with no children. Negative depths are rejected before any filesystem
    /// access.
    pub fn build(&self, root: &Path, max_depth: i64) -> Result<Node, TraversalError> {
        let max_depth = usize::try_from(max_depth)
            .map_err(|_| TraversalError::InvalidDepth { depth: max_depth })?;

        let name = root_name(root);
        if !self.fs.is_dir(root) {
            if self.fs.exists(root) {
                return Ok(Node::file(name));
            }
            return Err(self.root_failure(root));
        }
        if max_depth == 0 {
            return Ok(Node::dir(name, Vec::new()));
        }

        match self.children_of(root, 0, max_depth) {
            Ok(children) => Ok(Node::dir(name, children)),
            Err(WalkError::Skipped(Skip::Unlistable(source))) => {
                Err(TraversalError::root_unreadable(root, source))
            }
            // children_of absorbs every per-entry skip; only its own listing
            // failure comes back as Skipped.
            Err(WalkError::Skipped(Skip::Unclassifiable)) => {
                unreachable!("per-entry skip escaped children_of")
            }
            Err(WalkError::Fatal(err)) => Err(err),
        }
    }

    /// Explain why `root` could not be resolved. `exists` only answers yes or
    /// no, so the listing error is used to recover the real reason
    /// (e.g. permission denied on a parent directory).
    fn root_failure(&self, root: &Path) -> TraversalError {
        match self.fs.list_entries(root) {
            Err(source) => TraversalError::root_unreadable(root, source),
            Ok(_) => TraversalError::root_missing(root),
        }
    }

    /// List and visit the entries of `dir`, which sits at `depth`.
    fn children_of(
        &self,
        dir: &Path,
        depth: usize,
        max_depth: usize,
    ) -> Result<Vec<Node>, WalkError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(TraversalError::Cancelled {
                path: dir.to_path_buf(),
            }
            .into());
        }

        let entries = self.fs.list_entries(dir).map_err(Skip::Unlistable)?;
        trace!(dir = %dir.display(), depth, entries = entries.len(), "listed directory");

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            if should_ignore_name(&entry.name, &self.config.ignore_patterns) {
                continue;
            }

            match self.visit(&entry, depth + 1, max_depth) {
                Ok(node) => children.push(node),
                Err(WalkError::Skipped(reason)) => {
                    debug!(path = %entry.path.display(), %reason, "skipping entry");
                }
                Err(fatal @ WalkError::Fatal(_)) => return Err(fatal),
            }
        }

        sort_children(&mut children, self.config.sort);
        Ok(children)
    }

    /// Build the node for `entry`, which sits at `depth` (>= 1).
    ///
    /// Existence is checked after `is_dir`, so an entry that vanished before
    /// being classified is skipped rather than kept as a file.
    fn visit(&self, entry: &Entry, depth: usize, max_depth: usize) -> Result<Node, WalkError> {
        if !self.fs.is_dir(&entry.path) {
            if self.fs.exists(&entry.path) {
                return Ok(Node::file(entry.name.as_str()));
            }
            return Err(Skip::Unclassifiable.into());
        }

        // At the bound: keep the directory, never list it.
        if depth >= max_depth {
            return Ok(Node::dir(entry.name.as_str(), Vec::new()));
        }

        let children = self.children_of(&entry.path, depth, max_depth)?;
        Ok(Node::dir(entry.name.as_str(), children))
    }
}

/// Build the tree under `root` on the host filesystem with default settings.
pub fn build(root: impl AsRef<Path>, max_depth: i64) -> Result<Node, TraversalError> {
    TreeBuilder::new(HostFs).build(root.as_ref(), max_depth)
}
