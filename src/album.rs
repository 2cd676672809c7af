use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{AlbumError, AlbumResult};

/// Payload variant of a tree node: a set owns ordered children, a photo is
/// structurally terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Set { children: Vec<Index> },
    Photo,
}

/// Tree node in the arena-based album hierarchy.
#[derive(Debug)]
pub struct Node {
    /// Display name; sole identity key for find/remove
    pub name: String,
    /// Index of the parent set in the arena, None for the root
    pub parent: Option<Index>,
    /// Variant tag plus variant-owned data
    pub kind: NodeKind,
}

impl Node {
    pub fn is_set(&self) -> bool {
        matches!(self.kind, NodeKind::Set { .. })
    }

    /// Child indices in insertion order; empty for photos.
    pub fn children(&self) -> &[Index] {
        match &self.kind {
            NodeKind::Set { children } => children,
            NodeKind::Photo => &[],
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Result of a successful search.
///
/// `parent` is the direct parent set of the matched node, or `None` when
/// the match is the search root itself. Removal derives everything it
/// needs from this pair; no state is shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub node: Index,
    pub parent: Option<Index>,
}

/// Outcome of a removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The first match was detached; `parent` is the set it was removed from.
    Removed { parent: Index },
    /// Nothing matched below the search start, or the match was the start
    /// itself. The caller's position stays valid either way.
    NotFound,
}

/// Arena-based composite tree of sets and photos.
///
/// Uses a generational arena for memory-safe node references: the driver's
/// current position is a plain [`Index`], and removing a subtree
/// invalidates the indices of everything in it.
///
/// Children keep insertion order and duplicate names are permitted; with
/// duplicates, find/remove resolve to the first match of a depth-first
/// pre-order walk (children in insertion order).
#[derive(Debug)]
pub struct AlbumTree {
    arena: Arena<Node>,
    root: Index,
}

impl AlbumTree {
    /// Create a tree whose root is a set named `root_name`.
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node {
            name: root_name.into(),
            parent: None,
            kind: NodeKind::Set {
                children: Vec::new(),
            },
        });
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    /// Append a new set under `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn add_set(&mut self, parent: Index, name: &str) -> AlbumResult<Index> {
        self.attach(
            parent,
            Node {
                name: name.to_string(),
                parent: Some(parent),
                kind: NodeKind::Set {
                    children: Vec::new(),
                },
            },
        )
    }

    /// Append a new photo under `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn add_photo(&mut self, parent: Index, name: &str) -> AlbumResult<Index> {
        self.attach(
            parent,
            Node {
                name: name.to_string(),
                parent: Some(parent),
                kind: NodeKind::Photo,
            },
        )
    }

    fn attach(&mut self, parent: Index, node: Node) -> AlbumResult<Index> {
        match self.arena.get(parent) {
            None => return Err(AlbumError::StaleNode),
            Some(p) if !p.is_set() => {
                return Err(AlbumError::PhotoCannotContain(p.name.clone()))
            }
            Some(_) => {}
        }

        let idx = self.arena.insert(node);
        if let Some(Node {
            kind: NodeKind::Set { children },
            ..
        }) = self.arena.get_mut(parent)
        {
            children.push(idx);
        }
        Ok(idx)
    }

    /// Depth-first pre-order search starting at the tree root.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, name: &str) -> Option<Match> {
        self.find_from(self.root, name)
    }

    /// Depth-first pre-order search starting at `from`.
    ///
    /// Returns the first node whose name equals `name` together with its
    /// direct parent set (`None` when the match is `from` itself).
    #[instrument(level = "trace", skip(self))]
    pub fn find_from(&self, from: Index, name: &str) -> Option<Match> {
        let mut stack = vec![from];
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                if node.name == name {
                    let parent = if idx == from { None } else { node.parent };
                    return Some(Match { node: idx, parent });
                }
                // Push children in reverse order for left-to-right traversal
                stack.extend(node.children().iter().rev());
            }
        }
        None
    }

    /// Search from `from` for `name` and detach the first match, dropping
    /// its whole subtree from the arena.
    ///
    /// The search start is always passed explicitly; removal never walks
    /// up from an implicit receiver. A match that is `from` itself has no
    /// parent within the search and reports [`Removal::NotFound`] so the
    /// caller's position stays usable.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_from(&mut self, from: Index, name: &str) -> AlbumResult<Removal> {
        match self.arena.get(from) {
            None => return Err(AlbumError::StaleNode),
            Some(n) if !n.is_set() => {
                return Err(AlbumError::PhotoCannotRelease(n.name.clone()))
            }
            Some(_) => {}
        }

        let m = match self.find_from(from, name) {
            Some(m) => m,
            None => return Ok(Removal::NotFound),
        };
        let parent = match m.parent {
            Some(p) => p,
            None => return Ok(Removal::NotFound),
        };

        if let Some(Node {
            kind: NodeKind::Set { children },
            ..
        }) = self.arena.get_mut(parent)
        {
            children.retain(|&c| c != m.node);
        }
        self.drop_subtree(m.node);

        Ok(Removal::Removed { parent })
    }

    fn drop_subtree(&mut self, start: Index) {
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.remove(idx) {
                stack.extend(node.children());
            }
        }
    }

    /// Pre-order iterator over the whole tree.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIter {
        PreOrderIter::new(self, self.root)
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, idx: Index) -> usize {
        match self.get(idx) {
            Some(node) => {
                1 + node
                    .children()
                    .iter()
                    .map(|&child| self.depth_below(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Collects the names of all photos, pre-order.
    ///
    /// Empty sets contribute nothing; only `Photo` nodes count.
    #[instrument(level = "debug", skip(self))]
    pub fn photo_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| !node.is_set())
            .map(|(_, node)| node.name.clone())
            .collect()
    }
}

pub struct PreOrderIter<'a> {
    tree: &'a AlbumTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a AlbumTree, start: Index) -> Self {
        Self {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if let Some(node) = self.tree.get(idx) {
                self.stack.extend(node.children().iter().rev());
                return Some((idx, node));
            }
        }
        None
    }
}
