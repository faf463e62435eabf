//! Comment entity and reply-tree traversal
//!
//! The server returns comments already partially nested: every node
//! carries its own `replies`, and a thread listing contains (at least)
//! the root nodes in server order. The client never assembles
//! parent→child links itself; it filters roots and recurses.

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

use super::user::UserRef;

/// Maximum reply depth the traversal helpers will descend into.
///
/// The server promises an acyclic tree; the cap turns a broken promise
/// into truncated rendering instead of unbounded recursion.
pub const MAX_REPLY_DEPTH: usize = 32;

/// A comment node in a reply tree
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: EntityId,
    pub post: EntityId,
    pub author: UserRef,
    /// `None` marks a root node
    pub parent: Option<EntityId>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Direct replies, in server order (never re-sorted client-side)
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Whether this node sits at the top of a thread
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Top-level nodes of a comment listing, server order preserved
pub fn roots(comments: &[Comment]) -> impl Iterator<Item = &Comment> {
    comments.iter().filter(|c| c.is_root())
}

/// Depth-first walk over a reply forest, depth-capped
///
/// Calls `f(comment, depth)` for every node reachable within
/// [`MAX_REPLY_DEPTH`] levels; deeper replies are skipped.
pub fn visit_thread<'a, F>(comments: &'a [Comment], f: &mut F)
where
    F: FnMut(&'a Comment, usize),
{
    for root in roots(comments) {
        visit_node(root, 0, f);
    }
}

fn visit_node<'a, F>(node: &'a Comment, depth: usize, f: &mut F)
where
    F: FnMut(&'a Comment, usize),
{
    if depth >= MAX_REPLY_DEPTH {
        return;
    }
    f(node, depth);
    for reply in &node.replies {
        visit_node(reply, depth + 1, f);
    }
}

/// Flatten a reply forest into (node, depth) pairs in render order
pub fn flatten_thread(comments: &[Comment]) -> Vec<(&Comment, usize)> {
    let mut out = Vec::new();
    visit_thread(comments, &mut |comment, depth| out.push((comment, depth)));
    out
}
