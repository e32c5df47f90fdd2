use common::vec2::Vec2;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{QuadTreeError, QuadTreeResult};
use crate::node::{Entry, NodeRef, QuadNode, EDGE_ALL};

/// Tri-state result of an insertion. Out-of-bounds positions report `Failed`
/// and leave the tree untouched; retry policy (clamping, dropping) is the
/// caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Replaced,
    Failed,
}

/// Region quadtree over points with a generic, never-owned payload.
///
/// The tree's bounds are fixed at construction. `length` counts resident
/// entries and moves only on [`InsertOutcome::Inserted`]; replacing the
/// payload at an exactly matching position leaves it unchanged.
pub struct QuadTree<T> {
    root: NodeRef<T>,
    length: usize,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree spanning `nw..se`.
    ///
    /// Panics when `nw` is not strictly less than `se` on both axes; that is
    /// a programmer error, not a runtime condition. Use [`QuadTree::try_new`]
    /// for unvalidated input such as configuration.
    pub fn new(nw: Vec2, se: Vec2) -> Self {
        match Self::try_new(nw, se) {
            Ok(tree) => tree,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(nw: Vec2, se: Vec2) -> QuadTreeResult<Self> {
        let finite = nw.x.is_finite() && nw.y.is_finite() && se.x.is_finite() && se.y.is_finite();
        if !finite || nw.x >= se.x || nw.y >= se.y {
            return Err(QuadTreeError::InvalidBounds {
                nw_x: nw.x,
                nw_y: nw.y,
                se_x: se.x,
                se_y: se.y,
            });
        }

        let mut root = QuadNode::new(EDGE_ALL, None);
        root.set_bounds(nw, se);

        Ok(Self {
            root: Rc::new(RefCell::new(root)),
            length: 0,
        })
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The fixed `(nw, se)` corners given at construction.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.root.borrow().bounds()
    }

    pub fn root(&self) -> &NodeRef<T> {
        &self.root
    }

    /// Inserts `value` at `pos`. Positions outside the tree bounds fail
    /// without mutating anything; an exact position match replaces the
    /// resident payload in place.
    pub fn insert(&mut self, pos: Vec2, value: T) -> InsertOutcome {
        if !self.root.borrow().contains(pos) {
            return InsertOutcome::Failed;
        }

        let outcome = node_insert(&self.root, pos, value);
        if outcome == InsertOutcome::Inserted {
            self.length += 1;
        }
        outcome
    }

    /// Exact-position lookup; returns the node holding an entry at exactly
    /// `pos`. This is not a nearest-neighbour search.
    pub fn find_node(&self, pos: Vec2) -> Option<NodeRef<T>> {
        node_find(&self.root, pos)
    }

    /// Exact-position lookup returning a copy of the payload.
    pub fn find(&self, pos: Vec2) -> Option<T>
    where
        T: Clone,
    {
        self.find_node(pos)
            .and_then(|node| node.borrow().entry().map(|entry| entry.value.clone()))
    }

    /// Pre/post-order traversal over every node, leaves and empties included.
    pub fn walk<D, A>(&self, descend: &mut D, ascend: &mut A)
    where
        D: FnMut(&QuadNode<T>),
        A: FnMut(&QuadNode<T>),
    {
        QuadNode::walk(&self.root, descend, ascend);
    }

    /// Collects the `(nw, se)` rectangle of every node, the feed for bounds
    /// overlays and structure dumps.
    pub fn node_bounds(&self, out: &mut Vec<(Vec2, Vec2)>) {
        self.walk(&mut |node| out.push(node.bounds()), &mut |_| {});
    }

    /// Writes an indented dump of the whole structure into `out`.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        dump_node(&self.root, 0, out)
    }
}

fn node_insert<T>(node: &NodeRef<T>, pos: Vec2, value: T) -> InsertOutcome {
    enum Step<T> {
        Store,
        Replace,
        Split,
        Descend(NodeRef<T>),
        Unclaimed,
    }

    let step = {
        let n = node.borrow();
        match n.entry() {
            Some(entry) if entry.pos == pos => Step::Replace,
            Some(_) => Step::Split,
            None if n.is_pointer() => match n.quadrant(pos) {
                Some(child) => Step::Descend(child),
                // Cannot happen while quadrant bisection partitions the
                // parent rectangle; reported instead of unwound.
                None => Step::Unclaimed,
            },
            None => Step::Store,
        }
    };

    match step {
        Step::Store => {
            node.borrow_mut().entry = Some(Entry { pos, value });
            InsertOutcome::Inserted
        }
        Step::Replace => {
            node.borrow_mut().entry = Some(Entry { pos, value });
            InsertOutcome::Replaced
        }
        Step::Split => {
            // The displaced leaf entry always lands in one of the four fresh
            // children, so a split never changes the tree length.
            if let Some(old) = QuadNode::subdivide(node) {
                let moved = node_insert(node, old.pos, old.value);
                debug_assert_eq!(moved, InsertOutcome::Inserted);
            }
            node_insert(node, pos, value)
        }
        Step::Descend(child) => node_insert(&child, pos, value),
        Step::Unclaimed => InsertOutcome::Failed,
    }
}

fn node_find<T>(node: &NodeRef<T>, pos: Vec2) -> Option<NodeRef<T>> {
    let next = {
        let n = node.borrow();
        if let Some(entry) = n.entry() {
            return (entry.pos == pos).then(|| Rc::clone(node));
        }
        if n.is_pointer() {
            n.quadrant(pos)
        } else {
            None
        }
    };
    next.and_then(|child| node_find(&child, pos))
}

fn dump_node<T, W: fmt::Write>(node: &NodeRef<T>, depth: usize, out: &mut W) -> fmt::Result {
    let n = node.borrow();
    writeln!(out, "{:indent$}{}", "", &*n, indent = depth * 2)?;
    for child in n.children().into_iter().flatten() {
        dump_node(child, depth + 1, out)?;
    }
    Ok(())
}
