use common::vec2::Vec2;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub(crate) const EDGE_LEFT: u8 = 0b0001;
pub(crate) const EDGE_BOTTOM: u8 = 0b0010;
pub(crate) const EDGE_RIGHT: u8 = 0b0100;
pub(crate) const EDGE_TOP: u8 = 0b1000;
pub(crate) const EDGE_ALL: u8 = EDGE_LEFT | EDGE_BOTTOM | EDGE_RIGHT | EDGE_TOP;

/// Shared handle to a tree node. Child links are the only owning references;
/// parent links are weak, so dropping a tree tears down the whole node graph
/// without cycles.
pub type NodeRef<T> = Rc<RefCell<QuadNode<T>>>;

/// A resident `(position, payload)` pair.
#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub pos: Vec2,
    pub value: T,
}

////
//   Quadrants
//
//   nw(x,y)
//   x────────────┬────────────┐
//   │            │            │
//   │     nw     │     ne     │
//   │            │            │
//   ├────────────x────────────┤
//   │            │ c(x,y)     │
//   │     sw     │     se     │
//   │            │            │
//   └────────────┴────────────x
//                        se(x,y)
////

/// A node of the spatial partition. At any time a node is in exactly one of
/// three states: empty (no children, no entry), leaf (no children, one
/// entry), or pointer (four children, no entry).
pub struct QuadNode<T> {
    pub(crate) nw: Option<NodeRef<T>>,
    pub(crate) ne: Option<NodeRef<T>>,
    pub(crate) sw: Option<NodeRef<T>>,
    pub(crate) se: Option<NodeRef<T>>,

    pub(crate) parent: Option<Weak<RefCell<QuadNode<T>>>>,

    self_nw: Vec2,
    self_se: Vec2,
    center: Vec2,
    width: f32,
    height: f32,

    // Which of this node's edges lie on the tree's outer boundary. Containment
    // is half-open [nw, se) except on boundary edges, where se is inclusive.
    edges: u8,

    pub(crate) entry: Option<Entry<T>>,
}

impl<T> QuadNode<T> {
    pub(crate) fn new(edges: u8, parent: Option<Weak<RefCell<QuadNode<T>>>>) -> Self {
        Self {
            nw: None,
            ne: None,
            sw: None,
            se: None,
            parent,
            self_nw: Vec2::default(),
            self_se: Vec2::default(),
            center: Vec2::default(),
            width: 0.0,
            height: 0.0,
            edges,
            entry: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.entry.is_some()
    }

    pub fn is_pointer(&self) -> bool {
        self.nw.is_some()
            && self.ne.is_some()
            && self.sw.is_some()
            && self.se.is_some()
            && !self.is_leaf()
    }

    pub fn is_empty(&self) -> bool {
        self.nw.is_none()
            && self.ne.is_none()
            && self.sw.is_none()
            && self.se.is_none()
            && !self.is_leaf()
    }

    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.self_nw, self.self_se)
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn entry(&self) -> Option<&Entry<T>> {
        self.entry.as_ref()
    }

    /// Upgraded parent handle, `None` for the root. Never owning.
    pub fn parent(&self) -> Option<NodeRef<T>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_bounds(&mut self, nw: Vec2, se: Vec2) {
        self.self_nw = nw;
        self.self_se = se;
        self.center = Vec2::new(nw.x + (se.x - nw.x) / 2.0, nw.y + (se.y - nw.y) / 2.0);
        self.width = (se.x - nw.x).abs();
        self.height = (se.y - nw.y).abs();
    }

    /// Containment under the half-open convention: `[nw, se)` on both axes,
    /// with `se` included on edges that lie on the tree's outer boundary.
    /// Internal split boundaries therefore belong to exactly one quadrant.
    pub fn contains(&self, pos: Vec2) -> bool {
        let x_ok = pos.x >= self.self_nw.x
            && (pos.x < self.self_se.x
                || (self.edges & EDGE_RIGHT != 0 && pos.x == self.self_se.x));
        let y_ok = pos.y >= self.self_nw.y
            && (pos.y < self.self_se.y
                || (self.edges & EDGE_BOTTOM != 0 && pos.y == self.self_se.y));
        x_ok && y_ok
    }

    /// True if this node's rectangle is fully enclosed by the query rectangle.
    pub fn within_area(&self, nw: Vec2, se: Vec2) -> bool {
        self.self_nw.x >= nw.x
            && self.self_se.x <= se.x
            && self.self_nw.y >= nw.y
            && self.self_se.y <= se.y
    }

    /// True if this node's rectangle intersects the query rectangle at all.
    pub fn overlaps_area(&self, nw: Vec2, se: Vec2) -> bool {
        self.self_nw.x <= se.x
            && self.self_se.x >= nw.x
            && self.self_nw.y <= se.y
            && self.self_se.y >= nw.y
    }

    /// The single child quadrant containing `pos`, if any.
    pub(crate) fn quadrant(&self, pos: Vec2) -> Option<NodeRef<T>> {
        for child in self.children().into_iter().flatten() {
            if child.borrow().contains(pos) {
                return Some(Rc::clone(child));
            }
        }
        None
    }

    pub fn children(&self) -> [Option<&NodeRef<T>>; 4] {
        [
            self.nw.as_ref(),
            self.ne.as_ref(),
            self.sw.as_ref(),
            self.se.as_ref(),
        ]
    }

    /// Splits a leaf (or empty) node into four empty child quadrants bisected
    /// at the center and returns the displaced entry, if any, for the caller
    /// to reinsert. Child edge flags inherit the parent's outer-boundary bits.
    pub(crate) fn subdivide(node: &NodeRef<T>) -> Option<Entry<T>> {
        let parent = Rc::downgrade(node);
        let mut n = node.borrow_mut();

        let min = n.self_nw;
        let max = n.self_se;
        let ctr = n.center;
        let edges = n.edges;

        let child = |nw: Vec2, se: Vec2, edges: u8| {
            let mut c = QuadNode::new(edges, Some(parent.clone()));
            c.set_bounds(nw, se);
            Rc::new(RefCell::new(c))
        };

        n.nw = Some(child(min, ctr, edges & (EDGE_LEFT | EDGE_TOP)));
        n.ne = Some(child(
            Vec2::new(ctr.x, min.y),
            Vec2::new(max.x, ctr.y),
            edges & (EDGE_TOP | EDGE_RIGHT),
        ));
        n.sw = Some(child(
            Vec2::new(min.x, ctr.y),
            Vec2::new(ctr.x, max.y),
            edges & (EDGE_LEFT | EDGE_BOTTOM),
        ));
        n.se = Some(child(ctr, max, edges & (EDGE_RIGHT | EDGE_BOTTOM)));

        n.entry.take()
    }

    /// Recursively visits every node of the subtree, calling `descend` before
    /// and `ascend` after the node's children are visited.
    pub fn walk<D, A>(node: &NodeRef<T>, descend: &mut D, ascend: &mut A)
    where
        D: FnMut(&QuadNode<T>),
        A: FnMut(&QuadNode<T>),
    {
        let n = node.borrow();
        descend(&n);
        for child in n.children().into_iter().flatten() {
            Self::walk(child, descend, ascend);
        }
        ascend(&n);
    }
}

impl<T> fmt::Display for QuadNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{nw: {}, se: {}, parent: '{}', children: '{}', entry: ",
            self.self_nw,
            self.self_se,
            if self.parent.is_some() { 'y' } else { '-' },
            if self.nw.is_some() { 'y' } else { '-' },
        )?;
        match &self.entry {
            Some(entry) => write!(f, "{}}}", entry.pos),
            None => write!(f, "-}}"),
        }
    }
}
