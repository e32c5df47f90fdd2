use common::vec2::Vec2;

use crate::list::ResultList;
use crate::node::{Entry, NodeRef};
use crate::tree::QuadTree;

impl<T: Clone> QuadTree<T> {
    /// Collects every entry whose position lies within the rectangle
    /// `nw..=se` into `out`.
    ///
    /// The list is purely accumulated into: the caller resets it between
    /// logically distinct queries, so one preallocated list can serve a whole
    /// tick of per-entity lookups without reallocating.
    pub fn find_in_area(&self, nw: Vec2, se: Vec2, out: &mut ResultList<T>) {
        collect_in_area(self.root(), nw, se, &mut |_| true, out);
    }

    /// Like [`QuadTree::find_in_area`], but skips entries whose payload
    /// equals `skip`. Used by entities querying for their own neighbours.
    pub fn find_in_area_excluding(&self, nw: Vec2, se: Vec2, skip: &T, out: &mut ResultList<T>)
    where
        T: PartialEq,
    {
        collect_in_area(self.root(), nw, se, &mut |entry| entry.value != *skip, out);
    }
}

fn collect_in_area<T, F>(
    node: &NodeRef<T>,
    nw: Vec2,
    se: Vec2,
    keep: &mut F,
    out: &mut ResultList<T>,
) where
    T: Clone,
    F: FnMut(&Entry<T>) -> bool,
{
    let n = node.borrow();

    // The search boundary does not intersect this branch at all.
    if !n.overlaps_area(nw, se) {
        return;
    }

    // Fully enclosed: take the whole subtree without any per-entry position
    // checks. This is what makes dense clusters cheap to query.
    if n.within_area(nw, se) {
        drop(n);
        collect_subtree(node, keep, out);
        return;
    }

    if let Some(entry) = n.entry() {
        if entry.pos.within(nw, se) && keep(entry) {
            out.append(entry.clone());
        }
        return;
    }

    for child in n.children().into_iter().flatten() {
        collect_in_area(child, nw, se, keep, out);
    }
}

fn collect_subtree<T, F>(node: &NodeRef<T>, keep: &mut F, out: &mut ResultList<T>)
where
    T: Clone,
    F: FnMut(&Entry<T>) -> bool,
{
    let n = node.borrow();

    if let Some(entry) = n.entry() {
        if keep(entry) {
            out.append(entry.clone());
        }
        return;
    }

    for child in n.children().into_iter().flatten() {
        collect_subtree(child, keep, out);
    }
}
