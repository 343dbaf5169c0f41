//! Circle collision primitives
//!
//! Every entity collides as a circle around its body position. The sim
//! asks two questions: do two bodies overlap, and which members of a
//! collection overlap a given body.

use super::state::Body;

/// True when two bodies' circles overlap (touching edges do not count)
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    let r = a.radius + b.radius;
    a.pos.distance_squared(b.pos) < r * r
}

/// Indices of every body in `others` that overlaps `body`, in collection order
pub fn overlapping<'a, I>(body: &Body, others: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Body>,
{
    others
        .into_iter()
        .enumerate()
        .filter(|(_, other)| bodies_overlap(body, other))
        .map(|(idx, _)| idx)
        .collect()
}
