//! Backtrack-map to path conversion, shared by every bidirectional
//! search.

use std::collections::HashMap;

use torgrid_core::Point;

/// Convert backtrack maps into a start→target path through `meeting`.
///
/// Walks `forward` from `meeting` back to its root and reverses that
/// segment, then — when a backward map is present — follows it from
/// `backward[meeting]` and appends the chain as-is. The result is
/// `start ... meeting ... target` in travel order; with `backward`
/// absent (a unidirectional search) the path ends at `meeting`.
pub fn reconstruct_path(
    meeting: Point,
    forward: &HashMap<Point, Point>,
    backward: Option<&HashMap<Point, Point>>,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(meeting);
    while let Some(p) = cur {
        path.push(p);
        cur = forward.get(&p).copied();
    }
    path.reverse();
    if let Some(backward) = backward {
        let mut cur = backward.get(&meeting).copied();
        while let Some(p) = cur {
            path.push(p);
            cur = backward.get(&p).copied();
        }
    }
    path
}
