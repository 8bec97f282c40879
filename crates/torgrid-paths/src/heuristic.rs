//! Distance metrics for the informed searches.

use std::f64::consts::SQRT_2;

use torgrid_core::Point;

/// Distance metric, selectable by the integer ids the call surface has
/// always used (0–4).
///
/// Chebyshev, Manhattan, Euclidean and Octile are admissible on
/// unit-and-diagonal-cost grids. [`Metric::Hamming`] is not — it counts
/// differing coordinate components (0, 1 or 2) and is offered only as a
/// pathological option; callers choosing it accept non-optimal paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    #[default]
    Chebyshev,
    Manhattan,
    Euclidean,
    Octile,
    Hamming,
}

impl Metric {
    /// Metric for an integer id: 0 Chebyshev, 1 Manhattan, 2 Euclidean,
    /// 3 Octile, 4 Hamming.
    pub fn from_id(id: usize) -> Option<Metric> {
        match id {
            0 => Some(Metric::Chebyshev),
            1 => Some(Metric::Manhattan),
            2 => Some(Metric::Euclidean),
            3 => Some(Metric::Octile),
            4 => Some(Metric::Hamming),
            _ => None,
        }
    }

    /// The integer id of this metric.
    pub fn id(self) -> usize {
        match self {
            Metric::Chebyshev => 0,
            Metric::Manhattan => 1,
            Metric::Euclidean => 2,
            Metric::Octile => 3,
            Metric::Hamming => 4,
        }
    }
}

/// Estimated distance between `a` and `b` under `metric`.
pub fn heuristic(a: Point, b: Point, metric: Metric) -> f64 {
    let dx = (a.x - b.x).abs() as f64;
    let dy = (a.y - b.y).abs() as f64;
    match metric {
        Metric::Chebyshev => dx.max(dy),
        Metric::Manhattan => dx + dy,
        Metric::Euclidean => (dx * dx + dy * dy).sqrt(),
        Metric::Octile => (SQRT_2 - 1.0) * dx.min(dy) + dx.max(dy),
        Metric::Hamming => ((a.x != b.x) as i32 + (a.y != b.y) as i32) as f64,
    }
}
