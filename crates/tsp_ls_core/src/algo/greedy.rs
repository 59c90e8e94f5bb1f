use crate::{node::Point, tour::Tour};

/// Identity-order baseline: visit points as they appear in the input.
pub(crate) fn trivial_tour(points: &[Point]) -> Tour {
    Tour::from_order(points, (0..points.len()).collect())
}

/// Nearest-neighbor construction starting at index 0.
///
/// Each step scans every unvisited index for the one closest to the tour's
/// last point; ties go to the lowest index. O(n²) time, O(n) extra space.
/// The result is never optimal and can be arbitrarily bad on adversarial
/// layouts; it only seeds the local search.
pub(crate) fn nearest_neighbor_tour(points: &[Point]) -> Tour {
    let n = points.len();
    if n == 0 {
        return Tour::default();
    }

    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    order.push(0);
    visited[0] = true;

    while order.len() < n {
        let last = points[order[order.len() - 1]];
        let mut nearest = None;
        let mut nearest_dist = f64::INFINITY;
        for (idx, point) in points.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let d = last.dist(point);
            if d < nearest_dist {
                nearest = Some(idx);
                nearest_dist = d;
            }
        }

        // The order is still shorter than n, so an unvisited index exists.
        let Some(next) = nearest else { break };
        order.push(next);
        visited[next] = true;
    }

    let tour = Tour::from_order(points, order);
    log::debug!("greedy: done n={n} length={:.2}", tour.length());
    tour
}
