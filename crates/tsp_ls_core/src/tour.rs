use crate::{geometry::TourGeometry, node::Point};

/// Spike threshold used for metrics logging: edges longer than this multiple
/// of the average edge count as outliers.
pub const DEFAULT_SPIKE_THRESHOLD_FACTOR: f64 = 10.0;

/// Cyclic visiting order over a point set, with its cached total length.
///
/// `order` is always a permutation of `0..points.len()`; the edge after the
/// last index wraps back to the first. The cached length is kept consistent
/// with a full recomputation through incremental reversal bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Builds a tour from an explicit visiting order, summing its cycle
    /// length from scratch.
    pub fn from_order(points: &[Point], order: Vec<usize>) -> Self {
        let length = TourGeometry::tour_length(points, &order);
        Self { order, length }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Length change of reversing `order[start..=end]`, computed from the
    /// four affected edges only: the two broken edges around the segment and
    /// the two new edges formed after reversal. All interior edges keep
    /// their length, so this is O(1) distance work.
    ///
    /// Caller contract: `start <= end < self.len()`.
    pub fn reversal_delta(&self, points: &[Point], start: usize, end: usize) -> f64 {
        let n = self.order.len();
        debug_assert!(start <= end && end < n);
        if start == 0 && end == n - 1 {
            // Reversing the whole cycle re-creates the same two edges.
            return 0.0;
        }

        let prev = points[self.order[(start + n - 1) % n]];
        let first = points[self.order[start]];
        let last = points[self.order[end]];
        let next = points[self.order[(end + 1) % n]];

        (prev.dist(&last) + first.dist(&next)) - (prev.dist(&first) + last.dist(&next))
    }

    /// Reverses `order[start..=end]` in place and updates the cached length
    /// incrementally. Reversal never drops or duplicates indices, so the
    /// permutation invariant is preserved.
    pub fn apply_reversal(&mut self, points: &[Point], start: usize, end: usize) {
        let delta = self.reversal_delta(points, start, end);
        self.order[start..=end].reverse();
        self.length += delta;
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub total: f64,
    pub longest: f64,
    pub average: f64,
    pub threshold: f64,
    pub spikes: usize,
}

/// Computes and logs cycle-edge statistics for a visiting order.
pub fn cycle_metrics(points: &[Point], order: &[usize], threshold_factor: f64) -> TourMetrics {
    let n = order.len();
    if n < 2 {
        log::info!("metrics: n={n} so there's nothing to report");
        return TourMetrics::default();
    }

    let distances: Vec<f64> = (0..n)
        .map(|i| points[order[i]].dist(&points[order[(i + 1) % n]]))
        .collect();
    let total: f64 = distances.iter().sum();
    let average = total / (n as f64);
    let threshold = average * threshold_factor;
    let spikes = distances.iter().filter(|d| **d > threshold).count();
    let longest = distances.iter().copied().fold(0.0_f64, f64::max);

    log::info!(
        "metrics: n={n} total={total:.2} longest={longest:.2} avg={average:.2} spike_threshold={threshold:.2} spikes={spikes}",
    );

    TourMetrics {
        total,
        longest,
        average,
        threshold,
        spikes,
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SPIKE_THRESHOLD_FACTOR, Tour, TourMetrics, cycle_metrics};
    use crate::{geometry::TourGeometry, node::Point};

    fn scattered_points() -> Vec<Point> {
        vec![
            Point::new(95.0129, 61.5432),
            Point::new(23.1139, 79.1937),
            Point::new(60.6843, 92.1813),
            Point::new(48.5982, 73.8207),
            Point::new(89.1299, 17.6266),
            Point::new(76.2097, 40.5706),
            Point::new(45.6468, 93.5470),
            Point::new(1.8504, 91.6904),
        ]
    }

    fn assert_is_permutation(order: &[usize], n: usize) {
        let mut seen = vec![false; n];
        assert_eq!(order.len(), n);
        for &idx in order {
            assert!(!seen[idx], "index {idx} appears twice");
            seen[idx] = true;
        }
    }

    #[test]
    fn from_order_sums_the_cycle() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let tour = Tour::from_order(&points, vec![0, 1, 2, 3]);
        assert!((tour.length() - 4.0).abs() < 1e-12);
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn reversal_delta_matches_full_recomputation_for_every_pair() {
        let points = scattered_points();
        let n = points.len();
        let tour = Tour::from_order(&points, (0..n).collect());

        for start in 0..n {
            for end in start..n {
                let delta = tour.reversal_delta(&points, start, end);
                let mut reversed = tour.order().to_vec();
                reversed[start..=end].reverse();
                let recomputed = TourGeometry::tour_length(&points, &reversed);
                assert!(
                    (tour.length() + delta - recomputed).abs() < 1e-9,
                    "pair ({start}, {end}): incremental {} vs recomputed {recomputed}",
                    tour.length() + delta,
                );
            }
        }
    }

    #[test]
    fn apply_reversal_updates_length_incrementally() {
        let points = scattered_points();
        let n = points.len();
        let mut tour = Tour::from_order(&points, (0..n).collect());

        for (start, end) in [(1, 4), (0, 5), (2, 7), (3, 3), (0, 7)] {
            tour.apply_reversal(&points, start, end);
            let recomputed = TourGeometry::tour_length(&points, tour.order());
            assert!((tour.length() - recomputed).abs() < 1e-9);
            assert_is_permutation(tour.order(), n);
        }
    }

    #[test]
    fn full_cycle_reversal_is_a_no_op_on_length() {
        let points = scattered_points();
        let tour = Tour::from_order(&points, (0..points.len()).collect());
        assert_eq!(tour.reversal_delta(&points, 0, points.len() - 1), 0.0);
    }

    #[test]
    fn wraparound_segment_start_uses_the_last_cycle_edge() {
        let points = scattered_points();
        let n = points.len();
        let tour = Tour::from_order(&points, (0..n).collect());

        let delta = tour.reversal_delta(&points, 0, 3);
        let mut reversed = tour.order().to_vec();
        reversed[0..=3].reverse();
        let recomputed = TourGeometry::tour_length(&points, &reversed);
        assert!((tour.length() + delta - recomputed).abs() < 1e-9);
    }

    #[test]
    fn cycle_metrics_reports_edge_statistics() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let metrics = cycle_metrics(&points, &[0, 1, 2, 3], DEFAULT_SPIKE_THRESHOLD_FACTOR);
        assert!((metrics.total - 4.0).abs() < 1e-12);
        assert!((metrics.longest - 1.0).abs() < 1e-12);
        assert!((metrics.average - 1.0).abs() < 1e-12);
        assert_eq!(metrics.spikes, 0);
    }

    #[test]
    fn cycle_metrics_on_degenerate_tour_is_zeroed() {
        let points = vec![Point::new(1.0, 1.0)];
        let metrics = cycle_metrics(&points, &[0], DEFAULT_SPIKE_THRESHOLD_FACTOR);
        assert_eq!(metrics, TourMetrics::default());
    }
}
