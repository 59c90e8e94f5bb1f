use crate::{
    algo::{greedy, two_opt},
    io::options::{SolverMode, SolverOptions},
    node::Point,
    tour::Tour,
};

/// Final solver output: the visiting order, its cycle length, and whether
/// the result is a certified optimum (never, for this heuristic pipeline).
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub tour: Vec<usize>,
    pub length: f64,
    pub optimal: bool,
}

impl Solution {
    fn from_tour(tour: Tour) -> Self {
        Self {
            length: tour.length(),
            optimal: false,
            tour: tour.into_order(),
        }
    }
}

/// Runs the configured pipeline over `points` and returns the final tour.
///
/// Coordinates must be finite; the text input layer enforces this before
/// points reach the solver. An empty slice yields the trivial empty
/// solution rather than an error.
pub fn solve(points: &[Point], options: &SolverOptions) -> Solution {
    if points.is_empty() {
        log::warn!("solver: empty point set, returning trivial solution");
        return Solution::from_tour(Tour::default());
    }

    log::info!("solver: start mode={} n={}", options.mode, points.len());

    let mut tour = match options.mode {
        SolverMode::Trivial => greedy::trivial_tour(points),
        SolverMode::Greedy | SolverMode::TwoOpt => greedy::nearest_neighbor_tour(points),
    };

    if options.mode == SolverMode::TwoOpt {
        two_opt::improve(&mut tour, points, options.time_limit());
    }

    Solution::from_tour(tour)
}
