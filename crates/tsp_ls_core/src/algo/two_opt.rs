use std::time::{Duration, Instant};

use crate::{node::Point, tour::Tour};

/// Below this size no segment reversal can change the cycle length.
const MIN_TOUR_SIZE_FOR_2OPT: usize = 4;
/// Accepted moves must shorten the tour by more than this.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    fn new(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    fn reached(&self) -> bool {
        self.started.elapsed() >= self.budget
    }
}

/// First-improvement 2-opt local search over `tour`, in place.
///
/// Scans candidate pairs `(start, end)` with `start < end` in lexicographic
/// order, applies the first strictly shortening reversal, and restarts the
/// scan from the beginning. Stops at a local optimum (one full pass with no
/// improving move) or once `time_limit` has elapsed, whichever comes first.
/// The budget is checked against a monotonic clock only between passes, so a
/// pass already underway always completes.
///
/// Timing out is a normal termination path: the tour is valid after every
/// accepted move, and each move strictly decreases the length, so the best
/// tour found so far is always the current one.
pub(crate) fn improve(tour: &mut Tour, points: &[Point], time_limit: Duration) {
    let n = tour.len();
    if n < MIN_TOUR_SIZE_FOR_2OPT {
        return;
    }

    let deadline = Deadline::new(time_limit);
    let mut passes = 0usize;
    let mut accepted = 0usize;

    let reason = 'scan: loop {
        if deadline.reached() {
            break 'scan "deadline";
        }
        passes += 1;

        let mut improved = false;
        'pass: for start in 0..n - 1 {
            for end in (start + 1)..n {
                if tour.reversal_delta(points, start, end) < -IMPROVEMENT_EPSILON {
                    tour.apply_reversal(points, start, end);
                    accepted += 1;
                    improved = true;
                    break 'pass;
                }
            }
        }

        if !improved {
            break 'scan "local_optimum";
        }
    };

    log::info!(
        "two_opt: done passes={passes} accepted={accepted} length={:.2} reason={reason}",
        tour.length()
    );
}
