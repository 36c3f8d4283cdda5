//! Text records for the progress stream of a solve.

use crate::solver::{Progress, Solution, SolverParameters};

/// Iterations 1, 2, 4, 8, ... are reported.
#[derive(Copy, Clone, Debug)]
pub struct PrintSchedule {
    next: usize,
}

impl Default for PrintSchedule {
    fn default() -> Self {
        PrintSchedule { next: 1 }
    }
}

impl PrintSchedule {
    /// True if `iteration` should be reported, advancing the schedule.
    pub fn due(&mut self, iteration: usize) -> bool {
        if iteration == self.next {
            self.next *= 2;
            true
        } else {
            false
        }
    }
}

pub fn banner(params: &SolverParameters) -> String {
    format!(
        "HEATED_PLATE\n\
         \x20 Steady state temperature distribution on a rectangular plate.\n\
         \n\
         \x20 Spatial grid of {} by {} points.\n\
         \x20 The iteration will be repeated until the change is <= {:e}\n\
         \x20 Number of threads = {}",
        params.rows, params.cols, params.tolerance, params.threads
    )
}

pub fn mean_record(mean: f64) -> String {
    format!("  Mean Temperature = {:.6}", mean)
}

pub fn table_header() -> &'static str {
    " Iteration  Change in temperature"
}

pub fn progress_record(progress: &Progress) -> String {
    format!("  {:>8}  {:.6}", progress.iteration, progress.diff)
}

pub fn final_record(solution: &Solution) -> String {
    format!(
        "  {:>8}  {:.6}\n\
         \n\
         \x20 Error tolerance achieved.\n\
         \x20 Wallclock time = {:.6}",
        solution.iterations,
        solution.diff,
        solution.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::domain::OwnedDomain;
    use crate::util::AABB;
    use std::time::Duration;

    #[test]
    fn schedule_test() {
        let mut schedule = PrintSchedule::default();
        let due: Vec<usize> = (1..=100).filter(|i| schedule.due(*i)).collect();
        assert_eq!(due, vec![1, 2, 4, 8, 16, 32, 64]);
    }

    #[test]
    fn progress_record_test() {
        let p = Progress {
            iteration: 16,
            diff: 0.25,
        };
        assert_eq!(progress_record(&p), "        16  0.250000");
    }

    #[test]
    fn final_record_test() {
        let solution = Solution {
            grid: OwnedDomain::new(AABB::grid(3, 3)),
            iterations: 1234,
            diff: 0.000999,
            mean: 75.0,
            elapsed: Duration::from_millis(1500),
        };
        let r = final_record(&solution);
        assert!(r.starts_with("      1234  0.000999\n"));
        assert!(r.contains("Error tolerance achieved."));
        assert!(r.ends_with("Wallclock time = 1.500000"));
    }

    #[test]
    fn banner_test() {
        let b = banner(&SolverParameters::default());
        assert!(b.contains("Spatial grid of 500 by 500 points."));
        assert!(b.contains("<= 1e-3"));
        assert!(b.contains("Number of threads = 4"));
        assert_eq!(mean_record(68.75), "  Mean Temperature = 68.750000");
    }
}
