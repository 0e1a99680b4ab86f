//! Run statistics.
//!
//! Summarizes how many requests a run satisfied, computed from the
//! persisted state rather than the engine's return value, so it can be
//! recomputed at any time after a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total | Number of requests |
//! | Successful | Requests whose id has an assignment |
//! | Failed | Total - Successful |
//! | Success Rate | Successful / Total * 100 (0 if Total = 0) |

use std::collections::HashSet;
use std::fmt;

use crate::models::{Assignment, Request, RequestId};
use crate::store::{ScheduleStore, StoreResult};

/// Outcome metrics for a scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStats {
    /// Number of requests considered.
    pub total_requests: usize,
    /// Requests with at least one assignment.
    pub successful_requests: usize,
    /// Requests without an assignment.
    pub failed_requests: usize,
    /// Percentage of requests placed (0.0..=100.0).
    pub success_rate: f64,
    /// `class_id (teacher)` for each unplaced request, in input order.
    pub failed_request_descriptions: Vec<String>,
}

impl ScheduleStats {
    /// Computes statistics from requests and their assignments.
    ///
    /// # Arguments
    /// * `requests` - All requests, in the order failures should be listed.
    /// * `assignments` - All assignments of the run.
    pub fn calculate(requests: &[Request], assignments: &[Assignment]) -> Self {
        let scheduled: HashSet<RequestId> = assignments.iter().map(|a| a.request_id).collect();

        // Assignments of requests no longer listed do not count.
        let total_requests = requests.len();
        let successful_requests = requests
            .iter()
            .filter(|r| scheduled.contains(&r.id))
            .count();
        let failed_requests = total_requests - successful_requests;

        let success_rate = if total_requests == 0 {
            0.0
        } else {
            successful_requests as f64 * 100.0 / total_requests as f64
        };

        let failed_request_descriptions = requests
            .iter()
            .filter(|r| !scheduled.contains(&r.id))
            .map(Request::describe)
            .collect();

        Self {
            total_requests,
            successful_requests,
            failed_requests,
            success_rate,
            failed_request_descriptions,
        }
    }

    /// Computes statistics from the store's current requests and assignments.
    pub fn from_store<S: ScheduleStore + ?Sized>(store: &S) -> StoreResult<Self> {
        let requests = store.list_requests()?;
        let assignments = store.list_assignments()?;
        Ok(Self::calculate(&requests, &assignments))
    }

    /// Whether every request was placed.
    pub fn all_placed(&self) -> bool {
        self.failed_requests == 0
    }
}

impl fmt::Display for ScheduleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total requests: {}", self.total_requests)?;
        writeln!(f, "Placed:         {}", self.successful_requests)?;
        writeln!(f, "Failed:         {}", self.failed_requests)?;
        write!(f, "Success rate:   {:.2}%", self.success_rate)?;
        if !self.failed_request_descriptions.is_empty() {
            write!(f, "\nUnplaced:")?;
            for description in &self.failed_request_descriptions {
                write!(f, "\n  - {description}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentId, LabId, NewRequest, TimeSlot};
    use crate::scheduler::AllocationEngine;
    use crate::store::InMemoryStore;

    fn make_request(id: u32, class_id: &str, teacher: &str) -> Request {
        Request::new(RequestId(id), class_id, 30, teacher)
    }

    fn make_assignment(id: u32, request_id: u32) -> Assignment {
        Assignment::new(
            AssignmentId(id),
            RequestId(request_id),
            LabId(1),
            TimeSlot::new(9, id as u8 % 5, 0),
        )
    }

    #[test]
    fn test_stats_two_of_three() {
        let requests = vec![
            make_request(1, "B210307", "Zhu"),
            make_request(2, "B210308", "Hu"),
            make_request(3, "B210309", "Dai"),
        ];
        let assignments = vec![make_assignment(1, 1), make_assignment(2, 3)];

        let stats = ScheduleStats::calculate(&requests, &assignments);
        assert_eq!(stats.total_requests, 3);
        assert_eq!(stats.successful_requests, 2);
        assert_eq!(stats.failed_requests, 1);
        assert!((stats.success_rate - 66.666_666).abs() < 1e-3);
        assert_eq!(stats.failed_request_descriptions, vec!["B210308 (Hu)"]);
        assert!(!stats.all_placed());
    }

    #[test]
    fn test_stats_empty() {
        let stats = ScheduleStats::calculate(&[], &[]);
        assert_eq!(stats.total_requests, 0);
        assert_eq!(stats.successful_requests, 0);
        assert!((stats.success_rate - 0.0).abs() < 1e-10);
        assert!(stats.failed_request_descriptions.is_empty());
        assert!(stats.all_placed());
    }

    #[test]
    fn test_stats_counts_distinct_request_ids() {
        let requests = vec![make_request(1, "C1", "T1"), make_request(2, "C2", "T2")];
        let assignments = vec![make_assignment(1, 1), make_assignment(2, 1)];

        let stats = ScheduleStats::calculate(&requests, &assignments);
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_requests, 1);
        assert!((stats.success_rate - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_failed_descriptions_follow_input_order() {
        let requests = vec![
            make_request(3, "C3", "T3"),
            make_request(1, "C1", "T1"),
            make_request(2, "C2", "T2"),
        ];
        let stats = ScheduleStats::calculate(&requests, &[make_assignment(1, 1)]);
        assert_eq!(
            stats.failed_request_descriptions,
            vec!["C3 (T3)", "C2 (T2)"]
        );
    }

    #[test]
    fn test_from_store_after_run() {
        let mut store = InMemoryStore::new();
        store.add_laboratory("A301", 40).unwrap();
        store
            .add_request(NewRequest::new("B210307", 33, "Zhu").with_priority(1))
            .unwrap();
        store
            .add_request(NewRequest::new("BIG", 80, "Wang").with_priority(2))
            .unwrap();

        AllocationEngine::new().run(&mut store).unwrap();
        let stats = ScheduleStats::from_store(&store).unwrap();
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_request_descriptions, vec!["BIG (Wang)"]);
    }

    #[test]
    fn test_assignments_of_unknown_requests_ignored() {
        let requests = vec![make_request(2, "BIG", "T2")];
        let stats = ScheduleStats::calculate(&requests, &[make_assignment(1, 1)]);
        assert_eq!(stats.total_requests, 1);
        assert_eq!(stats.successful_requests, 0);
        assert_eq!(stats.failed_requests, 1);
        assert!((stats.success_rate - 0.0).abs() < 1e-10);
        assert_eq!(stats.failed_request_descriptions, vec!["BIG (T2)"]);
    }

    #[test]
    fn test_from_store_after_deleting_placed_request() {
        let mut store = InMemoryStore::new();
        store.add_laboratory("A301", 40).unwrap();
        let placed = store
            .add_request(NewRequest::new("C1", 30, "T1").with_priority(1))
            .unwrap();
        store
            .add_request(NewRequest::new("BIG", 99, "T2").with_priority(2))
            .unwrap();
        AllocationEngine::new().run(&mut store).unwrap();

        store.delete_request(placed).unwrap();
        let stats = ScheduleStats::from_store(&store).unwrap();
        assert_eq!(stats.successful_requests, 0);
        assert_eq!(stats.failed_requests, 1);
        assert_eq!(stats.failed_request_descriptions, vec!["BIG (T2)"]);
        assert_eq!(
            stats.successful_requests + stats.failed_requests,
            stats.total_requests
        );
    }

    #[test]
    fn test_display() {
        let requests = vec![make_request(1, "C1", "T1"), make_request(2, "C2", "T2")];
        let stats = ScheduleStats::calculate(&requests, &[make_assignment(1, 1)]);
        let text = stats.to_string();
        assert!(text.contains("Success rate:   50.00%"));
        assert!(text.ends_with("  - C2 (T2)"));
    }
}
