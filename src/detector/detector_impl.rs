use crate::core::CycleResult;
use crate::list::LinkedList;

/// Detector for finding cycles in singly linked lists
///
/// Implements Floyd's tortoise-and-hare algorithm over the list's arena.
/// Node identity is index equality, which makes the phase-1 meeting test
/// a plain `==` with no pointer comparison involved.
pub struct CycleDetector;

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self
    }

    /// Detect whether `list` contains a cycle
    ///
    /// Never fails: every well-formed list produces a result, and absence
    /// of a cycle is a normal outcome rather than an error.
    pub fn detect(&self, list: &LinkedList) -> CycleResult {
        // Lists too short to hold a cycle are settled before the hare ever
        // needs a second link to exist.
        let Some(head) = list.head() else {
            return CycleResult::acyclic();
        };
        if list.next(head).is_none() {
            return CycleResult::acyclic();
        }

        let Some(meeting) = self.find_meeting_point(list, head) else {
            return CycleResult::acyclic();
        };

        let (entry, position) = self.find_cycle_entry(list, head, meeting);
        CycleResult::cycle_at(list.value(entry), position)
    }

    /// Phase 1: advance slow by one and fast by two until they meet inside
    /// the cycle, or fast runs off the end of an acyclic list.
    fn find_meeting_point(&self, list: &LinkedList, head: usize) -> Option<usize> {
        let mut slow = head;
        let mut fast = head;

        // Once both cursors are inside the cycle, fast gains one link per
        // step, so a meeting happens within one lap of the cycle.
        while let Some(step) = list.next(fast)
            && let Some(two_steps) = list.next(step)
        {
            slow = list.next(slow).unwrap_or(slow);
            fast = two_steps;
            if slow == fast {
                return Some(slow);
            }
        }

        None
    }

    /// Phase 2: the distance from the head to the entry equals the
    /// distance from the meeting point to the entry (mod cycle length), so
    /// two unit-speed cursors converge exactly at the entry node.
    fn find_cycle_entry(&self, list: &LinkedList, head: usize, meeting: usize) -> (usize, usize) {
        let mut start = head;
        let mut slow = meeting;
        let mut position = 0;

        while start != slow {
            // Both cursors sit on nodes with a successor: start walks the
            // straight run into the cycle, slow stays inside it.
            start = list.next(start).unwrap_or(start);
            slow = list.next(slow).unwrap_or(slow);
            position += 1;
        }

        (start, position)
    }
}
