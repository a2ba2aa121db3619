//! The ordered record of tentative assignments.

use crate::csp::constraints::Candidates;
use std::fmt;
use std::ops::Index;

/// One tentative assignment, captured at the moment the value was placed.
///
/// `domain_size` and `degree` are the figures the selector computed for the
/// cell before anything was written into it, and `candidates` is the full
/// legal-value list considered at that time; all three are shared by every
/// step pushed for the same decision point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Row of the assigned cell.
    pub row: usize,
    /// Column of the assigned cell.
    pub col: usize,
    /// Legal-value count of the cell when it was selected.
    pub domain_size: usize,
    /// Degree of the cell when it was selected.
    pub degree: usize,
    /// The value tentatively placed.
    pub value: u8,
    /// Every legal value considered for the cell at that time, ascending.
    pub candidates: Candidates,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Variable: ({}, {}), Domain size: {}, Degree: {}, Assigned Value: {}",
            self.row, self.col, self.domain_size, self.degree, self.value
        )
    }
}

/// Insertion-ordered trail of [`Step`]s.
///
/// Steps are pushed as values are placed and popped as placements are
/// undone, so abandoned branches leave no trace behind: after a successful
/// solve the trail is exactly the root-to-solution path in fill order, and
/// after a failed solve it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trail(Vec<Step>);

impl Trail {
    /// Creates an empty trail.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a step.
    pub fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    /// Removes and returns the most recent step.
    pub fn pop(&mut self) -> Option<Step> {
        self.0.pop()
    }

    /// Iterates the steps in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.0.iter()
    }

    /// All recorded steps, in insertion order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// The first `n` steps (or fewer, if the trail is shorter).
    #[must_use]
    pub fn first(&self, n: usize) -> &[Step] {
        &self.0[..n.min(self.0.len())]
    }
}

impl Index<usize> for Trail {
    type Output = Step;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn step(row: usize, col: usize, value: u8) -> Step {
        Step {
            row,
            col,
            domain_size: 2,
            degree: 10,
            value,
            candidates: smallvec![value, value + 1],
        }
    }

    #[test]
    fn push_and_pop_are_lifo() {
        let mut trail = Trail::new();
        trail.push(step(0, 0, 1));
        trail.push(step(0, 1, 2));
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.pop().map(|s| s.value), Some(2));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].value, 1);
    }

    #[test]
    fn first_clamps_to_the_trail_length() {
        let mut trail = Trail::new();
        trail.push(step(3, 4, 5));
        assert_eq!(trail.first(0).len(), 0);
        assert_eq!(trail.first(1).len(), 1);
        assert_eq!(trail.first(10).len(), 1);
    }

    #[test]
    fn step_display_matches_report_format() {
        let rendered = step(2, 7, 4).to_string();
        assert_eq!(
            rendered,
            "Variable: (2, 7), Domain size: 2, Degree: 10, Assigned Value: 4"
        );
    }
}
