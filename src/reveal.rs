use std::collections::HashSet;
use std::hash::Hash;

use crate::observer::IntersectionReport;

/// Class on elements that fade in the first time they scroll into view.
pub const ANIMATE_CLASS: &str = "animate-on-scroll";
pub const REVEALED_CLASS: &str = "is-visible";

/// One-way record of which elements have been revealed.
#[derive(Debug)]
pub struct RevealSet<T> {
    revealed: HashSet<T>,
}

impl<T: Eq + Hash + Clone> RevealSet<T> {
    pub fn new() -> Self {
        Self { revealed: HashSet::new() }
    }

    /// Applies a batch of reports and returns the targets revealed by it,
    /// in report order. Non-intersecting reports never un-reveal anything.
    pub fn apply<I>(&mut self, reports: I) -> Vec<T>
    where
        I: IntoIterator<Item = IntersectionReport<T>>,
    {
        reports
            .into_iter()
            .filter(|r| r.is_intersecting)
            .filter_map(|r| self.revealed.insert(r.target.clone()).then_some(r.target))
            .collect()
    }

    pub fn is_revealed(&self, target: &T) -> bool {
        self.revealed.contains(target)
    }
}

impl<T: Eq + Hash + Clone> Default for RevealSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(target: usize, is_intersecting: bool) -> IntersectionReport<usize> {
        IntersectionReport { target, is_intersecting }
    }

    #[test]
    fn reveals_on_first_intersection_only() {
        let mut set = RevealSet::new();
        assert_eq!(set.apply([report(0, true), report(1, false)]), vec![0]);
        assert_eq!(set.apply([report(0, true), report(1, true)]), vec![1]);
        assert!(set.apply([report(0, true)]).is_empty());
        assert!(set.is_revealed(&0) && set.is_revealed(&1));
    }

    #[test]
    fn leaving_the_viewport_keeps_reveal() {
        let mut set = RevealSet::new();
        set.apply([report(3, true)]);
        set.apply([report(3, false)]);
        assert!(set.is_revealed(&3));
    }

    #[test]
    fn unseen_elements_are_not_revealed() {
        let mut set: RevealSet<usize> = RevealSet::default();
        set.apply([report(5, false)]);
        assert!(!set.is_revealed(&5));
    }
}
