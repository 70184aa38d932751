use crate::observer::IntersectionReport;
use crate::view::View;

pub const DEFAULT_SECTION: &str = "home";

/// Scroll-spy state for the home view: the id of the section the visitor is
/// currently reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    active: String,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION.to_string(),
        }
    }
}

impl ActiveSectionTracker {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Applies reports in order; the last intersecting one wins. Returns
    /// true when the active id changed.
    pub fn apply<S, I>(&mut self, reports: I) -> bool
    where
        S: AsRef<str>,
        I: IntoIterator<Item = IntersectionReport<S>>,
    {
        let before = self.active.clone();
        for report in reports {
            if report.is_intersecting {
                self.active = report.target.as_ref().to_string();
            }
        }
        self.active != before
    }
}

/// Whether a header link should be highlighted.
///
/// `link_view` is the view the link switches to (if any), `link_anchor` the
/// section id it scrolls to (if any).
pub fn is_link_active(link_view: Option<View>, link_anchor: Option<&str>, view: View, active_section: &str) -> bool {
    match view {
        View::Experts => link_view == Some(View::Experts),
        View::Home => {
            let anchor = link_anchor.map(|a| a.trim_start_matches('#'));
            (link_view == Some(View::Home) && active_section == DEFAULT_SECTION)
                || anchor == Some(active_section)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, is_intersecting: bool) -> IntersectionReport<&str> {
        IntersectionReport { target: id, is_intersecting }
    }

    #[test]
    fn defaults_to_home() {
        assert_eq!(ActiveSectionTracker::default().active(), "home");
    }

    #[test]
    fn last_intersecting_report_wins() {
        let mut tracker = ActiveSectionTracker::default();
        assert!(tracker.apply([report("about", true), report("features", true), report("services", false)]));
        assert_eq!(tracker.active(), "features");
    }

    #[test]
    fn leaving_sections_do_not_change_active() {
        let mut tracker = ActiveSectionTracker::default();
        tracker.apply([report("contact", true)]);
        assert!(!tracker.apply([report("contact", false), report("about", false)]));
        assert_eq!(tracker.active(), "contact");
    }

    #[test]
    fn experts_link_active_only_on_experts_view() {
        assert!(is_link_active(Some(View::Experts), None, View::Experts, "home"));
        assert!(!is_link_active(Some(View::Experts), None, View::Home, "home"));
        assert!(!is_link_active(Some(View::Home), Some("#home"), View::Experts, "home"));
    }

    #[test]
    fn anchor_links_follow_active_section() {
        assert!(is_link_active(Some(View::Home), Some("#home"), View::Home, "home"));
        assert!(is_link_active(None, Some("#services"), View::Home, "services"));
        assert!(!is_link_active(None, Some("#about"), View::Home, "services"));
        assert!(!is_link_active(Some(View::Home), Some("#home"), View::Home, "contact"));
    }
}
