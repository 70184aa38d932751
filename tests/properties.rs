//! Property tests for the view controller and the two scroll observers.

use physiomatrix::observer::IntersectionReport;
use physiomatrix::reveal::RevealSet;
use physiomatrix::section::ActiveSectionTracker;
use physiomatrix::view::{NavTarget, ScrollAction, View, ViewController};
use proptest::prelude::*;

const SECTIONS: &[&str] = &["home", "about", "features", "services", "contact"];

fn nav_target() -> impl Strategy<Value = NavTarget> {
    prop_oneof![
        Just(NavTarget::View(View::Home)),
        Just(NavTarget::View(View::Experts)),
        prop::sample::select(SECTIONS).prop_map(NavTarget::anchor),
    ]
}

fn section_report() -> impl Strategy<Value = IntersectionReport<&'static str>> {
    (prop::sample::select(SECTIONS), any::<bool>())
        .prop_map(|(target, is_intersecting)| IntersectionReport { target, is_intersecting })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Anchors always land on the home view; view targets land on themselves.
    #[test]
    fn navigation_lands_on_expected_view(targets in prop::collection::vec(nav_target(), 0..30)) {
        let mut controller = ViewController::default();
        prop_assert_eq!(controller.view(), View::Home);

        for target in targets {
            let was_home = controller.view() == View::Home;
            controller.navigate(target.clone());
            let request = controller.pending_scroll().unwrap();
            match target {
                NavTarget::View(view) => {
                    prop_assert_eq!(controller.view(), view);
                    prop_assert_eq!(&request.action, &ScrollAction::Top);
                }
                NavTarget::Anchor(id) => {
                    prop_assert_eq!(controller.view(), View::Home);
                    prop_assert_eq!(&request.action, &ScrollAction::IntoView(id));
                    prop_assert_eq!(request.delay_ms.is_some(), !was_home);
                }
            }
            prop_assert!(!controller.menu_open());
        }
    }

    /// Once revealed, an element stays revealed whatever comes next.
    #[test]
    fn reveal_is_monotonic(batches in prop::collection::vec(
        prop::collection::vec((0usize..12, any::<bool>()), 0..8), 0..20)
    ) {
        let mut set = RevealSet::new();
        let mut seen = Vec::new();

        for batch in batches {
            let newly = set.apply(batch.into_iter().map(|(target, is_intersecting)| {
                IntersectionReport { target, is_intersecting }
            }));
            for target in &newly {
                prop_assert!(!seen.contains(target));
            }
            seen.extend(newly);
            for target in &seen {
                prop_assert!(set.is_revealed(target));
            }
        }
    }

    /// The active section is the last one reported intersecting, or "home".
    #[test]
    fn last_intersecting_section_wins(reports in prop::collection::vec(section_report(), 0..40)) {
        let mut tracker = ActiveSectionTracker::default();
        let expected = reports
            .iter()
            .rev()
            .find(|r| r.is_intersecting)
            .map(|r| r.target)
            .unwrap_or("home");

        for chunk in reports.chunks(3) {
            tracker.apply(chunk.iter().cloned());
        }
        prop_assert_eq!(tracker.active(), expected);
    }
}
