use yew::prelude::*;

use crate::observer::{self, query_all, Subscription};
use crate::reveal::{RevealSet, ANIMATE_CLASS, REVEALED_CLASS};
use crate::section::ActiveSectionTracker;

/// Fades in every `.animate-on-scroll` element under `scope` the first time
/// it becomes visible. The observer lives as long as the calling component.
#[hook]
pub fn use_scroll_reveal(scope: &'static str) {
    use_effect_with_deps(
        move |_| {
            let targets = query_all(&format!("{} .{}", scope, ANIMATE_CLASS));
            let mut revealed = RevealSet::new();

            let subscription = Subscription::observe(targets, &observer::REVEAL, move |reports, subscriber| {
                for index in revealed.apply(reports) {
                    if let Some(element) = subscriber.element(index) {
                        if let Err(e) = element.class_list().add_1(REVEALED_CLASS) {
                            log::debug!("Could not mark element revealed: {:?}", e);
                        }
                    }
                    subscriber.unobserve(index);
                }
            });

            let subscription = match subscription {
                Ok(subscription) => {
                    log::debug!("Watching {} elements in {} for reveal", subscription.len(), scope);
                    Some(subscription)
                }
                Err(e) => {
                    log::warn!("Scroll reveal unavailable for {}: {:?}", scope, e);
                    None
                }
            };

            move || drop(subscription)
        },
        (),
    );
}

/// Id of the home-view section currently under the trigger line. Only
/// observes while `enabled`; the last known id is kept otherwise.
#[hook]
pub fn use_active_section(enabled: bool) -> String {
    let tracker = use_mut_ref(ActiveSectionTracker::default);
    let active = use_state(|| tracker.borrow().active().to_string());

    {
        let tracker = tracker.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |enabled| {
                let subscription = if *enabled { spy_sections(tracker, active) } else { None };
                move || drop(subscription)
            },
            enabled,
        );
    }

    (*active).clone()
}

fn spy_sections(
    tracker: std::rc::Rc<std::cell::RefCell<ActiveSectionTracker>>,
    active: UseStateHandle<String>,
) -> Option<Subscription> {
    let sections = query_all("section[id]");
    let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();

    let subscription = Subscription::observe(sections, &observer::SECTION_SPY, move |reports, _| {
        let reports = reports.into_iter().map(|r| observer::IntersectionReport {
            target: ids[r.target].as_str(),
            is_intersecting: r.is_intersecting,
        });
        let mut tracker = tracker.borrow_mut();
        if tracker.apply(reports) {
            active.set(tracker.active().to_string());
        }
    });

    match subscription {
        Ok(subscription) => Some(subscription),
        Err(e) => {
            log::warn!("Section tracking unavailable: {:?}", e);
            None
        }
    }
}
