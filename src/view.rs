//! Which page is on screen, and where the viewport should go after a
//! navigation click.
//!
//! `ViewController` is a plain reducer: it never touches the DOM. Every
//! navigation leaves a [`ScrollRequest`] behind which the app shell carries
//! out through a [`Viewport`] once the new view has rendered.

use std::rc::Rc;

use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Experts,
}

/// What a nav link, the brand logo or a footer link points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    View(View),
    Anchor(String),
}

impl NavTarget {
    /// Accepts both `"contact"` and `"#contact"`.
    pub fn anchor(anchor: &str) -> Self {
        NavTarget::Anchor(anchor.trim_start_matches('#').to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    Top,
    IntoView(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub action: ScrollAction,
    /// Set when the target lives on a view that is only now being mounted.
    pub delay_ms: Option<u32>,
    pub seq: u32,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ViewController {
    view: View,
    menu_open: bool,
    pending_scroll: Option<ScrollRequest>,
    seq: u32,
}

pub enum NavAction {
    Navigate(NavTarget),
    ToggleMenu,
}

impl ViewController {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn pending_scroll(&self) -> Option<&ScrollRequest> {
        self.pending_scroll.as_ref()
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            log::info!("Switching view to {:?}", view);
        }
        self.view = view;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn navigate(&mut self, target: NavTarget) {
        self.menu_open = false;

        let (action, delay_ms) = match target {
            NavTarget::View(view) => {
                self.set_view(view);
                (ScrollAction::Top, None)
            }
            NavTarget::Anchor(id) if self.view != View::Home => {
                self.set_view(View::Home);
                (ScrollAction::IntoView(id), Some(config::ANCHOR_SCROLL_DELAY_MS))
            }
            NavTarget::Anchor(id) => (ScrollAction::IntoView(id), None),
        };

        self.seq = self.seq.wrapping_add(1);
        self.pending_scroll = Some(ScrollRequest {
            action,
            delay_ms,
            seq: self.seq,
        });
    }
}

impl Reducible for ViewController {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Navigate(target) => next.navigate(target),
            NavAction::ToggleMenu => next.toggle_menu(),
        }
        next.into()
    }
}

/// Shared handle to the controller, provided by `App`.
pub type ViewContext = UseReducerHandle<ViewController>;

/// Scrolling capability the shell executes scroll requests against.
pub trait Viewport {
    fn scroll_to_top(&self);

    /// Returns false when no element carries `id`.
    fn scroll_into_view(&self, id: &str) -> bool;
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let mut options = web_sys::ScrollToOptions::new();
            options.top(0.0).behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let mut options = web_sys::ScrollIntoViewOptions::new();
        options.behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn perform_scroll(viewport: &dyn Viewport, action: &ScrollAction) {
    match action {
        ScrollAction::Top => viewport.scroll_to_top(),
        ScrollAction::IntoView(id) => {
            if !viewport.scroll_into_view(id) {
                log::debug!("No element with id '{}' to scroll to", id);
            }
        }
    }
}
