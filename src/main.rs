use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use physiomatrix::components::footer::Footer;
use physiomatrix::config;
use physiomatrix::content::NAV_LINKS;
use physiomatrix::hooks::use_active_section;
use physiomatrix::pages::{experts::ExpertsPage, home::HomePage};
use physiomatrix::section::is_link_active;
use physiomatrix::view::{perform_scroll, BrowserViewport, NavAction, NavTarget, View, ViewContext, ViewController};

#[function_component(Nav)]
pub fn nav() -> Html {
    let controller = use_context::<ViewContext>();
    let view = controller.as_ref().map(|c| c.view()).unwrap_or_default();
    let active_section = use_active_section(view == View::Home);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 50.0);
                    }) as Box<dyn FnMut()>)
                });

                if let (Some(window), Some(callback)) = (&window, &listener) {
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let Some(controller) = controller else {
        return html! {};
    };

    let navigate = |target: NavTarget| {
        let controller = controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.dispatch(NavAction::Navigate(target.clone()));
        })
    };

    let toggle_menu = {
        let controller = controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.dispatch(NavAction::ToggleMenu);
        })
    };

    html! {
        <nav class={classes!("navbar", "navbar-expand-lg", "fixed-top", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container">
                <a class="navbar-brand" href="#home" onclick={navigate(NavTarget::View(View::Home))}>
                    <img src="/assets/physiocare-logo.png" alt="PhysioCare Logo" class="navbar-logo" />
                    {"Physio Matrix"}
                </a>
                <button class="navbar-toggler" type="button" aria-expanded={controller.menu_open().to_string()} onclick={toggle_menu}>
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class={classes!("collapse", "navbar-collapse", controller.menu_open().then(|| "show"))} id="navbarNav">
                    <ul class="navbar-nav ms-auto">
                        { for NAV_LINKS.iter().map(|link| {
                            let active = is_link_active(link.view, link.anchor, view, &active_section);
                            html! {
                                <li class="nav-item" key={link.name}>
                                    <a class={classes!("nav-link", active.then(|| "active"))}
                                        href={link.anchor.unwrap_or("#")}
                                        onclick={navigate(link.target())}>
                                        {link.name}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let controller = use_reducer(ViewController::default);
    let scroll_timer = use_mut_ref(|| None::<Timeout>);

    // Scrolls run after the view they target has rendered. A newer request
    // replaces a deferred one that has not fired yet.
    {
        let scroll_timer = scroll_timer.clone();
        use_effect_with_deps(
            move |request| {
                if let Some(request) = request.clone() {
                    let delay_ms = request.delay_ms;
                    match delay_ms {
                        Some(delay) => {
                            *scroll_timer.borrow_mut() = Some(Timeout::new(delay, move || {
                                perform_scroll(&BrowserViewport, &request.action);
                            }));
                        }
                        None => {
                            scroll_timer.borrow_mut().take();
                            perform_scroll(&BrowserViewport, &request.action);
                        }
                    }
                }
                || ()
            },
            controller.pending_scroll().cloned(),
        );
    }

    let page = match controller.view() {
        View::Home => html! { <HomePage /> },
        View::Experts => html! { <ExpertsPage /> },
    };

    html! {
        <ContextProvider<ViewContext> context={controller.clone()}>
            <style>
                {r#".animate-on-scroll {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .animate-on-scroll.is-visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .navbar.scrolled {
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.12);
                }"#}
            </style>
            <Nav />
            <main>{page}</main>
            <Footer />
        </ContextProvider<ViewContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
