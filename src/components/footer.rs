use chrono::Datelike;
use yew::prelude::*;

use crate::content::NAV_LINKS;
use crate::view::{NavAction, ViewContext};

const SOCIALS: &[(&str, &str)] = &[
    ("bi-facebook", "Facebook"),
    ("bi-instagram", "Instagram"),
    ("bi-linkedin", "LinkedIn"),
    ("bi-twitter", "Twitter"),
];

#[function_component]
pub fn Footer() -> Html {
    let controller = use_context::<ViewContext>();
    let year = chrono::Local::now().year();

    let quick_links = NAV_LINKS.iter().map(|link| {
        let target = link.target();
        let controller = controller.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(controller) = &controller {
                controller.dispatch(NavAction::Navigate(target.clone()));
            }
        });
        html! {
            <a href={link.anchor.unwrap_or("#")} class="footer-link me-3" {onclick}>{link.name}</a>
        }
    });

    html! {
        <footer class="bg-dark text-white py-4">
            <div class="container">
                <div class="row align-items-center">
                    <div class="col-md-6 text-center text-md-start mb-2 mb-md-0">
                        <p class="mb-1">{format!("© {} Myphysiomatrix. All Rights Reserved.", year)}</p>
                        <nav class="footer-links">{ for quick_links }</nav>
                    </div>
                    <div class="col-md-6 text-center text-md-end">
                        <div class="social-icons">
                            { for SOCIALS.iter().map(|(icon, label)| html! {
                                <a href="#" class="social-icon me-3" aria-label={*label}>
                                    <i class={classes!("bi", *icon)}></i>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
