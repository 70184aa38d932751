use yew::prelude::*;

use crate::content::{Expert, Testimonial, EXPERTS, TESTIMONIALS};
use crate::hooks::use_scroll_reveal;

fn expert_card(expert: &Expert) -> Html {
    html! {
        <div class="col-md-6 col-lg-4 animate-on-scroll" key={expert.name}>
            <div class="feature-card" style="border-color: #22c55e;">
                <div class="feature-content" style="text-align: left; top: 2rem; position: relative;">
                    <div class="feature-icon"><i class="bi bi-person-check-fill"></i></div>
                    <h5 class="text-center">{expert.name}</h5>
                    <p class="text-center text-success fw-bold">{expert.title}</p>
                    { for expert.details.iter().map(|group| html! {
                        <div class="mt-3">
                            <h6>{group.title}</h6>
                            <ul class="list-unstyled" style="font-size: 0.9rem;">
                                { for group.items.iter().map(|item| html! {
                                    <li class="d-flex">
                                        <i class="bi bi-check-circle-fill text-success me-2 mt-1"></i>
                                        <span>{*item}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn testimonial_card(item: &Testimonial) -> Html {
    html! {
        <div class="col-md-6 col-lg-4 animate-on-scroll" key={item.name}>
            <div class="feature-card h-100">
                <div class="feature-content" style="text-align: left;">
                    <div class="d-flex align-items-center mb-3">
                        <div class="feature-icon" style="margin: 0; margin-right: 1rem;"><i class="bi bi-person-fill"></i></div>
                        <div>
                            <h6 class="mb-0">{item.name}</h6>
                            <small class="text-muted">{item.case}</small>
                        </div>
                    </div>
                    <p class="fst-italic">{format!("\"{}\"", item.review)}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn ExpertsPage() -> Html {
    use_scroll_reveal("#experts");

    html! {
        <section id="experts" class="py-5 bg-light" style="padding-top: 2rem; position: relative;">
            <div class="container">
                <div class="row text-center">
                    <div class="col-12 animate-on-scroll">
                        <h2 class="section-title">{"Our Experts"}</h2>
                        <p class="section-subtitle">{"Meet our team of highly qualified and experienced physiotherapists."}</p>
                    </div>
                </div>
                <div class="row g-4 justify-content-center">
                    { for EXPERTS.iter().map(expert_card) }
                </div>

                <div class="row text-center mt-3 pt-4">
                    <div class="col-12 animate-on-scroll">
                        <h2 class="section-title">{"Testimonials"}</h2>
                        <p class="section-subtitle">{"What our patients are saying about their recovery journey with us."}</p>
                    </div>
                </div>
                <div class="row g-4">
                    { for TESTIMONIALS.iter().map(testimonial_card) }
                </div>
            </div>
        </section>
    }
}
