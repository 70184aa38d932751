use yew::prelude::*;

use crate::components::appointment_form::AppointmentForm;
use crate::content::{COMMITMENTS, CONTACT, FEATURES, SERVICES};
use crate::hooks::use_scroll_reveal;
use crate::view::{NavAction, NavTarget, ViewContext};

fn section_heading(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="row text-center mb-5">
            <div class="col-12">
                <h2 class="section-title">{title}</h2>
                <p class="section-subtitle">{subtitle}</p>
            </div>
        </div>
    }
}

#[function_component]
fn Hero() -> Html {
    let controller = use_context::<ViewContext>();
    let book_visit = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(controller) = &controller {
            controller.dispatch(NavAction::Navigate(NavTarget::anchor("#contact")));
        }
    });

    html! {
        <section id="home" class="hero-section">
            <div class="hero-overlay"></div>
            <div class="container text-center text-white position-relative">
                <div class="row justify-content-center">
                    <div class="col-lg-8">
                        <h1 class="hero-title mb-4 animate-on-scroll">{"Welcome to Physio Matrix"}</h1>
                        <p class="hero-tagline mb-5 animate-on-scroll">
                            {"Expert Physiotherapy at Your Doorstep. Painless Therapy · Natural Healing · Long-term Results."}
                        </p>
                        <a href="#contact" class="btn btn-primary btn-lg px-5 py-3 animate-on-scroll" onclick={book_visit}>
                            <i class="bi bi-calendar-check me-2"></i>{"Book Home Visit"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="py-5">
            <div class="container">
                <div class="row align-items-center">
                    <div class="col-lg-6 mb-4 mb-lg-0 animate-on-scroll">
                        <div class="about-content">
                            <h2 class="section-title mb-4">{"Your Partners in Healing"}</h2>
                            <p class="lead mb-4">
                                {"At PhysioMatrix, we bring world-class physiotherapy directly to you. We believe that the most comfortable place for recovery is your own home. Our team of certified experts uses advanced, German research-based technology to provide personalized care that fits your life, ensuring a faster, more effective healing journey."}
                            </p>
                            <div class="goals-list">
                                <h5 class="mb-3">{"Our Commitment to You"}</h5>
                                { for COMMITMENTS.iter().map(|(icon, text)| html! {
                                    <div class="goal-item">
                                        <i class={classes!("bi", *icon, "text-success", "me-3")}></i>
                                        <span>{*text}</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                    <div class="col-lg-6 animate-on-scroll">
                        <div class="about-image">
                            <img src="/assets/physiomatrix.jpg" alt="Physiotherapy Services Illustration" class="img-fluid rounded shadow-lg" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn features() -> Html {
    html! {
        <section id="features" class="py-5 bg-light">
            <div class="container">
                { section_heading("Why Choose Physio Matrix?", "Our unique approach ensures you get the best care possible.") }
                <div class="row g-4">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="col-md-6 col-lg-4 animate-on-scroll" key={feature.title}>
                            <div class="feature-card">
                                <div class="feature-image">
                                    <img src={feature.img} alt={feature.title} class="img-fluid" />
                                </div>
                                <div class="feature-content">
                                    <div class="feature-icon"><i class={classes!("bi", feature.icon)}></i></div>
                                    <h5>{feature.title}</h5>
                                    <p>{feature.desc}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="py-5">
            <div class="container">
                { section_heading("Conditions We Treat", "Expert care for a wide range of musculoskeletal and neurological conditions.") }
                <div class="row g-4">
                    { for SERVICES.iter().map(|(img, name)| html! {
                        <div class="col-md-6 col-lg-3 animate-on-scroll" key={*name}>
                            <div class="service-card">
                                <div class="service-image"><img src={*img} alt={*name} class="img-fluid" /></div>
                                <div class="service-content"><h6>{*name}</h6></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn contact_item(icon: &str, label: &str, body: Html) -> Html {
    html! {
        <div class="contact-item">
            <div class="d-flex align-items-center">
                <div class="contact-icon me-3"><i class={classes!("bi", icon.to_string())}></i></div>
                <div><strong>{label}</strong><br />{body}</div>
            </div>
        </div>
    }
}

fn contact() -> Html {
    html! {
        <section id="contact" class="py-5 bg-light">
            <div class="container">
                { section_heading("Book Your Home Visit", "Fill out the form below, and we'll get in touch to schedule your appointment.") }
                <div class="row">
                    <div class="col-lg-6 mb-4 mb-lg-0 animate-on-scroll">
                        <div class="contact-info">
                            <h5 class="mb-4">{"Contact Information"}</h5>
                            { contact_item("bi-envelope-fill", "Email:", html! {
                                <a href={format!("mailto:{}", CONTACT.email)}>{CONTACT.email}</a>
                            }) }
                            { contact_item("bi-telephone-fill", "Phone:", html! {
                                <a href={format!("tel:+{}", CONTACT.phone_e164)}>{CONTACT.phone_display}</a>
                            }) }
                            { contact_item("bi-whatsapp", "WhatsApp:", html! {
                                <a href={format!("https://wa.me/{}", CONTACT.phone_e164)} target="_blank">{CONTACT.phone_display}</a>
                            }) }
                            <div class="map-placeholder mt-4">
                                <div class="map-content">
                                    <i class="bi bi-house-door-fill"></i>
                                    <p class="mb-0">{CONTACT.service_area}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="col-lg-6 animate-on-scroll">
                        <AppointmentForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn HomePage() -> Html {
    use_scroll_reveal("#home-page");

    html! {
        <div id="home-page">
            <Hero />
            { about() }
            { features() }
            { services() }
            { contact() }
        </div>
    }
}
