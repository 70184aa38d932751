use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_unmount;

use crate::appointment::{AppointmentRequest, Field, StatusKind, SubmissionAction, SubmissionState, SUCCESS_HEADLINE};
use crate::config;
use crate::mailer::{self, Mailer};

#[derive(Properties, PartialEq)]
pub struct AppointmentFormProps {
    #[prop_or_else(Mailer::emailjs)]
    pub mailer: Mailer,
}

#[function_component]
pub fn AppointmentForm(props: &AppointmentFormProps) -> Html {
    let fields = use_state(AppointmentRequest::default);
    let submission = use_reducer(SubmissionState::idle);
    let next_generation = use_mut_ref(|| 0u32);
    let clear_timer = use_mut_ref(|| None::<Timeout>);
    let mounted = use_mut_ref(|| true);

    {
        let clear_timer = clear_timer.clone();
        let mounted = mounted.clone();
        use_unmount(move || {
            *mounted.borrow_mut() = false;
            clear_timer.borrow_mut().take();
        });
    }

    let on_input = |field: Field| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set(field, input.value());
            fields.set(next);
        })
    };

    let on_message_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set(Field::Message, input.value());
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let submission = submission.clone();
        let clear_timer = clear_timer.clone();
        let mounted = mounted.clone();
        let next_generation = next_generation.clone();
        let mailer = props.mailer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*fields).clone();
            if !request.is_complete() {
                return;
            }

            let generation = {
                let mut next = next_generation.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            submission.dispatch(SubmissionAction::Started { generation });

            let fields = fields.clone();
            let submission = submission.clone();
            let clear_timer = clear_timer.clone();
            let mounted = mounted.clone();
            let mailer = mailer.clone();
            spawn_local(async move {
                let delivered = mailer::deliver(&*mailer.0, &request).await.is_ok();
                if delivered {
                    fields.set(AppointmentRequest::default());
                }
                submission.dispatch(SubmissionAction::Finished { generation, delivered });

                if !*mounted.borrow() {
                    return;
                }
                // Clears stamped with an older generation are ignored by the
                // reducer, so replacing the timer here is enough.
                let submission = submission.clone();
                *clear_timer.borrow_mut() = Some(Timeout::new(config::STATUS_CLEAR_DELAY_MS, move || {
                    submission.dispatch(SubmissionAction::ClearStatus { generation });
                }));
            });
        })
    };

    let status = &submission.status;

    html! {
        <div class="contact-form">
            <form id="contactForm" {onsubmit}>
                <div class="mb-3">
                    <input type="text" class="form-control" name="name" placeholder="Full Name" required=true
                        value={fields.name.clone()} oninput={on_input(Field::Name)} />
                </div>
                <div class="mb-3">
                    <input type="tel" class="form-control" name="mobile" placeholder="Mobile Number" required=true
                        value={fields.mobile.clone()} oninput={on_input(Field::Mobile)} />
                </div>
                <div class="mb-3">
                    <input type="email" class="form-control" name="email" placeholder="Email Address" required=true
                        value={fields.email.clone()} oninput={on_input(Field::Email)} />
                </div>
                <div class="mb-3">
                    <input type="text" class="form-control" name="address" placeholder="Your Full Address" required=true
                        value={fields.address.clone()} oninput={on_input(Field::Address)} />
                </div>
                <div class="mb-3">
                    <textarea class="form-control" name="message" rows="4" placeholder="Briefly describe your condition or message" required=true
                        value={fields.message.clone()} oninput={on_message_input} />
                </div>
                <button type="submit" class="btn btn-primary btn-lg w-100" disabled={submission.submit_disabled()}>
                    if submission.is_submitting {
                        <>
                            <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                            {" Submitting..."}
                        </>
                    } else {
                        <>
                            <i class="bi bi-send me-2"></i>
                            {"Submit Appointment Request"}
                        </>
                    }
                </button>
            </form>
            if status.kind != StatusKind::None {
                <div id="form-status" class="mt-3">
                    <div class={status.kind.alert_class()} role="alert">
                        if status.kind == StatusKind::Success {
                            <><strong>{SUCCESS_HEADLINE}</strong>{" "}</>
                        }
                        {status.message.clone()}
                    </div>
                </div>
            }
        </div>
    }
}
