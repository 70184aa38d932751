//! Physio Matrix website: a two-view Yew app with scroll-triggered
//! animations, a scroll-spy header and an appointment form delivered
//! through EmailJS.

pub mod appointment;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod mailer;
pub mod observer;
pub mod reveal;
pub mod section;
pub mod view;

pub mod components {
    pub mod appointment_form;
    pub mod footer;
}

pub mod pages {
    pub mod experts;
    pub mod home;
}
