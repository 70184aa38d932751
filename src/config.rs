use log::Level;

/// EmailJS account the appointment form delivers to.
pub struct EmailJsConfig {
    pub api_url: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub const EMAILJS: EmailJsConfig = EmailJsConfig {
    api_url: "https://api.emailjs.com/api/v1.0/email/send",
    service_id: match option_env!("EMAILJS_SERVICE_ID") {
        Some(id) => id,
        None => "service_7wyp98v",
    },
    template_id: match option_env!("EMAILJS_TEMPLATE_ID") {
        Some(id) => id,
        None => "template_2srshdd",
    },
    public_key: match option_env!("EMAILJS_PUBLIC_KEY") {
        Some(key) => key,
        None => "siumNKzznoiayg-a2",
    },
};

// Wait for the home view to mount before scrolling to an anchor on it.
pub const ANCHOR_SCROLL_DELAY_MS: u32 = 100;

pub const STATUS_CLEAR_DELAY_MS: u32 = 6_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
