use log::Level;

pub const BUSINESS_NAME: &str = "The Approval Hub";
pub const CONTACT_EMAIL: &str = "approvalhub466@gmail.com";
pub const CONTACT_PHONE: &str = "+17739166126";
pub const CONTACT_PHONE_DISPLAY: &str = "+1 (773) 916-6126";

/// Hosted relay that forwards form posts to the inbox above.
pub fn get_relay_url() -> String {
    format!("https://formsubmit.co/ajax/{}", CONTACT_EMAIL)
}

// Timings in milliseconds
pub const LOADING_HIDE_DELAY: u32 = 1_000;
pub const LOADING_REMOVE_DELAY: u32 = 500;
pub const QUIZ_AUTO_CLOSE_DELAY: u32 = 3_000;
pub const QUICK_SELECT_DELAY: u32 = 500;
pub const CAROUSEL_INTERVAL: u32 = 5_000;
pub const COUNTER_TICK: u32 = 20;
pub const STATS_COUNTER_TICK: u32 = 40;

/// Height of the fixed navbar, subtracted when scrolling to a section.
pub const NAV_OFFSET: f64 = 80.0;
pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;
pub const CAROUSEL_GAP: f64 = 16.0;

pub const CUSTOMERS_SERVED: u64 = 4_300;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
