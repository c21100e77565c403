use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Where contact form submissions are POSTed. Baked in at build time via
/// `CONTACT_ENDPOINT`; without it the form only closes itself.
pub fn get_contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|url| !url.trim().is_empty())
}
