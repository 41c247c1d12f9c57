use gloo::console;

/// Component-scoped logging to the browser console.
///
/// Lines are prefixed with a timestamp and the component name. Never pass
/// field values through here.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::format(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::format(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
        format!("{} [{}] {}", timestamp, component, message)
    }
}
