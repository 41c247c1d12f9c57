use gloo::timers::callback::Timeout;
use shared::Scheduler;
use wasm_bindgen::JsValue;

use super::logging::Logger;

#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("location.reload() failed: {0}")]
    Reload(String),
}

impl From<JsValue> for ReloadError {
    fn from(value: JsValue) -> Self {
        ReloadError::Reload(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Schedules tasks on browser timers.
///
/// Timers are detached on creation, so a scheduled task cannot be cancelled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Logger::debug_with_component("scheduler", &format!("task scheduled in {}ms", delay_ms));
        Timeout::new(delay_ms, task).forget();
    }
}

/// Reload the current page, dropping all in-memory state
pub fn reload_page() -> Result<(), ReloadError> {
    let window = web_sys::window().ok_or(ReloadError::NoWindow)?;
    window.location().reload()?;
    Ok(())
}

/// Success action used by the login form: reload, logging any failure
pub fn reload_page_or_log() {
    if let Err(e) = reload_page() {
        Logger::error_with_component("scheduler", &format!("page reload failed: {}", e));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_timeout_scheduler_runs_task_after_delay() {
        let ran = Rc::new(Cell::new(false));
        let task = {
            let ran = ran.clone();
            Box::new(move || ran.set(true))
        };

        TimeoutScheduler.schedule(10, task);
        assert!(!ran.get());

        TimeoutFuture::new(50).await;
        assert!(ran.get());
    }

    #[wasm_bindgen_test]
    fn test_reload_error_from_js_string() {
        let error = ReloadError::from(JsValue::from_str("blocked"));
        assert_eq!(error.to_string(), "location.reload() failed: blocked");
    }
}
