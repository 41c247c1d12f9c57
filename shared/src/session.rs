use crate::{validate, FormPhase, FormState, LoginFormConfig};
use log::info;

/// Runs a task once after a delay.
///
/// The browser implementation is a timer; tests substitute a fake that
/// records what was scheduled.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Apply one submit event to the form state.
///
/// Validates the current values exactly once, replaces the error record and
/// marks the form submitted. Has no side effects beyond `state`.
pub fn apply_submit(state: &mut FormState) -> FormPhase {
    let errors = validate(state.values());
    let error_count = errors.len();

    state.set_errors(errors);
    state.mark_submitted();

    info!("login form submitted: {} field error(s)", error_count);
    state.phase()
}

/// Hand `on_success` to `scheduler` if `phase` is [`FormPhase::Success`].
///
/// Returns whether anything was scheduled.
pub fn schedule_on_success(
    phase: FormPhase,
    scheduler: &dyn Scheduler,
    config: &LoginFormConfig,
    on_success: Box<dyn FnOnce()>,
) -> bool {
    if phase != FormPhase::Success {
        return false;
    }
    scheduler.schedule(config.success_delay_ms, on_success);
    true
}

/// Handle one submit event: [`apply_submit`] then [`schedule_on_success`]
pub fn submit(
    state: &mut FormState,
    scheduler: &dyn Scheduler,
    config: &LoginFormConfig,
    on_success: Box<dyn FnOnce()>,
) -> FormPhase {
    let phase = apply_submit(state);
    schedule_on_success(phase, scheduler, config, on_success);
    phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormField, FormValues};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingScheduler {
        scheduled: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    }

    impl RecordingScheduler {
        fn delays(&self) -> Vec<u32> {
            self.scheduled.borrow().iter().map(|(delay, _)| *delay).collect()
        }

        fn run_all(&self) {
            for (_, task) in self.scheduled.borrow_mut().drain(..) {
                task();
            }
        }
    }

    impl Scheduler for RecordingScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.scheduled.borrow_mut().push((delay_ms, task));
        }
    }

    fn reload_flag() -> (Rc<Cell<bool>>, Box<dyn FnOnce()>) {
        let reloaded = Rc::new(Cell::new(false));
        let task = {
            let reloaded = reloaded.clone();
            Box::new(move || reloaded.set(true)) as Box<dyn FnOnce()>
        };
        (reloaded, task)
    }

    #[test]
    fn test_valid_submit_schedules_success_task() {
        let scheduler = RecordingScheduler::default();
        let config = LoginFormConfig::default();
        let mut state = FormState::with_values(FormValues::new("johnny", "john@doe.com", "Passw0rd!"));
        let (reloaded, task) = reload_flag();

        let phase = submit(&mut state, &scheduler, &config, task);

        assert_eq!(phase, FormPhase::Success);
        assert!(state.is_submitted());
        assert!(state.errors().is_empty());
        assert!(state.is_success());
        assert_eq!(scheduler.delays(), vec![1500]);

        // The task only runs when the scheduler fires it
        assert!(!reloaded.get());
        scheduler.run_all();
        assert!(reloaded.get());
    }

    #[test]
    fn test_invalid_submit_schedules_nothing() {
        let scheduler = RecordingScheduler::default();
        let config = LoginFormConfig::default();
        let mut state = FormState::new();
        let (reloaded, task) = reload_flag();

        let phase = submit(&mut state, &scheduler, &config, task);

        assert_eq!(phase, FormPhase::Invalid);
        assert!(state.is_submitted());
        assert_eq!(state.errors().len(), 3);
        assert!(scheduler.delays().is_empty());
        assert!(!reloaded.get());
    }

    #[test]
    fn test_resubmit_after_fixing_input() {
        let scheduler = RecordingScheduler::default();
        let config = LoginFormConfig {
            success_delay_ms: 10,
        };
        let mut state = FormState::with_values(FormValues::new("john", "john@doe.com", "Passw0rd!"));

        let (_, task) = reload_flag();
        assert_eq!(submit(&mut state, &scheduler, &config, task), FormPhase::Invalid);
        assert_eq!(
            state.errors().username.as_deref(),
            Some("Username must be more than 4 characters")
        );

        state.set_field(FormField::Username, "johnny");
        assert_eq!(state.phase(), FormPhase::Invalid);

        let (_, task) = reload_flag();
        assert_eq!(submit(&mut state, &scheduler, &config, task), FormPhase::Success);
        assert_eq!(scheduler.delays(), vec![10]);
    }

    #[test]
    fn test_submit_validates_current_values() {
        let scheduler = RecordingScheduler::default();
        let config = LoginFormConfig::default();
        let mut state = FormState::new();
        state.set_field(FormField::Email, "bad-email");

        let (_, task) = reload_flag();
        submit(&mut state, &scheduler, &config, task);

        assert_eq!(state.errors(), &validate(state.values()));
        assert_eq!(
            state.errors().email.as_deref(),
            Some("This is not a valid email format!")
        );
    }

    #[test]
    fn test_apply_submit_only_touches_state() {
        let mut state = FormState::with_values(FormValues::new("johnny", "john@doe.com", "Passw0rd!"));

        assert_eq!(apply_submit(&mut state), FormPhase::Success);
        assert!(state.is_submitted());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_schedule_on_success_ignores_other_phases() {
        let scheduler = RecordingScheduler::default();
        let config = LoginFormConfig::default();

        for phase in [FormPhase::Initial, FormPhase::Invalid] {
            let (reloaded, task) = reload_flag();
            assert!(!schedule_on_success(phase, &scheduler, &config, task));
            assert!(!reloaded.get());
        }
        assert!(scheduler.delays().is_empty());

        let (reloaded, task) = reload_flag();
        assert!(schedule_on_success(FormPhase::Success, &scheduler, &config, task));
        assert_eq!(scheduler.delays(), vec![1500]);
        scheduler.run_all();
        assert!(reloaded.get());
    }
}
