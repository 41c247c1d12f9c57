use std::rc::Rc;
use yew::prelude::*;
use shared::{FormPhase, FormState, LoginFormConfig};
use crate::services::logging::Logger;
use crate::services::scheduler::{reload_page_or_log, TimeoutScheduler};

/// Events the login form feeds into its state
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFormAction {
    /// An input changed: `(name attribute, new value)`
    SetField { name: String, value: String },
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormStore {
    pub form: FormState,
    pub config: LoginFormConfig,
}

impl Reducible for LoginFormStore {
    type Action = LoginFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            LoginFormAction::SetField { name, value } => {
                if let Err(e) = next.form.set_field_by_name(&name, value) {
                    Logger::warn_with_component("login-form", &format!("ignoring input event: {}", e));
                    return self;
                }
            }
            LoginFormAction::Submit => {
                if shared::apply_submit(&mut next.form) != FormPhase::Success {
                    Logger::debug_with_component(
                        "login-form",
                        &format!("submit rejected with {} error(s)", next.form.errors().len()),
                    );
                }
            }
        }

        Rc::new(next)
    }
}

pub struct UseLoginFormResult {
    pub state: FormState,
    pub actions: UseLoginFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLoginFormActions {
    /// Merge `(name, value)` into the form values
    pub set_field: Callback<(String, String)>,
    /// Validate and submit the current values
    pub submit: Callback<()>,
}

/// Hook owning the state of one login form session
#[hook]
pub fn use_login_form(config: LoginFormConfig) -> UseLoginFormResult {
    let store = use_reducer(move || LoginFormStore {
        form: FormState::new(),
        config,
    });

    // Arm the reload once the form reaches Success
    use_effect_with(store.form.phase(), {
        let config = store.config.clone();
        move |phase| {
            if shared::schedule_on_success(*phase, &TimeoutScheduler, &config, Box::new(reload_page_or_log)) {
                Logger::info_with_component(
                    "login-form",
                    &format!("signed in, reloading in {}ms", config.success_delay_ms),
                );
            }
            || ()
        }
    });

    let set_field = {
        let dispatcher = store.dispatcher();
        Callback::from(move |(name, value): (String, String)| {
            dispatcher.dispatch(LoginFormAction::SetField { name, value });
        })
    };

    let submit = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(LoginFormAction::Submit);
        })
    };

    UseLoginFormResult {
        state: store.form.clone(),
        actions: UseLoginFormActions { set_field, submit },
    }
}
