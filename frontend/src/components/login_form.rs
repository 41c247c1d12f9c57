use yew::prelude::*;
use shared::{FormField, LoginFormConfig};
use super::form_input::FormInput;
use super::signed_in::SignedIn;
use crate::hooks::use_login_form;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    #[prop_or_default]
    pub config: Option<LoginFormConfig>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let login = use_login_form(props.config.clone().unwrap_or_default());
    let state = login.state;

    if state.is_success() {
        return html! { <SignedIn /> };
    }

    let onsubmit = {
        let submit = login.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let values = state.values();
    let errors = state.errors();

    html! {
        <form {onsubmit}>
            <h1>{"Login Form"}</h1>
            <div class="ui divider"></div>
            <div class="ui form">
                <FormInput
                    field={FormField::Username}
                    label="Username"
                    placeholder="johndoe"
                    value={values.username.clone()}
                    error={errors.username.clone()}
                    on_input={login.actions.set_field.clone()}
                />
                <FormInput
                    field={FormField::Email}
                    label="Email"
                    placeholder="john@doe.com"
                    value={values.email.clone()}
                    error={errors.email.clone()}
                    on_input={login.actions.set_field.clone()}
                />
                <FormInput
                    field={FormField::Password}
                    label="Password"
                    placeholder="P@$$w0rd"
                    input_type="password"
                    value={values.password.clone()}
                    error={errors.password.clone()}
                    on_input={login.actions.set_field.clone()}
                />
                <button class="fluid ui button blue">{"Submit"}</button>
            </div>
        </form>
    }
}
