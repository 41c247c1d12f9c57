pub mod form_input;
pub mod login_form;
pub mod signed_in;

pub use login_form::LoginForm;
