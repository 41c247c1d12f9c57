pub mod use_login_form;

pub use use_login_form::use_login_form;
