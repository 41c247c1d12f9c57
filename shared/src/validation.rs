use crate::{FormErrors, FormField, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const USERNAME_TOO_SHORT: &str = "Username must be more than 4 characters";
pub const USERNAME_LETTERS_ONLY: &str = "Numbers or symbols are not allowed";

pub const EMAIL_REQUIRED: &str = "Email is required!";
pub const EMAIL_INVALID: &str = "This is not a valid email format!";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be more than 3 characters";
pub const PASSWORD_COMPOSITION: &str =
    "Passord must contain at least 1 uppercase letter, 1 lowercase letter, 1 number and 1 symbol (@$!%*?&)";

pub const USERNAME_MIN_LENGTH: usize = 5;
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Symbols a password may (and must, at least once) contain
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]{5,}$").unwrap());

// Browser whitespace, which differs from regex's Unicode `\s` (adds U+FEFF, drops U+0085)
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Browser `.`: anything but a line terminator
const BROWSER_ANY: &str = r"[^\n\r\x{2028}\x{2029}]";

// The separator between domain and suffix is a wildcard, not a literal dot.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]", BROWSER_WHITESPACE);
    Regex::new(&format!("(?i)^{part}+@{part}+{BROWSER_ANY}{part}{{2,}}$")).unwrap()
});

// regex has no look-ahead, so the per-class requirements are checked separately
static PASSWORD_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{4,}$").unwrap());

/// Validate every field of the form.
///
/// Each field is checked independently and carries at most one message.
/// Never fails; an empty record means the form is valid.
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();

    for field in FormField::ALL {
        if let Some(message) = validate_field(field, values.get(field)) {
            errors.set(field, message);
        }
    }

    errors
}

pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    match field {
        FormField::Username => validate_username(value),
        FormField::Email => validate_email(value),
        FormField::Password => validate_password(value),
    }
}

/// Length as the browser reports it, in UTF-16 code units
fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_username(username: &str) -> Option<&'static str> {
    if username.is_empty() {
        Some(USERNAME_REQUIRED)
    } else if input_length(username) < USERNAME_MIN_LENGTH {
        Some(USERNAME_TOO_SHORT)
    } else if !USERNAME_REGEX.is_match(username) {
        Some(USERNAME_LETTERS_ONLY)
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_REGEX.is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if input_length(password) < PASSWORD_MIN_LENGTH {
        Some(PASSWORD_TOO_SHORT)
    } else if !is_strong_password(password) {
        Some(PASSWORD_COMPOSITION)
    } else {
        None
    }
}

fn is_strong_password(password: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
