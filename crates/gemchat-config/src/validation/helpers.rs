//! Shared helpers used by the section validators.

/// Push an error if `value` is empty or only whitespace.
pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

/// Push an error unless `value` is an `http://` or `https://` URL.
pub(crate) fn validate_url_scheme(errors: &mut Vec<String>, name: &str, value: &str) {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        errors.push(format!("{name} = {value:?} must start with http:// or https://"));
    }
}
