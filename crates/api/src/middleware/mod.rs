mod form_token;

pub use form_token::{is_read_only_method, require_form_token, timing_safe_eq};
