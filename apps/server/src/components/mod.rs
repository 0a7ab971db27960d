//! Stateless HTML form components.
//!
//! Components take their props by reference and return markup. They hold no
//! state and perform no validation; whatever a form submits is handled by the
//! endpoint the caller points it at.

mod error_display;
mod verification_step;

pub use error_display::ErrorDisplay;
pub use verification_step::{VerificationStep, DEFAULT_CODE_LENGTH};

/// Escapes text for use in element content and quoted attribute values.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
