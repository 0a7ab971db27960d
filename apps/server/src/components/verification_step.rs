use super::{escape_html, ErrorDisplay};

/// Length of the one-time codes sent by the auth provider.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Card asking the user for the one-time code they were sent.
///
/// The "Verify" button submits the form to `verify_action`; the "Resend" link
/// points at `resend_href`. Both targets belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationStep<'a> {
    pub title: &'a str,
    pub error: Option<&'a str>,
    pub input_name: &'a str,
    pub value: &'a str,
    pub max_length: usize,
    pub verify_action: &'a str,
    pub resend_href: &'a str,
}

impl Default for VerificationStep<'_> {
    fn default() -> Self {
        Self {
            title: "Enter verification code",
            error: None,
            input_name: "code",
            value: "",
            max_length: DEFAULT_CODE_LENGTH,
            verify_action: "",
            resend_href: "",
        }
    }
}

impl VerificationStep<'_> {
    pub fn render(&self) -> String {
        format!(
            concat!(
                r#"<section class="card verification-step">"#,
                r#"<h2 class="card__title">{title}</h2>"#,
                "{error}",
                r#"<form method="post" action="{action}">"#,
                r#"<input type="text" name="{name}" value="{value}" maxlength="{max_length}" autocomplete="one-time-code">"#,
                r#"<button type="submit">Verify</button>"#,
                "</form>",
                r#"<a class="verification-step__resend" href="{resend}">Resend</a>"#,
                "</section>"
            ),
            title = escape_html(self.title),
            error = ErrorDisplay::new(self.error).render(),
            action = escape_html(self.verify_action),
            name = escape_html(self.input_name),
            value = escape_html(self.value),
            max_length = self.max_length,
            resend = escape_html(self.resend_href),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step<'a>() -> VerificationStep<'a> {
        VerificationStep {
            verify_action: "/auth/verify",
            resend_href: "/auth/resend",
            ..Default::default()
        }
    }

    #[test]
    fn test_renders_card_with_actions() {
        let html = step().render();
        assert!(html.contains("Enter verification code"));
        assert!(html.contains(r#"action="/auth/verify""#));
        assert!(html.contains(r#"href="/auth/resend">Resend</a>"#));
        assert!(html.contains(r#"<button type="submit">Verify</button>"#));
        assert!(html.contains(r#"maxlength="6""#));
        assert!(html.contains(r#"name="code" value="""#));
    }

    #[test]
    fn test_error_slot_only_filled_when_error_given() {
        assert!(!step().render().contains("role=\"alert\""));

        let html = VerificationStep {
            error: Some("Code expired"),
            ..step()
        }
        .render();
        assert!(html.contains("Code expired"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn test_value_and_length_come_from_caller() {
        let html = VerificationStep {
            value: "12\"34",
            max_length: 8,
            input_name: "otp",
            ..step()
        }
        .render();
        assert!(html.contains(r#"name="otp" value="12&quot;34" maxlength="8""#));
    }
}
