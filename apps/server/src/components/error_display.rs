use super::escape_html;

/// Inline error banner shown above a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorDisplay<'a> {
    pub message: Option<&'a str>,
}

impl<'a> ErrorDisplay<'a> {
    pub fn new(message: Option<&'a str>) -> Self {
        Self { message }
    }

    /// Only a present, non-empty message produces output.
    pub fn is_visible(&self) -> bool {
        self.message.is_some_and(|m| !m.is_empty())
    }

    pub fn render(&self) -> String {
        match self.message {
            Some(message) if self.is_visible() => format!(
                r#"<div class="error-display" role="alert"><p class="error-display__message">{}</p></div>"#,
                escape_html(message)
            ),
            _ => String::new(),
        }
    }
}
