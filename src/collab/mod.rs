//! Collaborators the renderer calls out to.
//!
//! Some node kinds only mark *where* content goes; the content itself comes
//! from outside: exam questions, alt texts of pictures and photos, included
//! fragments, the margin template and the Morse encoder.
//!
//! ```
//! use fiftyohm_html::Handlers;
//!
//! let handlers = Handlers::new()
//!     .with_question(|number| Ok(format!("<div class=\"question\">{number}</div>")))
//!     .with_picture_alt(|id| Some(format!("Schaltbild {id}")));
//! # let _ = handlers;
//! ```

mod morse;
mod template;

pub use morse::{ItuMorse, MorseEncoder, MorseSymbol};
pub use template::{MARGIN_TEMPLATE_FILE, MarginRenderer, MarginTemplate};

use crate::error::{Error, Result};

/// Renders an exam question from its number.
pub type QuestionFn = Box<dyn Fn(&str) -> Result<String>>;
/// Looks up alt text for an asset id.
pub type AltTextFn = Box<dyn Fn(&str) -> Option<String>>;
/// Renders included content from its identifier.
pub type IncludeFn = Box<dyn Fn(&str) -> Result<String>>;

/// All collaborators of one renderer.
pub struct Handlers {
    question: Option<QuestionFn>,
    picture_alt: Option<AltTextFn>,
    photo_alt: Option<AltTextFn>,
    include: Option<IncludeFn>,
    margin: Box<dyn MarginRenderer>,
    morse: Box<dyn MorseEncoder>,
}

impl Default for Handlers {
    fn default() -> Self {
        Self {
            question: None,
            picture_alt: None,
            photo_alt: None,
            include: None,
            margin: Box::new(MarginTemplate::default()),
            morse: Box::new(ItuMorse),
        }
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("question", &self.question.is_some())
            .field("picture_alt", &self.picture_alt.is_some())
            .field("photo_alt", &self.photo_alt.is_some())
            .field("include", &self.include.is_some())
            .finish_non_exhaustive()
    }
}

impl Handlers {
    /// Default handlers: built-in margin template and ITU Morse, nothing else.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_question(mut self, f: impl Fn(&str) -> Result<String> + 'static) -> Self {
        self.question = Some(Box::new(f));
        self
    }

    pub fn with_picture_alt(mut self, f: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.picture_alt = Some(Box::new(f));
        self
    }

    pub fn with_photo_alt(mut self, f: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.photo_alt = Some(Box::new(f));
        self
    }

    pub fn with_include(mut self, f: impl Fn(&str) -> Result<String> + 'static) -> Self {
        self.include = Some(Box::new(f));
        self
    }

    pub fn with_margin(mut self, margin: impl MarginRenderer + 'static) -> Self {
        self.margin = Box::new(margin);
        self
    }

    pub fn with_morse(mut self, morse: impl MorseEncoder + 'static) -> Self {
        self.morse = Box::new(morse);
        self
    }

    /// Render a question. Fails if no question handler is configured.
    pub fn question(&self, number: &str) -> Result<String> {
        let handler = self
            .question
            .as_ref()
            .ok_or(Error::MissingHandler("question"))?;
        handler(number)
    }

    /// Render included content. Fails if no include handler is configured.
    pub fn include(&self, ident: &str) -> Result<String> {
        let handler = self
            .include
            .as_ref()
            .ok_or(Error::MissingHandler("include"))?;
        handler(ident)
    }

    /// Alt text of a picture; empty without a handler or a match.
    pub fn picture_alt(&self, id: &str) -> String {
        self.picture_alt
            .as_ref()
            .and_then(|f| f(id))
            .unwrap_or_default()
    }

    /// Alt text of a photo; empty without a handler or a match.
    pub fn photo_alt(&self, id: &str) -> String {
        self.photo_alt.as_ref().and_then(|f| f(id)).unwrap_or_default()
    }

    pub fn margin(&self) -> &dyn MarginRenderer {
        self.margin.as_ref()
    }

    pub fn morse(&self) -> &dyn MorseEncoder {
        self.morse.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_handlers_fail_fast() {
        let handlers = Handlers::new();
        assert!(matches!(
            handlers.question("TA101"),
            Err(Error::MissingHandler("question"))
        ));
        assert!(matches!(
            handlers.include("bandplan"),
            Err(Error::MissingHandler("include"))
        ));
    }

    #[test]
    fn test_optional_alt_text_defaults_to_empty() {
        let handlers = Handlers::new().with_photo_alt(|id| (id == "shack").then(|| "Funkraum".into()));
        assert_eq!(handlers.picture_alt("x"), "");
        assert_eq!(handlers.photo_alt("shack"), "Funkraum");
        assert_eq!(handlers.photo_alt("yagi"), "");
    }

    #[test]
    fn test_handler_errors_propagate() {
        let handlers = Handlers::new().with_include(|ident| {
            Err(Error::Handler {
                handler: "include",
                message: format!("{ident} not found"),
            })
        });
        let err = handlers.include("missing").unwrap_err();
        assert_eq!(err.to_string(), "include handler failed: missing not found");
    }
}
