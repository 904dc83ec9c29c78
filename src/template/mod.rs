//! Boilerplate document templates.
//!
//! Five ready-to-edit documents (press release, call script, email,
//! flyer, rights card) rendered through a pre-registered template
//! environment. Most placeholders stay as literal `[BRACKETS]` for the
//! user to fill in after insertion; the press release's contact block is
//! template-driven so tooling can pre-fill it from [`TemplateFields`].

mod library;

use minijinja::Environment;
use serde::Serialize;

use crate::block::ParagraphBlock;
use crate::error::FormatError;

/// The available boilerplate documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocTemplate {
    PressRelease,
    CallScript,
    Email,
    Flyer,
    RightsCard,
}

impl DocTemplate {
    pub const ALL: [DocTemplate; 5] = [
        DocTemplate::PressRelease,
        DocTemplate::CallScript,
        DocTemplate::Email,
        DocTemplate::Flyer,
        DocTemplate::RightsCard,
    ];

    /// The registration name of this template.
    pub fn name(&self) -> &'static str {
        match self {
            DocTemplate::PressRelease => "press-release",
            DocTemplate::CallScript => "call-script",
            DocTemplate::Email => "email",
            DocTemplate::Flyer => "flyer",
            DocTemplate::RightsCard => "rights-card",
        }
    }

    /// The raw template source.
    pub fn source(&self) -> &'static str {
        match self {
            DocTemplate::PressRelease => library::PRESS_RELEASE,
            DocTemplate::CallScript => library::CALL_SCRIPT,
            DocTemplate::Email => library::EMAIL,
            DocTemplate::Flyer => library::FLYER,
            DocTemplate::RightsCard => library::RIGHTS_CARD,
        }
    }
}

/// Pre-fillable fields for template rendering.
///
/// Defaults reproduce the fill-in-later bracket placeholders, so
/// `TemplateFields::default()` renders plain boilerplate.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateFields {
    pub organization: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub website: String,
}

impl Default for TemplateFields {
    fn default() -> Self {
        Self {
            organization: "[Organization Name]".to_string(),
            contact_name: "[Name]".to_string(),
            contact_phone: "[Phone]".to_string(),
            contact_email: "[Email]".to_string(),
            website: "[website]".to_string(),
        }
    }
}

/// A renderer with all boilerplate templates pre-registered.
///
/// Templates are compiled once at construction and reused across
/// renders.
///
/// # Example
///
/// ```rust
/// use flourish::{DocTemplate, TemplateFields, TemplateLibrary};
///
/// let library = TemplateLibrary::new().unwrap();
/// let fields = TemplateFields {
///     organization: "River Valley Tenants Union".to_string(),
///     ..TemplateFields::default()
/// };
///
/// let text = library.render(DocTemplate::PressRelease, &fields).unwrap();
/// assert!(text.contains("PRESS RELEASE"));
/// assert!(text.contains("ABOUT RIVER VALLEY TENANTS UNION:"));
/// ```
pub struct TemplateLibrary {
    env: Environment<'static>,
}

impl TemplateLibrary {
    /// Creates a library with every [`DocTemplate`] registered.
    ///
    /// # Errors
    ///
    /// Returns an error if any template source fails to compile.
    pub fn new() -> Result<Self, FormatError> {
        let mut env = Environment::new();
        for template in DocTemplate::ALL {
            env.add_template(template.name(), template.source())?;
        }
        Ok(Self { env })
    }

    /// Renders a template with the given fields.
    pub fn render(
        &self,
        template: DocTemplate,
        fields: &TemplateFields,
    ) -> Result<String, FormatError> {
        let tmpl = self.env.get_template(template.name())?;
        Ok(tmpl.render(fields)?)
    }

    /// Renders a template into a paragraph block ready for insertion.
    pub fn render_block(
        &self,
        template: DocTemplate,
        fields: &TemplateFields,
    ) -> Result<ParagraphBlock, FormatError> {
        Ok(ParagraphBlock::plain(self.render(template, fields)?))
    }
}
