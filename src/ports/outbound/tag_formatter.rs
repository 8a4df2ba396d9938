use crate::identity::domain::SoftwareIdentity;
use crate::shared::Result;

/// TagFormatter port for rendering an identity record as text
///
/// Implementations decide the concrete syntax. A formatter that also
/// implements [`TagParser`] must be lossless: parsing its output yields the
/// same attribute values and the same child order.
pub trait TagFormatter {
    /// Renders the identity record
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, identity: &SoftwareIdentity) -> Result<String>;
}

/// TagParser port for reading an identity record back from text
pub trait TagParser {
    /// Parses a rendered tag into an identity record
    ///
    /// # Errors
    /// Returns an error if the text is not a valid software identity document
    fn parse(&self, content: &str) -> Result<SoftwareIdentity>;
}
