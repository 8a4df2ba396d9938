pub mod element;
pub mod iso19770_2;
pub mod software_identity;
pub mod version_scheme;
pub mod views;

pub use element::Element;
pub use software_identity::{LinkAttributes, SoftwareIdentity};
pub use version_scheme::{VersionOrdering, VersionScheme};
pub use views::{Entity, Link, SoftwareMetadata};
