//! Element and attribute names used by software identity tags (ISO-19770-2:2014).

use super::Element;

pub const SOFTWARE_IDENTITY: &str = "SoftwareIdentity";
pub const META: &str = "Meta";
pub const ENTITY: &str = "Entity";
pub const LINK: &str = "Link";

pub const NAME: &str = "name";
pub const VERSION: &str = "version";
pub const VERSION_SCHEME: &str = "versionScheme";
pub const TAG_VERSION: &str = "tagVersion";
pub const TAG_ID: &str = "tagId";
pub const PATCH: &str = "patch";
pub const SUPPLEMENTAL: &str = "supplemental";
pub const MEDIA: &str = "media";
pub const SUMMARY: &str = "summary";

pub const REG_ID: &str = "regId";
pub const ROLE: &str = "role";
pub const THUMBPRINT: &str = "thumbprint";

pub const HREF: &str = "href";
pub const RELATIONSHIP: &str = "relationship";
pub const MEDIA_TYPE: &str = "mediaType";
pub const OWNERSHIP: &str = "ownership";
pub const USE: &str = "use";
pub const ARTIFACT: &str = "artifact";

/// Creates a minimal valid identity document: an empty `SoftwareIdentity` root
pub fn new_document() -> Element {
    Element::new(SOFTWARE_IDENTITY)
}
