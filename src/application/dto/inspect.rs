use crate::identity::domain::SoftwareIdentity;
use std::path::PathBuf;

/// InspectRequest - request DTO for loading a single tag file
#[derive(Debug, Clone)]
pub struct InspectRequest {
    /// Path to the rendered tag
    pub tag_path: PathBuf,
}

impl InspectRequest {
    pub fn new(tag_path: PathBuf) -> Self {
        Self { tag_path }
    }
}

/// InspectResponse - the parsed identity record
#[derive(Debug, Clone)]
pub struct InspectResponse {
    pub identity: SoftwareIdentity,
}
