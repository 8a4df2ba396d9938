use crate::identity::domain::SoftwareIdentity;
use crate::ports::outbound::{TagParser, TagReader};
use crate::shared::error::SwidError;
use crate::shared::Result;
use std::path::Path;

/// Reads and parses one tag file; records the file path on the identity
pub(crate) fn load_tag<TR, TP>(reader: &TR, parser: &TP, path: &Path) -> Result<SoftwareIdentity>
where
    TR: TagReader,
    TP: TagParser,
{
    let content = reader.read_tag(path)?;

    let mut identity = parser.parse(&content).map_err(|e| SwidError::TagParseError {
        path: path.to_path_buf(),
        details: format!("{:#}", e),
    })?;

    identity.set_full_path(path.display().to_string());
    Ok(identity)
}
