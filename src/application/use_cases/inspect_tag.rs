use super::load_tag::load_tag;
use crate::application::dto::{InspectRequest, InspectResponse};
use crate::ports::outbound::{TagParser, TagReader};
use crate::shared::Result;

/// InspectTagUseCase - loads a single tag file into an identity record
///
/// # Type Parameters
/// * `TR` - TagReader implementation
/// * `TP` - TagParser implementation
pub struct InspectTagUseCase<TR, TP> {
    tag_reader: TR,
    tag_parser: TP,
}

impl<TR, TP> InspectTagUseCase<TR, TP>
where
    TR: TagReader,
    TP: TagParser,
{
    pub fn new(tag_reader: TR, tag_parser: TP) -> Self {
        Self {
            tag_reader,
            tag_parser,
        }
    }

    pub fn execute(&self, request: InspectRequest) -> Result<InspectResponse> {
        let identity = load_tag(&self.tag_reader, &self.tag_parser, &request.tag_path)?;
        Ok(InspectResponse { identity })
    }
}
