/// Use cases module containing application business logic orchestration
mod inspect_tag;
mod load_tag;
mod rank_tags;

pub use inspect_tag::InspectTagUseCase;
pub use rank_tags::RankTagsUseCase;
