/// Use cases module containing application business logic orchestration
mod extract_model;
mod load_model;

pub use extract_model::ExtractModelUseCase;
pub use load_model::LoadModelUseCase;
