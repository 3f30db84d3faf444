/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and results back
/// out, keeping the domain layer isolated.
mod extraction_request;
mod extraction_response;
mod output_format;

pub use extraction_request::ExtractionRequest;
pub use extraction_response::ExtractionResponse;
pub use output_format::OutputFormat;
