/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the model builders and coordinates with the
/// build host, the file system and the console through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
