pub mod embeddings;
pub mod engine;
pub mod index;
pub mod observability;
pub mod staging;
