mod cohere_embedder;
mod mock_embedder;

pub use cohere_embedder::CohereEmbedder;
pub use mock_embedder::{EmptyEmbedder, MockEmbedder};
