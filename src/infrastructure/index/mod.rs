mod mock_vector_index;
mod pinecone_index;

pub use mock_vector_index::MockVectorIndex;
pub use pinecone_index::PineconeIndex;
