mod embedder;
mod staging_area;
mod transcription_engine;
mod vector_index;

pub use embedder::{Embedder, EmbedderError};
pub use staging_area::{StagedAudio, StagingArea, StagingError};
pub use transcription_engine::{EngineOutcome, TranscriptionEngine};
pub use vector_index::{IndexMatch, VectorIndex, VectorIndexError};
