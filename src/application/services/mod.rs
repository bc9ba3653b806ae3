mod movie_search_service;
mod transcription_service;

pub use movie_search_service::{MovieSearchError, MovieSearchService};
pub use transcription_service::{
    AudioUpload, TranscriptionFailure, TranscriptionRequest, TranscriptionService,
    MAX_UPLOAD_BYTES,
};
