mod embedding;
mod movie_record;
mod transcription;
mod transcription_job;
mod whisper_model;

pub use embedding::Embedding;
pub use movie_record::MovieRecord;
pub use transcription::Transcription;
pub use transcription_job::TranscriptionJob;
pub use whisper_model::{UnknownModel, WhisperModel};
