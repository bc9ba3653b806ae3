/// Successful transcription payload, handed back to the caller and then
/// discarded; nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcription {
    pub text: String,
    pub model_used: String,
    pub language_used: String,
    pub source_file_name: String,
}
