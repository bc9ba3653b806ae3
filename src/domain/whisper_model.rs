use std::fmt;
use std::str::FromStr;

/// Size selector for the whisper.cpp model assets.
///
/// The set is closed: anything outside it is rejected at parse time,
/// before any filesystem or process resource is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhisperModel {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl WhisperModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// File name of the ggml weight asset for this model size.
    pub fn asset_file_name(&self) -> String {
        format!("ggml-{}.bin", self.as_str())
    }
}

impl FromStr for WhisperModel {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiny" => Ok(Self::Tiny),
            "base" => Ok(Self::Base),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(UnknownModel(other.to_string())),
        }
    }
}

impl fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown model: {0}. Expected: tiny, base, small, medium, or large")]
pub struct UnknownModel(pub String);
