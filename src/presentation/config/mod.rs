mod environment;
mod settings;

pub use environment::{Environment, UnknownEnvironment};
pub use settings::{
    EmbeddingsSettings, EngineSettings, IndexSettings, ServerSettings, Settings, SettingsError,
    StagingSettings,
};
