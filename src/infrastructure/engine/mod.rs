mod mock_engine;
mod model_catalog;
mod whisper_cpp_engine;

pub use mock_engine::{MockEngine, MockEngineScript};
pub use model_catalog::ModelCatalog;
pub use whisper_cpp_engine::{EngineConfig, WhisperCppEngine};
