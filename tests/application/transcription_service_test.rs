use std::sync::Arc;

use bytes::Bytes;

use sussurro::application::services::{
    AudioUpload, TranscriptionFailure, TranscriptionRequest, TranscriptionService,
    MAX_UPLOAD_BYTES,
};
use sussurro::domain::WhisperModel;
use sussurro::infrastructure::engine::{MockEngine, MockEngineScript};
use sussurro::infrastructure::staging::LocalStagingArea;

fn service_with(
    script: MockEngineScript,
) -> (
    tempfile::TempDir,
    Arc<MockEngine>,
    TranscriptionService<MockEngine, LocalStagingArea>,
) {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(MockEngine::new(script));
    let staging = Arc::new(LocalStagingArea::new(dir.path()).unwrap());
    let service = TranscriptionService::new(Arc::clone(&engine), staging, WhisperModel::Small);
    (dir, engine, service)
}

fn audio_request(model: Option<&str>, language: Option<&str>) -> TranscriptionRequest {
    TranscriptionRequest {
        audio: Some(AudioUpload {
            original_filename: "meeting.mp3".to_string(),
            content_type: Some("audio/mpeg".to_string()),
            data: Bytes::from_static(b"fake audio bytes"),
        }),
        model: model.map(String::from),
        language: language.map(String::from),
    }
}

fn staged_entry_count(dir: &tempfile::TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

#[tokio::test]
async fn given_engine_writing_stdout_when_transcribing_then_trimmed_stdout_is_the_text() {
    let (dir, _engine, service) = service_with(MockEngineScript::Succeed {
        stdout: " hello world \n".to_string(),
    });

    let result = service.transcribe(audio_request(None, None)).await.unwrap();

    assert_eq!(result.text, "hello world");
    assert_eq!(result.model_used, "small");
    assert_eq!(result.language_used, "auto-detect");
    assert_eq!(result.source_file_name, "meeting.mp3");
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_engine_writing_side_file_when_transcribing_then_side_file_supersedes_stdout() {
    let (dir, _engine, service) = service_with(MockEngineScript::SucceedWithSideFile {
        contents: "override\n".to_string(),
        stdout: "stdout text".to_string(),
    });

    let result = service.transcribe(audio_request(None, None)).await.unwrap();

    assert_eq!(result.text, "override");
    // Side file consumed during resolution, staged upload removed by the guard.
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_language_hint_when_transcribing_then_hint_is_echoed_back() {
    let (_dir, _engine, service) = service_with(MockEngineScript::Succeed {
        stdout: "bonjour".to_string(),
    });

    let result = service
        .transcribe(audio_request(Some("base"), Some("fr")))
        .await
        .unwrap();

    assert_eq!(result.model_used, "base");
    assert_eq!(result.language_used, "fr");
}

#[tokio::test]
async fn given_engine_exiting_zero_with_no_output_when_transcribing_then_text_is_empty() {
    let (_dir, _engine, service) = service_with(MockEngineScript::Succeed {
        stdout: String::new(),
    });

    let result = service.transcribe(audio_request(None, None)).await.unwrap();

    assert_eq!(result.text, "");
}

#[tokio::test]
async fn given_engine_failure_when_transcribing_then_stderr_reaches_the_detail() {
    let (dir, _engine, service) = service_with(MockEngineScript::Fail {
        code: 2,
        stderr: "boom".to_string(),
    });

    let err = service
        .transcribe(audio_request(None, None))
        .await
        .unwrap_err();

    match err {
        TranscriptionFailure::EngineError(detail) => assert!(detail.contains("boom")),
        other => panic!("expected EngineError, got {:?}", other),
    }
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_engine_failure_with_empty_stderr_when_transcribing_then_generic_detail_names_the_code() {
    let (_dir, _engine, service) = service_with(MockEngineScript::Fail {
        code: 3,
        stderr: String::new(),
    });

    let err = service
        .transcribe(audio_request(None, None))
        .await
        .unwrap_err();

    match err {
        TranscriptionFailure::EngineError(detail) => assert!(detail.contains("3")),
        other => panic!("expected EngineError, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unlaunchable_engine_when_transcribing_then_failure_is_unavailable_and_staging_is_clean() {
    let (dir, _engine, service) = service_with(MockEngineScript::Unavailable);

    let err = service
        .transcribe(audio_request(None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionFailure::EngineUnavailable(_)));
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_unobservable_exit_status_when_transcribing_then_failure_is_internal_not_unavailable() {
    let (dir, _engine, service) = service_with(MockEngineScript::WaitFailed);

    let err = service
        .transcribe(audio_request(None, None))
        .await
        .unwrap_err();

    // The process did start, so this must not surface as EngineUnavailable.
    assert!(matches!(err, TranscriptionFailure::Internal(_)));
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_unknown_model_when_transcribing_then_invalid_input_and_engine_never_runs() {
    let (dir, engine, service) = service_with(MockEngineScript::Succeed {
        stdout: "never".to_string(),
    });

    let err = service
        .transcribe(audio_request(Some("gigantic"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionFailure::InvalidInput(_)));
    assert_eq!(engine.run_count(), 0);
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_no_audio_field_when_transcribing_then_invalid_input_before_any_staging() {
    let (dir, engine, service) = service_with(MockEngineScript::Succeed {
        stdout: "never".to_string(),
    });

    let err = service
        .transcribe(TranscriptionRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionFailure::InvalidInput(_)));
    assert_eq!(engine.run_count(), 0);
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_disallowed_file_type_when_transcribing_then_invalid_input() {
    let (_dir, engine, service) = service_with(MockEngineScript::Succeed {
        stdout: "never".to_string(),
    });

    let request = TranscriptionRequest {
        audio: Some(AudioUpload {
            original_filename: "notes.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            data: Bytes::from_static(b"%PDF-1.4"),
        }),
        model: None,
        language: None,
    };

    let err = service.transcribe(request).await.unwrap_err();

    assert!(matches!(err, TranscriptionFailure::InvalidInput(_)));
    assert_eq!(engine.run_count(), 0);
}

#[tokio::test]
async fn given_audio_content_type_with_unlisted_extension_when_transcribing_then_it_is_accepted() {
    let (_dir, _engine, service) = service_with(MockEngineScript::Succeed {
        stdout: "ok".to_string(),
    });

    let request = TranscriptionRequest {
        audio: Some(AudioUpload {
            original_filename: "clip.aiff".to_string(),
            content_type: Some("audio/aiff".to_string()),
            data: Bytes::from_static(b"fake audio"),
        }),
        model: None,
        language: None,
    };

    assert!(service.transcribe(request).await.is_ok());
}

#[tokio::test]
async fn given_oversize_payload_when_transcribing_then_invalid_input() {
    let (dir, engine, service) = service_with(MockEngineScript::Succeed {
        stdout: "never".to_string(),
    });

    let request = TranscriptionRequest {
        audio: Some(AudioUpload {
            original_filename: "huge.wav".to_string(),
            content_type: Some("audio/wav".to_string()),
            data: Bytes::from(vec![0u8; MAX_UPLOAD_BYTES as usize + 1]),
        }),
        model: None,
        language: None,
    };

    let err = service.transcribe(request).await.unwrap_err();

    assert!(matches!(err, TranscriptionFailure::InvalidInput(_)));
    assert_eq!(engine.run_count(), 0);
    assert_eq!(staged_entry_count(&dir), 0);
}

#[tokio::test]
async fn given_identical_requests_when_transcribing_twice_then_payloads_match() {
    let (_dir, engine, service) = service_with(MockEngineScript::Succeed {
        stdout: "deterministic".to_string(),
    });

    let first = service.transcribe(audio_request(None, None)).await.unwrap();
    let second = service.transcribe(audio_request(None, None)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.run_count(), 2);
}
