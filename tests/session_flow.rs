//! Integration tests for a full study session.
//!
//! These drive the public library API the way the binary does: a catalog
//! loaded from JSON, progress persisted under a data directory, and the
//! Gemini gateway talking to a mock HTTP server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hanzi_hero::config::AppConfig;
use hanzi_hero::core::catalog::{Catalog, HskLevel};
use hanzi_hero::core::difficulty::{Difficulty, DifficultyFilter};
use hanzi_hero::core::gateway::{ContentGateway, GeminiGateway};
use hanzi_hero::core::generated::{ContentState, GeneratedContent};
use hanzi_hero::core::navigation::DisplayMode;
use hanzi_hero::core::progress::FileProgressStore;
use hanzi_hero::core::study::StudySession;

const CATALOG: &str = r#"{
    "words": [
        {"id": "a", "char": "一", "pinyin": "yī", "en": "one", "level": 1},
        {"id": "b", "char": "丁", "pinyin": "dīng", "en": "fourth", "level": 1},
        {"id": "c", "char": "丂", "pinyin": "kǎo", "en": "breath", "level": 1},
        {"id": "d", "char": "帮助", "pinyin": "bāngzhù", "en": "help", "level": 2}
    ],
    "grammar": [
        {"id": "g1", "title": "是 Sentences", "level": 1, "description": "Linking nouns"}
    ]
}"#;

fn load_catalog(dir: &std::path::Path) -> Catalog {
    let path = dir.join("catalog.json");
    std::fs::write(&path, CATALOG).unwrap();
    Catalog::from_json_file(&path).unwrap()
}

fn current_id(session: &StudySession) -> Option<&str> {
    session.current_word().map(|w| w.id.as_str())
}

#[test]
fn test_mastery_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = StudySession::new(
        load_catalog(dir.path()),
        Box::new(FileProgressStore::new(dir.path())),
    );
    assert_eq!(current_id(&session), Some("a"));
    session.toggle_mastery("a", true).unwrap();
    assert_eq!(current_id(&session), Some("b"));

    let stored = std::fs::read_to_string(dir.path().join("hsk_mastered.json")).unwrap();
    assert_eq!(serde_json::from_str::<Vec<String>>(&stored).unwrap(), vec!["a"]);

    let restarted = StudySession::new(
        load_catalog(dir.path()),
        Box::new(FileProgressStore::new(dir.path())),
    );
    assert!(restarted.is_mastered("a"));
    assert_eq!(current_id(&restarted), Some("a"));
    assert_eq!(restarted.level_progress().mastered, 1);
    assert_eq!(restarted.level_progress().total, 3);
}

#[test]
fn test_word_list_selection_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = StudySession::new(
        load_catalog(dir.path()),
        Box::new(FileProgressStore::new(dir.path())),
    );

    session.change_mode(DisplayMode::WordList);
    let medium = session.filtered_words(DifficultyFilter::Only(Difficulty::Medium));
    assert_eq!(medium.len(), 1);
    assert_eq!(medium[0].1.id, "b");

    let hard = session.filtered_words(DifficultyFilter::Only(Difficulty::Hard));
    assert_eq!(hard.iter().map(|(_, w)| w.id.as_str()).collect::<Vec<_>>(), vec!["c"]);

    let (index, _) = hard[0];
    assert!(session.select_from_list(index));
    assert_eq!(session.mode(), DisplayMode::Flashcards);
    assert_eq!(current_id(&session), Some("c"));

    session.change_level(HskLevel::Hsk2);
    assert!(session
        .filtered_words(DifficultyFilter::Only(Difficulty::Hard))
        .is_empty());
    assert_eq!(current_id(&session), Some("d"));

    session.change_level(HskLevel::Hsk3);
    assert_eq!(current_id(&session), None);
    assert!(session.level_topics().is_empty());
}

#[tokio::test]
async fn test_failed_generation_allows_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "# 是\n- 我是学生。"}]}}]
        })))
        .mount(&server)
        .await;

    let gateway = GeminiGateway::new("key".into(), "test-model".into(), Duration::from_secs(5))
        .unwrap()
        .with_base_url(server.uri());
    let dir = tempfile::tempdir().unwrap();
    let catalog = load_catalog(dir.path());
    let topic = catalog.topics_at(HskLevel::Hsk1)[0].clone();

    let mut slot: GeneratedContent<String> = GeneratedContent::new();
    let ticket = slot.begin().unwrap();
    slot.complete(ticket, gateway.generate_lesson(&topic).await);
    assert_eq!(slot.state(), &ContentState::Unavailable);

    let ticket = slot.begin().expect("retry is offered after a failure");
    slot.complete(ticket, gateway.generate_lesson(&topic).await);
    assert_eq!(slot.ready().map(String::as_str), Some("# 是\n- 我是学生。"));
}

#[test]
fn test_config_file_drives_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let data_dir = dir.path().join("data");
    std::fs::write(
        &config_path,
        format!(
            "[data]\ndata_dir = {:?}\n\n[speech]\nenabled = false\n",
            data_dir.display().to_string()
        ),
    )
    .unwrap();

    let config = AppConfig::load_from(&config_path);
    assert_eq!(config.data_dir(), data_dir);
    assert!(!config.speech.enabled);
}
