// SPDX-License-Identifier: MPL-2.0
use plate_lens::analysis::{AnalysisJob, DEFAULT_DELAY};
use plate_lens::config::{self, Config};
use plate_lens::domain::session::{DragEvent, Session};
use plate_lens::i18n::fluent::I18n;
use plate_lens::infrastructure::FixedAnalyzer;
use plate_lens::media::{self, intake::BYTES_PER_MB};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to ru
    let mut russian_config = Config::default();
    russian_config.general.language = Some("ru".to_string());
    config::save_to_path(&russian_config, &temp_config_file_path)
        .expect("Failed to write russian config file");

    let loaded_russian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load russian config from path");
    let i18n_ru = I18n::new(None, &loaded_russian_config);
    assert_eq!(i18n_ru.current_locale().to_string(), "ru");
    assert_eq!(i18n_ru.tr("results-protein"), "Белки");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("ru".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[tokio::test(start_paused = true)]
async fn test_dropped_photo_is_analyzed_after_delay() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let photo = dir.path().join("plate.jpg");
    fs::write(&photo, [0_u8; 512]).expect("Failed to write photo");

    let mut session = Session::new();
    session.handle_drag_event(DragEvent::Enter);
    let image = media::inspect(&photo, BYTES_PER_MB).expect("photo should be accepted");
    session.handle_drop(image.clone());
    assert!(!session.drag_active());

    let ticket = session.begin_analysis().expect("analysis should start");
    let job = AnalysisJob::new(ticket, image, DEFAULT_DELAY, Arc::new(FixedAnalyzer));
    let handle = tokio::spawn(job.run());

    tokio::time::sleep(DEFAULT_DELAY - Duration::from_millis(1)).await;
    assert!(session.is_analyzing());
    assert!(!session.show_results());

    let outcome = handle.await.expect("job should not panic");
    let result = outcome.result.expect("fixed analyzer never fails");
    assert!(session.complete_analysis(outcome.ticket, result));

    assert!(!session.is_analyzing());
    assert!(session.show_results());
    let result = session.result().expect("results shown");
    assert_eq!(result.calories_kcal, 387);
    assert_eq!(result.macros.protein_g, 42);
    assert_eq!(result.confidence.value(), 94);
}

#[tokio::test(start_paused = true)]
async fn test_reselecting_during_analysis_discards_old_run() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    fs::write(&first, [0_u8; 16]).expect("Failed to write photo");
    fs::write(&second, [0_u8; 16]).expect("Failed to write photo");

    let mut session = Session::new();
    let first_image = media::inspect(&first, BYTES_PER_MB).expect("accepted");
    session.select_file(first_image.clone());
    let ticket = session.begin_analysis().expect("analysis should start");
    let stale = AnalysisJob::new(ticket, first_image, DEFAULT_DELAY, Arc::new(FixedAnalyzer));

    let cancelled = session.select_file(media::inspect(&second, BYTES_PER_MB).expect("accepted"));
    assert_eq!(cancelled, Some(ticket));

    let outcome = stale.run().await;
    let result = outcome.result.expect("fixed analyzer never fails");
    assert!(!session.complete_analysis(outcome.ticket, result));
    assert!(!session.show_results());
    assert_eq!(
        session.selected_file().map(|image| image.file_name()),
        Some("second.png")
    );
}

#[test]
fn test_size_limit_from_config_is_enforced() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let photo = dir.path().join("huge.jpg");
    fs::write(&photo, vec![0_u8; 2 * BYTES_PER_MB as usize]).expect("Failed to write photo");

    let mut config = Config::default();
    config.analysis.max_file_size_mb = Some(1);

    let err = media::inspect(&photo, config.analysis.max_file_size_bytes())
        .expect_err("oversized photo must be rejected");
    assert_eq!(err.i18n_key(), "notification-file-too-large");
}
