mod common;

use common::{Reply, StubApi, pdf, photo, recording};

use surgisense_client::Upload;
use surgisense_core::models::chat::ChatRole;
use surgisense_dashboard::error::ViewError;
use surgisense_dashboard::state::DashboardState;
use surgisense_dashboard::views::chat::{ChatPanel, NETWORK_FAILURE, NO_ANSWER, WELCOME};
use surgisense_dashboard::views::discharge::DischargePanel;
use surgisense_dashboard::views::scanner::{NO_FILE, SCAN_FAILURE, ScannerPanel};
use surgisense_dashboard::views::voice::{SPEECH_FAILURE, VoicePanel};
use surgisense_dashboard::views::wound::{ANALYZE_FAILURE, WoundPanel};
use surgisense_severity::Tier;

// ── Wound ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn wound_analysis_produces_severity() {
    let panel = WoundPanel::default();
    let api = StubApi::ok("Redness and swelling around sutures. Severity 8/10");

    panel.select(photo()).await.unwrap();
    panel.analyze(&api).await.unwrap();

    let view = panel.view().await;
    let severity = view.severity.expect("severity");
    assert_eq!(severity.score.value(), 8);
    assert_eq!(severity.tier, Tier::Critical);
    assert_eq!(view.analysis.as_deref(), Some(severity.raw_text.as_str()));
    assert!(view.error.is_none());
    assert!(!view.loading);
}

#[tokio::test]
async fn wound_analysis_without_score_shows_text_only() {
    let panel = WoundPanel::default();
    panel.select(photo()).await.unwrap();
    panel.analyze(&StubApi::ok("The wound looks fine.")).await.unwrap();

    let view = panel.view().await;
    assert_eq!(view.analysis.as_deref(), Some("The wound looks fine."));
    assert!(view.severity.is_none());
    assert!(view.error.is_none());
}

#[tokio::test]
async fn wound_failure_prefers_backend_detail() {
    let panel = WoundPanel::default();
    panel.select(photo()).await.unwrap();

    let api = StubApi::replying(Reply::Fail(500, Some("API Error: quota exceeded")));
    let err = panel.analyze(&api).await.unwrap_err();
    assert!(matches!(err, ViewError::Remote { ref advisory, .. } if advisory == "API Error: quota exceeded"));
    assert_eq!(panel.view().await.error.as_deref(), Some("API Error: quota exceeded"));

    panel.analyze(&StubApi::replying(Reply::Invalid)).await.unwrap_err();
    let view = panel.view().await;
    assert_eq!(view.error.as_deref(), Some(ANALYZE_FAILURE));
    assert!(view.analysis.is_none());
    assert!(view.severity.is_none());
}

#[tokio::test]
async fn wound_requires_an_image() {
    let panel = WoundPanel::default();
    assert!(matches!(panel.select(pdf()).await, Err(ViewError::Rejected(_))));

    let api = StubApi::ok("3/10");
    assert!(matches!(panel.analyze(&api).await, Err(ViewError::NothingSelected)));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn new_selection_discards_previous_assessment() {
    let panel = WoundPanel::default();
    panel.select(photo()).await.unwrap();
    panel.analyze(&StubApi::ok("2/10")).await.unwrap();
    assert!(panel.view().await.severity.is_some());

    panel.select(Upload::new("second.png", vec![1])).await.unwrap();
    let view = panel.view().await;
    assert!(view.analysis.is_none());
    assert!(view.severity.is_none());
    assert_eq!(view.selected.unwrap().filename, "second.png");
}

#[tokio::test]
async fn resubmission_while_loading_is_rejected() {
    let panel = WoundPanel::default();
    panel.select(photo()).await.unwrap();
    let api = StubApi::slow("5/10");

    let (first, second) = tokio::join!(panel.analyze(&api), panel.analyze(&api));

    assert!(first.is_ok());
    assert!(matches!(second, Err(ViewError::Busy("wound analysis"))));
    assert_eq!(api.calls(), 1);
    assert!(!panel.view().await.loading);

    // The gate reopens once the first call finishes.
    panel.analyze(&api).await.unwrap();
    assert_eq!(api.calls(), 2);
}

// ── Scanner ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn scan_without_file_asks_for_one() {
    let panel = ScannerPanel::default();
    let err = panel.scan(&StubApi::ok("Hip Replacement")).await.unwrap_err();
    assert!(matches!(err, ViewError::NothingSelected));
    assert_eq!(panel.view().await.error.as_deref(), Some(NO_FILE));
}

#[tokio::test]
async fn scan_shows_extracted_data() {
    let panel = ScannerPanel::default();
    panel.select(pdf()).await.unwrap();
    panel.scan(&StubApi::ok("Hip Replacement")).await.unwrap();

    let view = panel.view().await;
    let result = view.result.unwrap();
    assert_eq!(result.surgery_title(), "Hip Replacement");
    assert_eq!(result.scheduled_date(), "Not Found");
    assert_eq!(result.pre_op_restrictions.len(), 1);
    assert!(view.error.is_none());
}

#[tokio::test]
async fn scan_failure_clears_previous_result() {
    let panel = ScannerPanel::default();
    panel.select(pdf()).await.unwrap();
    panel.scan(&StubApi::ok("Hip Replacement")).await.unwrap();

    let err = panel
        .scan(&StubApi::replying(Reply::Fail(400, Some("Unsupported binary file format."))))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), SCAN_FAILURE);

    let view = panel.view().await;
    assert!(view.result.is_none());
    assert_eq!(view.error.as_deref(), Some(SCAN_FAILURE));
}

#[tokio::test]
async fn scanner_accepts_text_but_not_audio() {
    let panel = ScannerPanel::default();
    assert!(panel.select(Upload::new("notes.txt", b"discharged".to_vec())).await.is_ok());
    assert!(matches!(panel.select(recording()).await, Err(ViewError::Rejected(_))));
}

// ── Discharge ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn discharge_rows_fill_placeholders() {
    let panel = DischargePanel::default();
    assert!(panel.view().await.rows.is_empty());

    panel.digitize(&StubApi::ok("Knee Arthroscopy"), pdf()).await.unwrap();

    let rows = panel.view().await.rows;
    let values: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.label.as_str(), r.value.as_str()))
        .collect();
    assert_eq!(
        values,
        [
            ("Procedure", "Knee Arthroscopy"),
            ("Follow-up Date", "2026-11-02"),
            ("Doctor", "—"),
            ("Medications", "2 prescriptions"),
        ]
    );
}

#[tokio::test]
async fn discharge_failure_keeps_last_record() {
    let panel = DischargePanel::default();
    panel.digitize(&StubApi::ok("Knee Arthroscopy"), pdf()).await.unwrap();

    let err = panel
        .digitize(&StubApi::replying(Reply::Invalid), pdf())
        .await
        .unwrap_err();
    assert!(matches!(err, ViewError::Remote { .. }));

    let record = panel.view().await.record.unwrap();
    assert_eq!(record.procedure.as_deref(), Some("Knee Arthroscopy"));
}

#[tokio::test]
async fn discharge_only_takes_pdfs() {
    let panel = DischargePanel::default();
    let api = StubApi::ok("unused");
    let err = panel.digitize(&api, photo()).await.unwrap_err();
    assert!(matches!(err, ViewError::Rejected(_)));
    assert_eq!(api.calls(), 0);
}

// ── Voice ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn voice_stores_transcript() {
    let panel = VoicePanel::default();
    panel
        .submit(&StubApi::ok("Mujhe halka bukhar hai since yesterday"), recording())
        .await
        .unwrap();

    let view = panel.view().await;
    assert_eq!(view.transcript.as_deref(), Some("Mujhe halka bukhar hai since yesterday"));
    assert!(view.error.is_none());
}

#[tokio::test]
async fn voice_failure_shows_speech_advisory() {
    let panel = VoicePanel::default();
    panel.submit(&StubApi::ok("first"), recording()).await.unwrap();
    panel
        .submit(&StubApi::replying(Reply::Fail(502, None)), recording())
        .await
        .unwrap_err();

    let view = panel.view().await;
    assert_eq!(view.error.as_deref(), Some(SPEECH_FAILURE));
    assert_eq!(view.transcript.as_deref(), Some("first"));
}

#[tokio::test]
async fn voice_rejects_non_audio() {
    let panel = VoicePanel::default();
    let err = panel.submit(&StubApi::ok(""), photo()).await.unwrap_err();
    assert!(matches!(err, ViewError::Rejected(_)));
}

// ── Chat ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn chat_starts_with_welcome() {
    let panel = ChatPanel::default();
    let messages = panel.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, ChatRole::Assistant);
    assert_eq!(messages[0].content, WELCOME);
}

#[tokio::test]
async fn blank_question_is_ignored() {
    let panel = ChatPanel::default();
    let api = StubApi::ok("answer");
    panel.send(&api, "   ").await.unwrap();
    assert_eq!(panel.messages().await.len(), 1);
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn chat_appends_question_and_answer() {
    let panel = ChatPanel::default();
    panel
        .send(&StubApi::ok("Twice daily"), "How often do I take cephalexin?")
        .await
        .unwrap();

    let messages = panel.messages().await;
    let roles: Vec<ChatRole> = messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, [ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
    assert_eq!(messages[1].content, "How often do I take cephalexin?");
    assert_eq!(messages[2].content, "Twice daily (How often do I take cephalexin?)");
}

#[tokio::test]
async fn declined_answer_becomes_error_message() {
    let panel = ChatPanel::default();
    let err = panel
        .send(&StubApi::replying(Reply::Declined), "Can I shower?")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), NO_ANSWER);

    let last = panel.messages().await.pop().unwrap();
    assert_eq!(last.role, ChatRole::Error);
    assert_eq!(last.content, NO_ANSWER);
}

#[tokio::test]
async fn unreachable_chat_backend_becomes_network_alert() {
    let panel = ChatPanel::default();
    panel
        .send(&StubApi::replying(Reply::Fail(503, None)), "Can I shower?")
        .await
        .unwrap_err();

    let last = panel.messages().await.pop().unwrap();
    assert_eq!(last.role, ChatRole::Error);
    assert_eq!(last.content, NETWORK_FAILURE);
}

// ── Dashboard ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn panels_do_not_block_each_other() {
    let state = DashboardState::new(None);
    state.wound.select(photo()).await.unwrap();
    let api = StubApi::slow("4/10");

    let (wound, voice) = tokio::join!(
        state.wound.analyze(&api),
        state.voice.submit(&api, recording()),
    );

    assert!(wound.is_ok());
    assert!(voice.is_ok());
    assert_eq!(api.calls(), 2);
}

