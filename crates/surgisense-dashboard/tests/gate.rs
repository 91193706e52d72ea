use surgisense_dashboard::error::ViewError;
use surgisense_dashboard::gate::ActionGate;

#[test]
fn gate_admits_one_action_at_a_time() {
    let gate = ActionGate::new("upload");
    assert!(!gate.is_loading());

    let guard = gate.try_begin().unwrap();
    assert!(gate.is_loading());
    assert!(matches!(gate.try_begin(), Err(ViewError::Busy("upload"))));

    drop(guard);
    assert!(!gate.is_loading());
    assert!(gate.try_begin().is_ok());
}

#[test]
fn busy_error_names_the_action() {
    let gate = ActionGate::new("transcription");
    let _guard = gate.try_begin().unwrap();
    let err = gate.try_begin().unwrap_err();
    assert_eq!(err.to_string(), "transcription is already in progress");
    assert_eq!(gate.action(), "transcription");
}
