use chairtime_core::errors::{ScheduleError, ScheduleResult};
use pretty_assertions::assert_eq;

#[test]
fn error_display_names_the_failure() {
    let invalid_time = ScheduleError::InvalidTime("9am".to_string());
    let validation = ScheduleError::Validation("slot interval must be positive".to_string());
    let store = ScheduleError::Store(eyre::eyre!("connection refused"));

    assert_eq!(invalid_time.to_string(), "Invalid time of day: 9am");
    assert_eq!(
        validation.to_string(),
        "Validation error: slot interval must be positive"
    );
    assert!(store.to_string().contains("Store error:"));
}

#[test]
fn store_errors_convert_from_eyre() {
    let report = eyre::eyre!("query timed out");
    let error: ScheduleError = report.into();
    assert!(matches!(error, ScheduleError::Store(_)));
}

#[test]
fn schedule_result_round_trips() {
    let ok: ScheduleResult<usize> = Ok(6);
    assert_eq!(ok.unwrap(), 6);

    let err: ScheduleResult<usize> = Err(ScheduleError::InvalidTime("::".to_string()));
    assert!(err.is_err());
}
