mod common;
use common::{dt, init_tracing, reporter};
use rreporter::{AppError, BasicReporter, Reporter, StateField, Timeframe};

#[test]
fn test_hour_normalizes_since_to_start_of_hour() {
    let r = reporter(Timeframe::Hour, "2024-01-01 10:37:22", "2024-01-01 10:05:00");
    assert_eq!(r.since().unwrap(), dt("2024-01-01 10:00:00"));
}

#[test]
fn test_hour_normalizes_till_to_end_of_hour() {
    let r = reporter(Timeframe::Hour, "2024-01-01 10:37:22", "2024-01-01 10:05:00");
    assert_eq!(r.till().unwrap(), dt("2024-01-01 10:59:59"));
}

#[test]
fn test_blank_returns_values_unchanged() {
    let r = reporter(Timeframe::Blank, "2024-01-01 10:37:22", "2024-01-03 11:05:09");
    assert_eq!(
        r.date_range().unwrap(),
        (dt("2024-01-01 10:37:22"), dt("2024-01-03 11:05:09"))
    );
}

#[test]
fn test_normalization_happens_on_read_only() {
    let mut r = reporter(Timeframe::Day, "2024-01-01 10:37:22", "2024-01-01 10:05:00");
    assert_eq!(r.since().unwrap(), dt("2024-01-01 00:00:00"));

    // switching timeframe re-normalizes the stored raw value
    r.set_timeframe(Timeframe::Hour);
    assert_eq!(r.since().unwrap(), dt("2024-01-01 10:00:00"));
    r.set_timeframe(Timeframe::Blank);
    assert_eq!(r.since().unwrap(), dt("2024-01-01 10:37:22"));
}

#[test]
fn test_date_range_exceeds_limit() {
    let mut r = reporter(Timeframe::Day, "2024-01-01 10:00:00", "2024-01-05 08:00:00");
    r.set_date_range_limit(3);

    let err = r.date_range().unwrap_err();
    assert!(matches!(err, AppError::DateRangeExceeded(3)));
    assert_eq!(err.to_string(), "Date range must be under 3 days");
}

#[test]
fn test_date_range_within_limit() {
    let mut r = reporter(Timeframe::Day, "2024-01-01 10:00:00", "2024-01-05 08:00:00");
    r.set_date_range_limit(4);

    let (since, till) = r.date_range().unwrap();
    assert_eq!(since, dt("2024-01-01 00:00:00"));
    assert_eq!(
        till,
        dt("2024-01-05 00:00:00") + chrono::Duration::days(1) - chrono::Duration::microseconds(1)
    );
}

#[test]
fn test_date_range_without_limit() {
    let r = reporter(Timeframe::Day, "2024-01-01 10:00:00", "2024-01-05 08:00:00");
    assert_eq!(r.date_range_limit(), None);

    let (since, till) = r.date_range().unwrap();
    assert_eq!(since, dt("2024-01-01 00:00:00"));
    assert_eq!(till.format("%H:%M:%S%.3f").to_string(), "23:59:59.999");
}

#[test]
fn test_reversed_range_is_checked_by_magnitude() {
    let mut r = reporter(Timeframe::Blank, "2024-01-10 00:00:00", "2024-01-01 00:00:00");
    r.set_date_range_limit(3);
    assert!(matches!(r.date_range(), Err(AppError::DateRangeExceeded(3))));

    r.set_date_range_limit(9);
    assert!(r.date_range().is_ok());
}

#[test]
fn test_fresh_reporter_reads_fail() {
    init_tracing();
    let r = BasicReporter::new();
    assert!(matches!(r.since(), Err(AppError::MissingState(StateField::Since))));
    assert!(matches!(r.till(), Err(AppError::MissingState(StateField::Till))));
    assert!(matches!(
        r.timeframe(),
        Err(AppError::MissingState(StateField::Timeframe))
    ));
    assert!(matches!(
        r.date_range(),
        Err(AppError::MissingState(StateField::Since))
    ));
}

#[test]
fn test_date_range_reports_missing_till() {
    let mut r = BasicReporter::new();
    r.set_timeframe(Timeframe::Day)
        .set_date_range_limit(1)
        .set_since(dt("2024-01-01 00:00:00"));

    assert!(matches!(
        r.date_range(),
        Err(AppError::MissingState(StateField::Till))
    ));
}

#[test]
fn test_limit_without_timeframe_fails_on_validation() {
    let mut r = BasicReporter::new();
    r.set_date_range_limit(1)
        .set_since(dt("2024-01-01 00:00:00"))
        .set_till(dt("2024-01-02 00:00:00"));

    assert!(matches!(
        r.date_range(),
        Err(AppError::MissingState(StateField::Timeframe))
    ));
}

#[test]
fn test_timeframe_round_trips() {
    let mut r = BasicReporter::new();
    for tf in Timeframe::ALL {
        r.set_timeframe(tf);
        assert_eq!(r.timeframe().unwrap(), tf);
    }
    for code in ["blank", "day", "hour"] {
        r.set_timeframe_str(code).unwrap();
        assert_eq!(r.timeframe().unwrap().as_str(), code);
    }
}

#[test]
fn test_invalid_timeframe_is_rejected_and_keeps_previous() {
    let mut r = BasicReporter::new();
    r.set_timeframe(Timeframe::Hour);

    for bad in ["week", "minute", "Day", ""] {
        let err = r.set_timeframe_str(bad).err().unwrap();
        assert!(matches!(err, AppError::InvalidTimeframe(ref v) if v == bad));
    }
    assert_eq!(r.timeframe().unwrap(), Timeframe::Hour);
}

#[test]
fn test_date_range_limit_round_trips() {
    let mut r = BasicReporter::new();
    r.set_date_range_limit(7).set_date_range_limit(30);
    assert_eq!(r.date_range_limit(), Some(30));
}

#[test]
fn test_setters_overwrite() {
    let mut r = reporter(Timeframe::Blank, "2024-01-01 00:00:00", "2024-01-02 00:00:00");
    r.set_since(dt("2024-03-01 12:00:00"));
    assert_eq!(r.since().unwrap(), dt("2024-03-01 12:00:00"));
}
