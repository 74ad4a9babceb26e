//! End-to-end timing scenarios through the public API

use splitwatch::{BoatId, Session, SessionConfig, TimingError};

fn running(config: SessionConfig) -> Session {
    let mut session = Session::new(config).expect("valid config");
    session.start();
    session
}

#[test]
fn standard_2000m_race() {
    let mut session = running(SessionConfig::new(1, 2000, 500));
    let boat = BoatId::new(1);

    let recorded: Vec<_> = [60.0, 125.0, 190.0, 250.0]
        .into_iter()
        .map(|t| session.record_split(boat, t).expect("within limit").clone())
        .collect();

    let distances: Vec<u32> = recorded.iter().map(|s| s.distance_meters).collect();
    assert_eq!(distances, vec![500, 1000, 1500, 2000]);

    let paces: Vec<&str> = recorded.iter().map(|s| s.pace.as_str()).collect();
    assert_eq!(paces, vec!["1:00.00", "1:05.00", "1:05.00", "1:00.00"]);

    // Interval diff compares against the previous split's interval time
    assert_eq!(recorded[1].interval_diff_seconds, 65.0);
    assert_eq!(recorded[1].interval_diff, "65.00s");
    assert_eq!(recorded[2].interval_diff_seconds, 125.0);

    let err = session.record_split(boat, 300.0).unwrap_err();
    assert!(err.is_guarded_rejection());
    assert_eq!(session.boats()[0].split_count(), 4);
}

#[test]
fn boats_are_timed_independently() {
    let mut session = running(SessionConfig::new(3, 1000, 250));

    session.record_split(BoatId::new(2), 50.0).expect("boat 2");
    session.record_split(BoatId::new(1), 52.0).expect("boat 1");
    session.record_split(BoatId::new(2), 101.0).expect("boat 2 again");

    let counts: Vec<usize> = session.boats().iter().map(|b| b.split_count()).collect();
    assert_eq!(counts, vec![1, 2, 0]);
    assert_eq!(session.max_split_count(), 2);
    assert!(session.can_record_split(BoatId::new(3)));
}

#[test]
fn partial_last_split_is_not_allowed() {
    let mut session = running(SessionConfig::new(1, 1000, 300));
    assert_eq!(session.split_limit(), 3);

    for t in [70.0, 140.0, 210.0] {
        session.record_split(BoatId::new(1), t).expect("within limit");
    }
    assert!(matches!(
        session.record_split(BoatId::new(1), 250.0),
        Err(TimingError::SplitLimitReached { limit: 3, .. })
    ));
}

#[test]
fn yaml_config_drives_session() {
    let yaml = r#"
number_of_boats: 2
session_distance_meters: 1000
split_distance_meters: 500
boats:
  - boat_class: W2X
    boat_name: Harbour
"#;
    let config = SessionConfig::from_yaml_str(yaml).expect("valid yaml");
    let session = Session::new(config).expect("valid config");

    assert_eq!(session.boats()[0].boat_class(), "W2X");
    assert_eq!(session.boats()[0].boat_name(), "Harbour");
    assert_eq!(session.boats()[1].boat_name(), "Boat 2");
    assert_eq!(session.split_limit(), 2);
}

#[test]
fn rejected_commands_leave_state_alone() {
    let mut session = Session::new(SessionConfig::new(1, 2000, 500)).expect("valid config");

    assert!(matches!(
        session.record_split(BoatId::new(1), 10.0),
        Err(TimingError::SessionNotRunning)
    ));

    session.start();
    session.record_split(BoatId::new(1), 30.0).expect("split");
    for elapsed in [30.0, 29.0, f64::NAN] {
        let err = session.record_split(BoatId::new(1), elapsed).unwrap_err();
        assert!(matches!(err, TimingError::NonMonotonicSplit { .. }));
    }

    assert_eq!(session.boats()[0].split_count(), 1);
}
