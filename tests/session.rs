mod common;

use common::{click, click_outside};
use epic::{EventOutcome, PickEvent, PickKey, PickSession, PointLimit, SessionState};

#[test]
fn new_session_is_not_started() {
    let session = PickSession::new(1, PointLimit::Unlimited);
    assert_eq!(session.state(), SessionState::NotStarted);
    assert!(!session.is_over());
}

#[test]
fn session_reports_its_shape_and_limit() {
    let session = PickSession::new(2, PointLimit::AtMost(5));
    assert_eq!(session.panel_count(), 2);
    assert_eq!(session.limit(), PointLimit::AtMost(5));
    assert!(session.points(2).is_empty());
}

#[test]
fn first_event_starts_the_session() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    session.handle(click(0, 1.0, 1.0));
    assert_eq!(session.state(), SessionState::InProgress);
}

#[test]
fn capped_single_session_keeps_click_order_and_ends_on_extra_click() {
    let mut session = PickSession::new(1, PointLimit::AtMost(3));
    assert_eq!(
        session.handle(click(0, 1.0, 2.0)),
        EventOutcome::Recorded { panel: 0, index: 0 }
    );
    session.handle(click(0, 3.0, 4.0));
    session.handle(click(0, 5.0, 6.0));
    assert_eq!(session.state(), SessionState::InProgress);

    assert_eq!(session.handle(click(0, 7.0, 8.0)), EventOutcome::Finished);
    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.points(0), &[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
}

#[test]
fn cancel_clears_points_and_requests_restart() {
    let mut session = PickSession::new(1, PointLimit::AtMost(3));
    session.handle(click(0, 1.0, 2.0));
    session.handle(click(0, 3.0, 4.0));

    assert_eq!(
        session.handle(PickEvent::Key(PickKey::Cancel)),
        EventOutcome::Cancelled
    );
    assert!(session.restart_requested());
    assert!(session.points(0).is_empty());
}

#[test]
fn finish_key_returns_points_so_far() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    session.handle(click(0, 1.0, 2.0));
    assert_eq!(
        session.handle(PickEvent::Key(PickKey::Finish)),
        EventOutcome::Finished
    );
    assert!(!session.restart_requested());
    assert_eq!(session.into_sequences(), vec![vec![[1.0, 2.0]]]);
}

#[test]
fn finish_key_on_an_empty_session_returns_nothing() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    session.handle(PickEvent::Key(PickKey::Finish));
    assert_eq!(session.into_sequences(), vec![Vec::<[f64; 2]>::new()]);
}

#[test]
fn close_keeps_points() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    session.handle(click(0, 9.0, 9.0));
    assert_eq!(session.handle(PickEvent::Close), EventOutcome::Finished);
    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.points(0), &[[9.0, 9.0]]);
}

#[test]
fn events_after_the_end_are_ignored() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    session.handle(PickEvent::Key(PickKey::Finish));
    assert_eq!(session.handle(click(0, 1.0, 1.0)), EventOutcome::Ignored);
    assert_eq!(
        session.handle(PickEvent::Key(PickKey::Cancel)),
        EventOutcome::Ignored
    );
    assert_eq!(session.state(), SessionState::Completed);
    assert!(session.points(0).is_empty());
}

#[test]
fn unlimited_session_never_ends_on_a_click() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    for i in 0..100 {
        session.handle(click(0, i as f64, 0.0));
    }
    assert_eq!(session.state(), SessionState::InProgress);
    assert_eq!(session.points(0).len(), 100);
}

#[test]
fn clicks_outside_every_image_are_ignored() {
    let mut session = PickSession::new(1, PointLimit::AtMost(2));
    assert_eq!(session.handle(click_outside(-10.0, 5.0)), EventOutcome::Ignored);
    assert!(session.points(0).is_empty());
}

#[test]
fn dual_clicks_are_routed_independently() {
    let mut session = PickSession::new(2, PointLimit::AtMost(3));
    session.handle(click(0, 1.0, 1.0));
    session.handle(click(1, 2.0, 2.0));
    session.handle(click(0, 3.0, 3.0));

    assert_eq!(session.points(0), &[[1.0, 1.0], [3.0, 3.0]]);
    assert_eq!(session.points(1), &[[2.0, 2.0]]);
}

#[test]
fn dual_session_ends_only_when_both_sides_are_full() {
    let mut session = PickSession::new(2, PointLimit::AtMost(3));
    for i in 0..3 {
        session.handle(click(0, i as f64, 0.0));
    }
    // the first image is full: further clicks on it are dropped, the session goes on
    assert_eq!(session.handle(click(0, 9.0, 9.0)), EventOutcome::Ignored);
    assert_eq!(session.state(), SessionState::InProgress);

    for i in 0..3 {
        assert!(matches!(
            session.handle(click(1, i as f64, 1.0)),
            EventOutcome::Recorded { panel: 1, .. }
        ));
    }
    assert_eq!(session.state(), SessionState::InProgress);

    assert_eq!(session.handle(click_outside(0.0, 0.0)), EventOutcome::Finished);
    assert_eq!(session.points(0).len(), 3);
    assert_eq!(session.points(1).len(), 3);
}

#[test]
fn dual_cancel_clears_both_sides() {
    let mut session = PickSession::new(2, PointLimit::Unlimited);
    session.handle(click(0, 1.0, 1.0));
    session.handle(click(1, 2.0, 2.0));
    session.handle(PickEvent::Key(PickKey::Cancel));
    assert!(session.points(0).is_empty());
    assert!(session.points(1).is_empty());
    assert!(session.restart_requested());
}

#[test]
fn segments_join_successive_points() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    session.handle(click(0, 0.0, 0.0));
    assert_eq!(session.segments(0).count(), 0);
    session.handle(click(0, 1.0, 0.0));
    session.handle(click(0, 1.0, 1.0));
    let segs: Vec<_> = session.segments(0).collect();
    assert_eq!(
        segs,
        vec![[[0.0, 0.0], [1.0, 0.0]], [[1.0, 0.0], [1.0, 1.0]]]
    );
}

#[test]
fn unknown_panel_index_is_ignored() {
    let mut session = PickSession::new(1, PointLimit::Unlimited);
    assert_eq!(session.handle(click(5, 1.0, 1.0)), EventOutcome::Ignored);
}

#[test]
fn integer_limit_uses_minus_one_for_unlimited() {
    assert_eq!(PointLimit::from(-1i64), PointLimit::Unlimited);
    assert_eq!(PointLimit::from(3i64), PointLimit::AtMost(3));
    assert_eq!(PointLimit::from(3i64).cap(), Some(3));
    assert!(!PointLimit::Unlimited.is_reached(usize::MAX));
}
