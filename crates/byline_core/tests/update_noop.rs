use byline_core::{update, AppState, AuthorProfile, Msg};
use chrono::NaiveDate;

#[test]
fn update_is_noop() {
    let profile = AuthorProfile {
        name: "Avery Quinn".to_string(),
        email: "avery.quinn@example.com".to_string(),
        joined: NaiveDate::from_ymd_opt(2025, 8, 17).unwrap(),
        verified: true,
    };
    let state = AppState::new(profile, Vec::new());
    let mut next = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(!next.consume_dirty());
}
