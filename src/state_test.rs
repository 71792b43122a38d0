use super::*;

#[test]
fn clones_share_one_catalog() {
    let state = test_helpers::test_app_state();
    let other = state.clone();
    other
        .enrollment
        .store()
        .remove_participant("Chess Club", "daniel@mergington.edu")
        .unwrap();
    let chess = state.enrollment.store().get("Chess Club").unwrap();
    assert_eq!(chess.participants, vec!["michael@mergington.edu"]);
}

#[test]
fn test_state_starts_from_seed() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.enrollment.list_activities(), crate::catalog::default_catalog());
}
