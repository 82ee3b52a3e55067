//! Session driver over in-memory input.

use fenrir_common::medical_tree;
use fenrir_common::triage::{NavigationMode, TraversalState};
use fenrirctl::output::Palette;
use fenrirctl::session;
use std::io::Cursor;

fn drive(script: &str, mode: NavigationMode) -> (TraversalState, String) {
    let mut out = Vec::new();
    let state = session::run(
        medical_tree(),
        mode,
        Palette::plain(),
        Cursor::new(script.to_string()),
        &mut out,
    )
    .unwrap();
    (state, String::from_utf8(out).unwrap())
}

#[test]
fn walk_to_chest_seal() {
    let (state, screen) = drive("2\n4\n3\n", NavigationMode::Lenient);
    assert_eq!(state.current, "CHEST_SEAL");
    assert_eq!(state.history, vec!["ROOT", "BLEEDING_CHECK", "PACKING_CHECK"]);
    assert!(screen.contains("[CRITICAL] SELLO TORÁCICO"));
}

#[test]
fn back_then_other_branch() {
    let (state, _) = drive("4\n3\nb\n4\n", NavigationMode::Lenient);
    assert_eq!(state.current, "BURN_STUCK");
    assert_eq!(state.history, vec!["ROOT", "BURN_CHECK"]);
}

#[test]
fn back_at_root_stays_at_root() {
    let (state, _) = drive("b\nb\n", NavigationMode::Lenient);
    assert!(state.is_at_root());
}

#[test]
fn reset_returns_to_root() {
    let (state, _) = drive("7\n3\n2\nr\n", NavigationMode::Lenient);
    assert_eq!(state, TraversalState::new());
}

#[test]
fn quit_stops_reading() {
    let (state, _) = drive("3\nq\n2\n", NavigationMode::Lenient);
    assert_eq!(state.current, "AIRWAY_CHECK");
}

#[test]
fn bad_input_reports_error_and_continues() {
    let (state, screen) = drive("99\nfoo\n8\n", NavigationMode::Lenient);
    assert!(screen.contains("[ERROR] Invalid choice '99' at node ROOT"));
    assert!(screen.contains("[ERROR] Node not found: FOO"));
    assert_eq!(state.current, "TOXIN_CHECK");
}

#[test]
fn lenient_jump_by_id() {
    let (state, _) = drive("heatstroke_act\n", NavigationMode::Lenient);
    assert_eq!(state.current, "HEATSTROKE_ACT");
    assert_eq!(state.history, vec!["ROOT"]);
}

#[test]
fn strict_jump_only_to_offered_ids() {
    let (state, screen) = drive("HEATSTROKE_ACT\nENV_CHECK\nHEATSTROKE\n", NavigationMode::Strict);
    assert!(screen.contains("Invalid choice 'HEATSTROKE_ACT' at node ROOT"));
    assert_eq!(state.current, "HEATSTROKE");
}
