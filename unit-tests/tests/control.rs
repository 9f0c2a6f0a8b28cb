//! Browser command flow: message, state, served page and status report.

use chromaduino_control_page::HomePage;
use chromaduino_plasma::{
    app::usecases::ControlUsecases,
    config::CONTROL,
    controllers::{CommandError, ControlController, status_json},
    domain::entity::{ControlMode, ControlState},
};

fn controller() -> ControlController<ControlUsecases> {
    ControlController::new(ControlUsecases::default(), &CONTROL).unwrap()
}

#[test]
fn initial_page_shows_configured_levels() {
    let controller = controller();
    let expected = HomePage::render(CONTROL.default_sat, CONTROL.default_val, CONTROL.hostname)
        .unwrap();
    assert_eq!(controller.page(), expected.as_bytes());
}

#[test]
fn session_updates_page_and_status() {
    let mut controller = controller();

    controller.handle_text("Connect Fri Oct 16 2026").unwrap();
    controller.handle_text("#28ff").unwrap();
    let state = controller.handle_text("Effect ON").unwrap();

    assert_eq!(
        state,
        ControlState {
            sat: 0x28,
            val: 0xFF,
            mode: ControlMode::Effect,
        }
    );
    let page = std::str::from_utf8(controller.page()).unwrap();
    assert!(page.contains(r#"id="v" type="range" min="24" max="255" step="1" value="255""#));
    assert!(page.contains(r#"id="s" type="range" min="40" max="255" step="1" value="040""#));
    assert_eq!(
        status_json(&state).unwrap().as_str(),
        r#"{"sat":40,"val":255,"mode":"effect"}"#
    );
}

#[test]
fn bad_messages_are_reported_and_ignored() {
    let mut controller = controller();
    let before = controller.state();

    assert_eq!(controller.handle_text("#1234 5"), Err(CommandError::MalformedLevels));
    assert_eq!(controller.handle_text("Reboot"), Err(CommandError::Unknown));
    assert_eq!(controller.state(), before);
}

#[test]
fn packed_levels_survive_a_restart() {
    let mut controller = controller();
    let state = controller.handle_text("#8040").unwrap();

    let restored = ControlState::from_packed(state.packed());
    let controller =
        ControlController::new(ControlUsecases::new(restored), &CONTROL).unwrap();
    assert_eq!(controller.state(), ControlState::new(0x80, 0x40));
}
