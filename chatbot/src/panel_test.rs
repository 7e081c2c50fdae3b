use super::*;

fn settle_epoch(effects: &[PanelEffect]) -> Option<u64> {
    effects.iter().find_map(|effect| match effect {
        PanelEffect::Settle { epoch, .. } => Some(*epoch),
        _ => None,
    })
}

// =============================================================
// open / close
// =============================================================

#[test]
fn starts_closed_and_hidden() {
    let panel = PanelMachine::default();
    assert_eq!(panel.state(), PanelState::Closed);
    assert!(!panel.view().visible);
    assert_eq!(panel.view().classes(), vec!["chat-popup"]);
}

#[test]
fn open_focuses_and_schedules_settle() {
    let mut panel = PanelMachine::default();
    let effects = panel.open();

    assert_eq!(panel.state(), PanelState::OpenMinimized);
    assert!(panel.view().visible);
    assert!(panel.view().slid_in);
    assert!(effects.contains(&PanelEffect::FocusInput { after_ms: 500 }));
    assert_eq!(panel.transition(), Some(PanelTransition::Opening));

    let epoch = settle_epoch(&effects).unwrap();
    assert!(panel.settle(epoch));
    assert_eq!(panel.transition(), None);
    assert_eq!(panel.state(), PanelState::OpenMinimized);
}

#[test]
fn open_twice_is_noop() {
    let mut panel = PanelMachine::default();
    panel.open();
    assert!(panel.open().is_empty());
}

#[test]
fn open_then_close_hides_after_delay() {
    let mut panel = PanelMachine::default();
    let initial = panel.view();
    panel.open();

    let effects = panel.close();
    assert_eq!(effects, vec![PanelEffect::Settle { epoch: 2, after_ms: 500 }]);

    // Still open while the slide-out runs.
    assert_eq!(panel.state(), PanelState::OpenMinimized);
    assert!(panel.view().visible);
    assert!(!panel.view().slid_in);

    assert!(panel.settle(2));
    assert_eq!(panel.state(), PanelState::Closed);
    assert_eq!(panel.view(), initial);
}

#[test]
fn close_from_closed_is_noop() {
    let mut panel = PanelMachine::default();
    assert!(panel.close().is_empty());
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn close_from_maximized_closes() {
    let mut panel = PanelMachine::default();
    panel.open();
    panel.maximize();
    let epoch = settle_epoch(&panel.close()).unwrap();
    panel.settle(epoch);
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn reopen_during_close_ignores_stale_timer() {
    let mut panel = PanelMachine::default();
    panel.open();
    let close_epoch = settle_epoch(&panel.close()).unwrap();

    let reopen = panel.open();
    assert!(!reopen.is_empty());
    assert!(!panel.settle(close_epoch));
    assert_eq!(panel.state(), PanelState::OpenMinimized);
    assert!(panel.view().slid_in);
}

// =============================================================
// maximize / minimize
// =============================================================

#[test]
fn maximize_then_minimize_restores_view() {
    let mut panel = PanelMachine::default();
    panel.open();
    let before = panel.view();

    let effects = panel.maximize();
    assert_eq!(effects, vec![PanelEffect::ScrollToBottom { after_ms: 400 }]);
    assert_eq!(panel.state(), PanelState::OpenMaximized);
    assert_eq!(panel.view().width, PanelWidth::FullViewport);
    assert!(panel.view().classes().contains(&"chat-popup--maximized"));

    panel.minimize();
    assert_eq!(panel.state(), PanelState::OpenMinimized);
    assert_eq!(panel.view(), before);
    assert_eq!(panel.view().classes(), before.classes());
}

#[test]
fn maximize_requires_open_panel() {
    let mut panel = PanelMachine::default();
    assert!(panel.maximize().is_empty());
    assert!(panel.minimize().is_empty());
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn resize_ignored_while_closing() {
    let mut panel = PanelMachine::default();
    panel.open();
    panel.close();
    assert!(panel.maximize().is_empty());
    assert_eq!(panel.state(), PanelState::OpenMinimized);
}

#[test]
fn width_uses_configured_pixels() {
    let config = WidgetConfig { panel_width_px: 380, ..WidgetConfig::default() };
    let mut panel = PanelMachine::new(&config);
    panel.open();
    assert_eq!(panel.view().width.css(), "380px");
    panel.maximize();
    assert_eq!(panel.view().width.css(), MAXIMIZED_WIDTH_CSS);
}
