use super::*;

#[test]
fn option_label_shortens_six_and_four() {
    let addr: Address = "0x1234567890123456789012345678901234567890".parse().expect("address");
    assert_eq!(option_label(&addr), "0x1234...7890");
}

#[test]
fn placeholder_is_selected_only_without_selection() {
    let addr = Address::repeat_byte(0xab);
    assert!(is_selected(None, None));
    assert!(!is_selected(Some(addr), None));
}

#[test]
fn option_matches_current_selection_after_remount() {
    let chosen = Address::repeat_byte(0xab);
    let other = Address::repeat_byte(0xcd);
    let mut ui = UiState::default();
    ui.select_contract(&chosen.to_string());
    ui.select_tab(crate::state::ui::Tab::Tickets);

    assert!(is_selected(ui.selected, Some(&chosen)));
    assert!(!is_selected(ui.selected, Some(&other)));
}
