use super::*;

#[test]
fn connect_label_reflects_provider_and_progress() {
    let mut state = WalletState::default();
    assert_eq!(connect_label(&state), "No Wallet Found");
    state.provider_available = true;
    assert_eq!(connect_label(&state), "Connect Wallet");
    state.connecting = true;
    assert_eq!(connect_label(&state), "Connecting...");
}

#[test]
fn identity_label_is_shortened() {
    let addr: Address = "0x1234567890123456789012345678901234567890".parse().expect("address");
    assert_eq!(identity_label(&addr), "0x1234...7890");
}
