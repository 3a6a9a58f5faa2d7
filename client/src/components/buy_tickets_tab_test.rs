use super::*;

#[test]
fn mint_disabled_when_sale_paused_or_unknown() {
    assert!(mint_disabled(&Loadable::Ready(false), true, false));
    assert!(mint_disabled(&Loadable::Loading, true, false));
    assert!(mint_disabled(&Loadable::Unloaded, true, false));
}

#[test]
fn mint_disabled_without_identity() {
    assert!(mint_disabled(&Loadable::Ready(true), false, false));
}

#[test]
fn mint_disabled_while_minting() {
    assert!(mint_disabled(&Loadable::Ready(true), true, true));
}

#[test]
fn mint_enabled_when_all_conditions_hold() {
    assert!(!mint_disabled(&Loadable::Ready(true), true, false));
}

#[test]
fn mint_label_shows_price_or_zero() {
    let price = U256::from(10_000_000_000_000_000u64);
    assert_eq!(mint_label(false, &Loadable::Ready(price)), "🎫 Buy Ticket (0.0100 ETH)");
    assert_eq!(mint_label(false, &Loadable::Loading), "🎫 Buy Ticket (0 ETH)");
    assert_eq!(mint_label(true, &Loadable::Ready(price)), "🎫 Minting...");
}
