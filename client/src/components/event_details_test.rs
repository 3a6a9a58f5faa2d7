use super::*;

#[test]
fn labels_show_loading_until_ready() {
    let snapshot = EventSnapshot::default();
    assert_eq!(name_label(&snapshot.name), "Loading...");
    assert_eq!(price_label(&Loadable::Loading), "Loading...");
    assert_eq!(availability_label(&snapshot), "Loading...");
    assert_eq!(sale_status_label(&Loadable::Loading), "Loading...");
}

#[test]
fn price_label_formats_ether() {
    let one = U256::from(1_000_000_000_000_000_000u64);
    assert_eq!(price_label(&Loadable::Ready(one)), "1.0000 ETH");
    assert_eq!(price_label(&Loadable::Ready(U256::ZERO)), "0.0000 ETH");
}

#[test]
fn availability_label_subtracts_sold() {
    let snapshot = EventSnapshot {
        current_supply: Loadable::Ready(U256::from(12u8)),
        max_supply: Loadable::Ready(U256::from(100u8)),
        ..EventSnapshot::default()
    };
    assert_eq!(availability_label(&snapshot), "88 / 100");
}

#[test]
fn sale_status_labels() {
    assert_eq!(sale_status_label(&Loadable::Ready(true)), "🟢 Sale Active");
    assert_eq!(sale_status_label(&Loadable::Ready(false)), "🔴 Sale Paused");
}
