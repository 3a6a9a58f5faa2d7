use super::*;

#[test]
fn loadable_default_is_unloaded() {
    let value: Loadable<u8> = Loadable::default();
    assert_eq!(value, Loadable::Unloaded);
    assert!(value.ready().is_none());
}

#[test]
fn loadable_ready_exposes_value() {
    let value = Loadable::Ready(5u8);
    assert_eq!(value.ready(), Some(&5));
    assert!(Loadable::<u8>::Loading.ready().is_none());
}

#[test]
fn availability_requires_both_supplies() {
    let mut snapshot = EventSnapshot { current_supply: Loadable::Ready(U256::from(3u8)), ..EventSnapshot::default() };
    assert!(snapshot.availability().is_none());
    snapshot.max_supply = Loadable::Ready(U256::from(100u8));
    assert_eq!(snapshot.availability(), Some((U256::from(97u8), U256::from(100u8))));
}

#[test]
fn availability_never_underflows() {
    let snapshot = EventSnapshot {
        current_supply: Loadable::Ready(U256::from(10u8)),
        max_supply: Loadable::Ready(U256::from(5u8)),
        ..EventSnapshot::default()
    };
    assert_eq!(snapshot.availability(), Some((U256::ZERO, U256::from(5u8))));
}

#[test]
fn bump_refresh_increments() {
    let mut state = EventsState::default();
    state.bump_refresh();
    state.bump_refresh();
    assert_eq!(state.refresh_seq, 2);
}
