use super::*;
use alloy_sol_types::SolValue;

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

fn fields(reads: &[PlannedRead]) -> Vec<ReadField> {
    reads.iter().map(|r| r.field).collect()
}

/// Reads of both loops for the given inputs.
fn planned(factory: Option<Address>, selection: Option<Address>, identity: Option<Address>) -> Vec<PlannedRead> {
    let mut reads = ListKey { factory, identity, refresh: 0 }.plan();
    reads.extend(EventKey { factory, selection, identity, refresh: 0 }.plan());
    reads
}

// =============================================================
// Planning
// =============================================================

#[test]
fn nothing_is_planned_without_inputs() {
    assert!(planned(None, None, None).is_empty());
}

#[test]
fn factory_alone_plans_all_contracts() {
    assert_eq!(fields(&planned(Some(addr(1)), None, None)), vec![ReadField::AllContracts]);
}

#[test]
fn identity_enables_user_contracts() {
    let reads = planned(Some(addr(1)), None, Some(addr(9)));
    assert_eq!(fields(&reads), vec![ReadField::AllContracts, ReadField::UserContracts]);
    assert_eq!(reads[1].call, calls::contracts_by_owner(addr(1), addr(9)));
}

#[test]
fn selection_plans_snapshot_reads() {
    let reads = planned(Some(addr(1)), Some(addr(2)), None);
    assert_eq!(
        fields(&reads),
        vec![
            ReadField::AllContracts,
            ReadField::Name,
            ReadField::Price,
            ReadField::CurrentSupply,
            ReadField::MaxSupply,
            ReadField::SaleActive,
            ReadField::Owner,
            ReadField::Balance,
        ]
    );
    let price = reads.iter().find(|r| r.field == ReadField::Price).expect("price");
    assert_eq!(price.call.to, addr(2));
}

#[test]
fn user_tickets_need_selection_and_identity() {
    let key = EventKey { factory: Some(addr(1)), selection: Some(addr(2)), identity: None, refresh: 0 };
    assert!(!fields(&key.plan()).contains(&ReadField::UserTickets));

    let key = EventKey { identity: Some(addr(3)), ..key };
    let reads = key.plan();
    let tickets = reads.iter().find(|r| r.field == ReadField::UserTickets).expect("tickets");
    assert_eq!(tickets.call, calls::tokens_by_owner(addr(2), addr(3)));
}

#[test]
fn event_key_same_target_ignores_refresh() {
    let a = EventKey { factory: Some(addr(1)), selection: Some(addr(2)), identity: None, refresh: 0 };
    let b = EventKey { refresh: 4, ..a };
    assert!(a.same_target(&b));
    assert!(!a.same_target(&EventKey { selection: Some(addr(5)), ..a }));
}

#[test]
fn ticket_info_reads_follow_ids() {
    let ids = [U256::from(1u8), U256::from(4u8)];
    let reads = ticket_info_reads(addr(2), &ids);
    assert_eq!(reads.len(), 2);
    assert_eq!(reads[1].0, U256::from(4u8));
    assert_eq!(reads[1].1, calls::ticket_info(addr(2), U256::from(4u8)));
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_field_maps_price() {
    let output = (U256::from(10_000_000_000_000_000u64),).abi_encode_params();
    let update = decode_field(ReadField::Price, &output).expect("decode");
    assert_eq!(update, ReadUpdate::Price(U256::from(10_000_000_000_000_000u64)));
}

#[test]
fn decode_field_maps_owner() {
    let output = (addr(7),).abi_encode_params();
    assert_eq!(decode_field(ReadField::Owner, &output).expect("decode"), ReadUpdate::Owner(addr(7)));
}

#[test]
fn decode_field_rejects_empty_reply() {
    let err = decode_field(ReadField::Price, &[]).expect_err("empty");
    assert!(matches!(err, ContractError::Decode { .. }));
}

#[test]
fn decode_ticket_info_reads_all_members() {
    let output = (true, U256::from(1_700_000_000u64), addr(1), addr(2)).abi_encode_params();
    let info = decode_ticket_info(&output).expect("decode");
    assert!(info.used);
    assert_eq!(info.purchase_time, U256::from(1_700_000_000u64));
    assert_eq!(info.original_owner, addr(1));
    assert_eq!(info.current_owner, addr(2));
}

// =============================================================
// Applying
// =============================================================

#[test]
fn begin_list_marks_planned_fields_loading() {
    let mut state = EventsState::default();
    let key = ListKey { factory: Some(addr(1)), identity: None, refresh: 0 };
    begin_list(&mut state, &key, None);
    assert_eq!(state.all_contracts, Loadable::Loading);
    assert_eq!(state.user_contracts, Loadable::Unloaded);
}

#[test]
fn refresh_keeps_ready_lists_visible() {
    let mut state = EventsState { all_contracts: Loadable::Ready(vec![addr(2)]), ..EventsState::default() };
    let prev = ListKey { factory: Some(addr(1)), identity: None, refresh: 0 };
    let next = ListKey { refresh: 1, ..prev };
    begin_list(&mut state, &next, Some(&prev));
    assert_eq!(state.all_contracts, Loadable::Ready(vec![addr(2)]));
}

#[test]
fn new_selection_resets_snapshot() {
    let mut state = EventsState::default();
    state.selected.price = Loadable::Ready(U256::from(5u8));
    state.selected.ticket_info.insert(
        U256::from(1u8),
        TicketInfo { used: false, purchase_time: U256::ZERO, original_owner: addr(1), current_owner: addr(1) },
    );
    let prev = EventKey { factory: Some(addr(1)), selection: Some(addr(2)), identity: Some(addr(3)), refresh: 0 };
    let next = EventKey { selection: Some(addr(4)), ..prev };
    begin_event(&mut state, &next, Some(&prev));
    assert_eq!(state.selected.price, Loadable::Loading);
    assert!(state.selected.ticket_info.is_empty());
    assert_eq!(state.selected.user_tickets, Loadable::Loading);
}

#[test]
fn cleared_selection_unloads_snapshot() {
    let mut state = EventsState::default();
    state.selected.owner = Loadable::Ready(addr(9));
    let key = EventKey { factory: Some(addr(1)), selection: None, identity: Some(addr(3)), refresh: 0 };
    begin_event(&mut state, &key, None);
    assert_eq!(state.selected, EventSnapshot::default());
}

#[test]
fn apply_user_tickets_prunes_stale_info() {
    let mut state = EventsState::default();
    let info = TicketInfo { used: false, purchase_time: U256::ZERO, original_owner: addr(1), current_owner: addr(1) };
    apply(&mut state, ReadUpdate::Ticket(U256::from(1u8), info.clone()));
    apply(&mut state, ReadUpdate::Ticket(U256::from(2u8), info));
    apply(&mut state, ReadUpdate::UserTickets(vec![U256::from(2u8)]));
    assert_eq!(state.selected.ticket_info.len(), 1);
    assert!(state.selected.ticket_info.contains_key(&U256::from(2u8)));
    assert_eq!(state.selected.user_tickets, Loadable::Ready(vec![U256::from(2u8)]));
}

#[test]
fn late_result_for_old_selection_is_discarded() {
    let mut state = EventsState::default();
    let issued = EventKey { factory: Some(addr(1)), selection: Some(addr(2)), identity: None, refresh: 0 };
    let current = EventKey { selection: Some(addr(3)), ..issued };
    begin_event(&mut state, &current, Some(&issued));

    let applied = apply_if_current(&mut state, &issued, &current, ReadUpdate::Price(U256::from(1u8)));
    assert!(!applied);
    assert_eq!(state.selected.price, Loadable::Loading);

    let applied = apply_if_current(&mut state, &current, &current, ReadUpdate::Price(U256::from(2u8)));
    assert!(applied);
    assert_eq!(state.selected.price, Loadable::Ready(U256::from(2u8)));
}

#[test]
fn zero_supply_still_reports_availability() {
    let mut state = EventsState::default();
    apply(&mut state, ReadUpdate::CurrentSupply(U256::ZERO));
    apply(&mut state, ReadUpdate::MaxSupply(U256::from(100u8)));
    assert_eq!(state.selected.availability(), Some((U256::from(100u8), U256::from(100u8))));
}
