use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use any_spawner::Executor;
use futures::channel::oneshot;
use futures::executor::block_on;

impl BusyFlags for RefCell<TxState> {
    fn set_busy(&self, op: TxOp, busy: bool) {
        self.borrow_mut().set_busy(op, busy);
    }
}

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

fn validation(result: Result<TransactionRequest, SubmitError>) -> &'static str {
    match result {
        Err(SubmitError::Validation(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =============================================================
// submit / BusyGuard
// =============================================================

#[test]
fn submit_holds_flag_while_pending() {
    let flags = RefCell::new(TxState::default());
    let result = block_on(submit(&flags, TxOp::Mint, async {
        assert!(flags.borrow().minting);
        Ok::<_, ContractError>("0xhash".to_owned())
    }));
    assert_eq!(result.expect("ok"), "0xhash");
    assert!(!flags.borrow().minting);
}

#[test]
fn missing_wallet_surfaces_as_remote_error() {
    let flags = RefCell::new(TxState::default());
    let request = calls::toggle_sale(addr(1), addr(2));
    let result = block_on(submit(&flags, TxOp::ToggleSale, super::super::wallet::send_transaction(request)));
    assert!(matches!(result, Err(SubmitError::Remote(ContractError::WalletUnavailable))));
    assert_eq!(*flags.borrow(), TxState::default());
}

#[test]
fn guard_only_touches_its_own_flag() {
    let flags = RefCell::new(TxState { withdrawing: true, ..TxState::default() });
    {
        let _guard = BusyGuard::new(&flags, TxOp::UpdatePrice);
        assert!(flags.borrow().updating_price);
    }
    assert!(!flags.borrow().updating_price);
    assert!(flags.borrow().withdrawing);
}

// =============================================================
// Presence checks
// =============================================================

#[test]
fn deploy_requires_identity_and_names() {
    let forms = FormState::default();
    assert_eq!(validation(deploy_request(None, Some(addr(1)), &forms)), "wallet not connected");
    assert_eq!(validation(deploy_request(Some(addr(9)), None, &forms)), "factory address not loaded");

    let blank = FormState { symbol: "  ".to_owned(), ..FormState::default() };
    assert_eq!(validation(deploy_request(Some(addr(9)), Some(addr(1)), &blank)), "symbol is required");

    let request = deploy_request(Some(addr(9)), Some(addr(1)), &forms).expect("valid");
    assert_eq!(request.from, addr(9));
    assert_eq!(request.to, addr(1));
    assert_eq!(request.value, None);
    assert_eq!(describe(&request), "deployContract");
}

#[test]
fn mint_requires_loaded_price_but_accepts_zero() {
    let uri = "https://ipfs.io/ipfs/QmYourHash";
    assert_eq!(
        validation(mint_request(Some(addr(9)), Some(addr(2)), uri, &Loadable::Loading)),
        "ticket price not loaded"
    );
    assert_eq!(validation(mint_request(Some(addr(9)), None, uri, &Loadable::Ready(U256::ZERO))), "no event selected");
    assert_eq!(
        validation(mint_request(Some(addr(9)), Some(addr(2)), "", &Loadable::Ready(U256::ZERO))),
        "metadata URI is required"
    );

    let request = mint_request(Some(addr(9)), Some(addr(2)), uri, &Loadable::Ready(U256::ZERO)).expect("valid");
    assert_eq!(request.value, Some(U256::ZERO));
    assert_eq!(describe(&request), "mintTicket");
}

#[test]
fn mint_attaches_current_price() {
    let price = U256::from(10_000_000_000_000_000u64);
    let request = mint_request(Some(addr(9)), Some(addr(2)), "ipfs://x", &Loadable::Ready(price)).expect("valid");
    assert_eq!(request.value, Some(price));
    assert_eq!(request.to, addr(2));
}

#[test]
fn price_update_parses_display_units() {
    let request = price_request(Some(addr(9)), Some(addr(2)), "0.01").expect("valid");
    assert_eq!(describe(&request), "setTicketPrice");
    assert_eq!(validation(price_request(Some(addr(9)), Some(addr(2)), "abc")), "price is not a valid amount");
    assert_eq!(validation(price_request(Some(addr(9)), Some(addr(2)), "")), "price is not a valid amount");
}

#[test]
fn toggle_and_withdraw_need_identity_and_selection() {
    assert_eq!(validation(toggle_request(None, Some(addr(2)))), "wallet not connected");
    assert_eq!(validation(withdraw_request(Some(addr(9)), None)), "no event selected");
    assert_eq!(describe(&toggle_request(Some(addr(9)), Some(addr(2))).expect("valid")), "toggleSale");
    assert_eq!(describe(&withdraw_request(Some(addr(9)), Some(addr(2))).expect("valid")), "withdrawFunds");
}

#[test]
fn use_ticket_requires_whole_number() {
    assert_eq!(validation(use_ticket_request(Some(addr(9)), Some(addr(2)), "")), "ticket id is required");
    assert_eq!(
        validation(use_ticket_request(Some(addr(9)), Some(addr(2)), "-1")),
        "ticket id must be a whole number"
    );
    assert_eq!(
        validation(use_ticket_request(Some(addr(9)), Some(addr(2)), "0x10")),
        "ticket id must be a whole number"
    );
    let request = use_ticket_request(Some(addr(9)), Some(addr(2)), " 7 ").expect("valid");
    assert_eq!(describe(&request), "useTicket");
    assert_eq!(request.data[request.data.len() - 1], 7);
}

#[test]
fn describe_unknown_calldata() {
    let request = TransactionRequest { from: addr(1), to: addr(2), data: contracts::Bytes::new(), value: None };
    assert_eq!(describe(&request), "unknown");
}

// =============================================================
// dispatch
// =============================================================

fn reactive_setup() -> (Owner, RwSignal<TxState>, RwSignal<EventsState>) {
    let _ = Executor::init_futures_executor();
    let owner = Owner::new();
    owner.set();
    (owner, RwSignal::new(TxState::default()), RwSignal::new(EventsState::default()))
}

fn hash_reply() -> impl Future<Output = Result<String, ContractError>> + 'static {
    async { Ok::<_, ContractError>("0xhash".to_owned()) }
}

#[test]
fn dispatch_skips_sending_when_validation_fails() {
    let (_owner, tx, events) = reactive_setup();
    let sent = Rc::new(Cell::new(false));
    let flag = Rc::clone(&sent);

    let request = deploy_request(None, Some(addr(1)), &FormState::default());
    dispatch_with(TxOp::Deploy, request, tx, events, move |_| {
        flag.set(true);
        hash_reply()
    });
    Executor::poll_local();

    assert!(!sent.get());
    assert_eq!(tx.get_untracked(), TxState::default());
    assert_eq!(events.get_untracked().refresh_seq, 0);
}

#[test]
fn dispatch_refuses_second_submit_while_in_flight() {
    let (_owner, tx, events) = reactive_setup();
    let (finish, reply) = oneshot::channel::<()>();

    let request = toggle_request(Some(addr(9)), Some(addr(2)));
    dispatch_with(TxOp::ToggleSale, request, tx, events, move |_| async move {
        let _ = reply.await;
        Ok::<_, ContractError>("0xfirst".to_owned())
    });
    Executor::poll_local();
    assert!(tx.get_untracked().toggling_sale);

    let second = Rc::new(Cell::new(false));
    let flag = Rc::clone(&second);
    dispatch_with(TxOp::ToggleSale, toggle_request(Some(addr(9)), Some(addr(2))), tx, events, move |_| {
        flag.set(true);
        hash_reply()
    });
    Executor::poll_local();
    assert!(!second.get());

    finish.send(()).expect("first submission still pending");
    Executor::poll_local();
    assert!(!tx.get_untracked().toggling_sale);
    assert_eq!(events.get_untracked().refresh_seq, 1);
}

#[test]
fn dispatch_success_bumps_refresh() {
    let (_owner, tx, events) = reactive_setup();
    let request = withdraw_request(Some(addr(9)), Some(addr(2)));
    dispatch_with(TxOp::Withdraw, request, tx, events, |_| hash_reply());
    Executor::poll_local();

    assert_eq!(events.get_untracked().refresh_seq, 1);
    assert!(!tx.get_untracked().withdrawing);
}

#[test]
fn dispatch_failure_clears_flag_without_refresh() {
    let (_owner, tx, events) = reactive_setup();
    let request = deploy_request(Some(addr(9)), Some(addr(1)), &FormState::default());
    dispatch_with(TxOp::Deploy, request, tx, events, |_| async {
        Err::<String, _>(ContractError::Rpc { code: 4001, message: "User rejected the request.".to_owned() })
    });
    Executor::poll_local();

    assert!(!tx.get_untracked().deploying);
    assert_eq!(events.get_untracked().refresh_seq, 0);
}
