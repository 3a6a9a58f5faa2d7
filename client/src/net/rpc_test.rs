use super::*;
use contracts::Address;

#[test]
fn rpc_endpoint_is_host_proxy() {
    assert_eq!(RPC_ENDPOINT, "/api/rpc");
}

#[test]
fn call_request_wraps_read_call() {
    let call = contracts::calls::sale_active(Address::repeat_byte(0x22));
    let request = call_request(9, &call);
    assert_eq!(request.id, serde_json::json!(9));
    assert_eq!(request.method, "eth_call");
    assert!(request.is_read_only());
    assert_eq!(request.call_data(), Some(call.data.clone()));
    assert_eq!(request.params[1], serde_json::json!("latest"));
}

#[test]
fn request_ids_increase() {
    let a = next_request_id();
    let b = next_request_id();
    assert!(b > a);
}

#[test]
fn eth_call_off_browser_is_transport_error() {
    let call = contracts::calls::owner(Address::ZERO);
    let err = futures::executor::block_on(eth_call(&call)).expect_err("no browser");
    assert!(matches!(err, ContractError::Transport(_)));
}
