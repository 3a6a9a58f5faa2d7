use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use contracts::Address;

const TIMEOUTS: RpcTimeouts = RpcTimeouts { request_secs: 5, connect_secs: 2 };

/// Serve `router` on an ephemeral local port and return its URL.
async fn spawn_node(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Node that echoes the request id and returns a fixed `eth_call` result.
fn echo_node(hits: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/",
        post(move |Json(body): Json<Value>| {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(serde_json::json!({ "jsonrpc": "2.0", "id": body["id"], "result": "0x01" }))
            }
        }),
    )
}

fn sale_active_request(id: u64) -> RpcRequest {
    let call = contracts::calls::sale_active(Address::repeat_byte(0x22));
    RpcRequest::new(id, "eth_call", contracts::rpc::call_params(call.to, &call.data))
}

#[tokio::test]
async fn forwards_read_methods() {
    let hits = Arc::new(AtomicUsize::new(0));
    let url = spawn_node(echo_node(hits.clone())).await;
    let proxy = RpcProxy::new(url, TIMEOUTS).unwrap();

    let response = proxy.handle(&sale_active_request(7)).await.unwrap();
    assert_eq!(response.id, serde_json::json!(7));
    assert_eq!(response.result, Some(serde_json::json!("0x01")));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejects_write_methods_without_contacting_node() {
    let hits = Arc::new(AtomicUsize::new(0));
    let url = spawn_node(echo_node(hits.clone())).await;
    let proxy = RpcProxy::new(url, TIMEOUTS).unwrap();

    let request = RpcRequest::new(3, "eth_sendRawTransaction", serde_json::json!(["0xdead"]));
    let response = proxy.handle(&request).await.unwrap();
    let error = response.error.expect("error object");
    assert_eq!(error.code, CODE_METHOD_NOT_FOUND);
    assert_eq!(response.id, serde_json::json!(3));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_error_status_is_proxy_error() {
    let router = Router::new().route("/", post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }));
    let url = spawn_node(router).await;
    let proxy = RpcProxy::new(url, TIMEOUTS).unwrap();

    let err = proxy.handle(&sale_active_request(1)).await.unwrap_err();
    match err {
        ProxyError::UpstreamStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "busy");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_reply_is_parse_error() {
    let router = Router::new().route("/", post(|| async { "not json" }));
    let url = spawn_node(router).await;
    let proxy = RpcProxy::new(url, TIMEOUTS).unwrap();

    let err = proxy.handle(&sale_active_request(1)).await.unwrap_err();
    assert!(matches!(err, ProxyError::Parse(_)));
}

#[tokio::test]
async fn unreachable_node_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let proxy = RpcProxy::new(format!("http://{addr}"), TIMEOUTS).unwrap();

    let err = proxy.handle(&sale_active_request(1)).await.unwrap_err();
    assert!(matches!(err, ProxyError::Request(_)));
}

#[test]
fn rejection_names_method() {
    let request = RpcRequest::new(5, "eth_sign", Value::Null);
    let response = rejection(&request);
    let error = response.error.expect("error");
    assert!(error.message.contains("eth_sign"));
    assert!(response.result.is_none());
}
