use super::*;
use crate::config::Config;

fn state(chain_id: Option<u64>) -> AppState {
    let config = Config::from_lookup(|key| match key {
        "RPC_URL" => Some("http://node.test".to_owned()),
        "FACTORY_ADDRESS" => Some("0x1234567890123456789012345678901234567890".to_owned()),
        "CHAIN_ID" => chain_id.map(|id| id.to_string()),
        _ => None,
    })
    .unwrap();
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn publishes_factory_and_chain() {
    let Json(body) = client_config(State(state(Some(534_351)))).await;
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "factory_address": "0x1234567890123456789012345678901234567890",
            "chain_id": 534_351
        })
    );
}

#[tokio::test]
async fn chain_id_is_null_when_unset() {
    let Json(body) = client_config(State(state(None))).await;
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["chain_id"], serde_json::Value::Null);
}
