use crate::integration::{init_tracing, settle, spawn_hub};
use crate::utils::TestClient;
use charla_core::{CandidateBlob, SessionDescription, SignalMessage};
use serde_json::json;

#[tokio::test]
async fn negotiation_payloads_pass_through_opaquely() {
    init_tracing();
    let addr = spawn_hub().await;

    let mut c1 = TestClient::connect(addr).await.expect("c1 connect");
    let mut c2 = TestClient::connect(addr).await.expect("c2 connect");
    settle().await;

    let offer = SignalMessage::Offer(SessionDescription(json!({
        "type": "offer",
        "sdp": "v=0\r\no=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n"
    })));
    let candidate = SignalMessage::IceCandidate(CandidateBlob(json!({
        "candidate": "candidate:1 1 UDP 2122260223 192.0.2.1 54400 typ host",
        "sdpMid": "0",
        "sdpMLineIndex": 0
    })));

    c1.send(&offer).await.expect("send offer");
    c1.send(&candidate).await.expect("send candidate");

    // payloads arrive byte-for-byte equivalent; the hub never rewrites them
    assert_eq!(c2.recv(2000).await, Some(offer));
    assert_eq!(c2.recv(2000).await, Some(candidate));
}
