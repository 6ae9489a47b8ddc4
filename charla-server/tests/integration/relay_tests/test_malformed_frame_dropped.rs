use crate::integration::{init_tracing, settle, spawn_hub};
use crate::utils::TestClient;
use charla_core::SignalMessage;

#[tokio::test]
async fn malformed_frames_are_dropped_without_side_effects() {
    init_tracing();
    let addr = spawn_hub().await;

    let mut c1 = TestClient::connect(addr).await.expect("c1 connect");
    let mut c2 = TestClient::connect(addr).await.expect("c2 connect");
    settle().await;

    c1.send_raw("not even json").await.expect("send failed");
    c1.send_raw(r#"{"event":"renegotiate","data":{}}"#)
        .await
        .expect("send failed");
    c1.send_raw(r#"{"event":"mensaje","data":{"nested":true}}"#)
        .await
        .expect("send failed");

    assert!(
        c2.expect_silence(500).await,
        "bad frames must never be relayed"
    );

    // the offending connection stays up and can still relay valid frames
    c1.send(&SignalMessage::Chat("todavia aqui".into()))
        .await
        .expect("send after garbage failed");
    assert_eq!(
        c2.recv(2000).await,
        Some(SignalMessage::Chat("todavia aqui".into()))
    );
}
