use crate::app::AppState;
use crate::session::{LOBBY, SessionCommand};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use charla_core::{ConnId, SignalMessage, codec};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let conn_id = ConnId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, conn_id, state))
}

async fn handle_socket(socket: WebSocket, conn_id: ConnId, state: AppState) {
    info!("New connection accepted: {}", conn_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<SignalMessage>();

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match codec::encode(&msg) {
                Ok(frame) => {
                    if sender.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => error!("Failed to encode outbound frame: {}", e),
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let sessions = state.sessions.clone();
        let conn_id = conn_id.clone();

        async move {
            let mut session_tx = sessions.get_session_sender(LOBBY);
            let joined = session_tx
                .send(SessionCommand::Join {
                    conn_id: conn_id.clone(),
                    sender: tx.clone(),
                })
                .await;
            if joined.is_err() {
                error!("Lobby session died before {} could join", conn_id);
                return;
            }

            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match codec::decode(&text) {
                        Ok(SignalMessage::Join { room }) => {
                            info!("Connection {} moving to session '{}'", conn_id, room);

                            let _ = session_tx
                                .send(SessionCommand::Leave {
                                    conn_id: conn_id.clone(),
                                })
                                .await;

                            session_tx = sessions.get_session_sender(&room);
                            let _ = session_tx
                                .send(SessionCommand::Join {
                                    conn_id: conn_id.clone(),
                                    sender: tx.clone(),
                                })
                                .await;
                        }
                        Ok(message) => {
                            let cmd = SessionCommand::Relay {
                                from: conn_id.clone(),
                                message,
                            };
                            if let Err(e) = session_tx.send(cmd).await {
                                error!("Session died: {}", e);
                                break;
                            }
                        }
                        // One bad frame never affects the connection or
                        // anyone else: drop it and keep reading.
                        Err(e) => warn!("Dropping malformed frame from {}: {}", conn_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }

            let _ = session_tx
                .send(SessionCommand::Leave {
                    conn_id: conn_id.clone(),
                })
                .await;
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    info!("Connection closed: {}", conn_id);
}
