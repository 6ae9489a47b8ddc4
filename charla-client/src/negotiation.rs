use crate::media::{MediaChannel, MediaError};
use charla_core::{CandidateBlob, SignalMessage};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Call lifecycle as one peer sees it. The offering side walks
/// `Idle → LocalMediaReady → Offering → AwaitingAnswer → Connected`; the
/// peer that receives an offer first takes the `AnsweringOffer` branch
/// instead. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LocalMediaReady,
    Offering,
    AwaitingAnswer,
    AnsweringOffer,
    Connected,
    Closed,
}

/// Inbound events driving the machine. Delivered over one mpsc queue and
/// applied strictly in arrival order; a second event is never processed
/// while a prior one is still being applied.
#[derive(Debug)]
pub enum PeerEvent {
    /// Local media tracks acquired; precondition for everything else.
    MediaReady,
    /// A relayed message from the remote peer.
    Signal(SignalMessage),
    /// Candidate discovered by the local media channel. Emitted to the
    /// remote side immediately, regardless of phase.
    LocalCandidate(CandidateBlob),
    /// The media channel reported permanent failure.
    MediaFailed,
    /// Explicit teardown (page/session end).
    Shutdown,
}

#[derive(Debug, Clone)]
pub struct NegotiatorConfig {
    /// Grace period after local media is ready before this side offers,
    /// giving the remote side time to get there too. Best-effort
    /// heuristic, never renewed.
    pub offer_delay: Duration,
}

impl Default for NegotiatorConfig {
    fn default() -> Self {
        Self {
            offer_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum NegotiationError {
    #[error("media channel error: {0}")]
    Media(#[from] MediaError),

    #[error("media channel reported permanent failure")]
    MediaFailed,
}

/// One peer's negotiation state machine. Owns the candidate queue and the
/// injected media channel handle; talks to the hub through `outbound`.
pub struct Negotiator {
    media: Arc<dyn MediaChannel>,
    outbound: mpsc::UnboundedSender<SignalMessage>,
    phase_tx: watch::Sender<Phase>,
    pending_candidates: VecDeque<CandidateBlob>,
    remote_applied: bool,
    config: NegotiatorConfig,
}

impl Negotiator {
    pub fn new(
        media: Arc<dyn MediaChannel>,
        outbound: mpsc::UnboundedSender<SignalMessage>,
        config: NegotiatorConfig,
    ) -> (Self, watch::Receiver<Phase>) {
        let (phase_tx, phase_rx) = watch::channel(Phase::Idle);

        let negotiator = Self {
            media,
            outbound,
            phase_tx,
            pending_candidates: VecDeque::new(),
            remote_applied: false,
            config,
        };

        (negotiator, phase_rx)
    }

    pub fn phase(&self) -> Phase {
        *self.phase_tx.borrow()
    }

    /// Consume events until teardown or a terminal error. On any exit the
    /// media channel is released and the machine ends in `Closed`; errors
    /// are surfaced to the caller rather than retried.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<PeerEvent>,
    ) -> Result<(), NegotiationError> {
        let result = self.drive(&mut events).await;

        if let Err(e) = &result {
            warn!("Negotiation failed: {}", e);
        }

        let _ = self.media.close().await;
        self.set_phase(Phase::Closed);

        result
    }

    async fn drive(
        &mut self,
        events: &mut mpsc::Receiver<PeerEvent>,
    ) -> Result<(), NegotiationError> {
        let mut offer_at: Option<Instant> = None;

        loop {
            tokio::select! {
                _ = deadline(offer_at) => {
                    offer_at = None;
                    self.begin_offer().await?;
                }

                evt = events.recv() => {
                    // sender dropped: same as explicit teardown
                    let Some(evt) = evt else { break };

                    match evt {
                        PeerEvent::MediaReady => {
                            if self.phase() == Phase::Idle {
                                self.set_phase(Phase::LocalMediaReady);
                                offer_at = Some(Instant::now() + self.config.offer_delay);
                            }
                        }

                        PeerEvent::Signal(msg) => {
                            // once the remote side has offered, this side
                            // answers; the offer timer must never fire
                            if matches!(msg, SignalMessage::Offer(_)) {
                                offer_at = None;
                            }
                            self.handle_signal(msg).await?;
                        }

                        PeerEvent::LocalCandidate(candidate) => {
                            let _ = self.outbound.send(SignalMessage::IceCandidate(candidate));
                        }

                        PeerEvent::MediaFailed => return Err(NegotiationError::MediaFailed),

                        PeerEvent::Shutdown => break,
                    }
                }
            }
        }

        Ok(())
    }

    async fn begin_offer(&mut self) -> Result<(), NegotiationError> {
        if self.phase() != Phase::LocalMediaReady {
            return Ok(());
        }

        info!("Offer delay elapsed, creating local offer");
        self.set_phase(Phase::Offering);

        let offer = self.media.create_offer().await?;
        self.media.set_local_description(offer.clone()).await?;
        let _ = self.outbound.send(SignalMessage::Offer(offer));

        self.set_phase(Phase::AwaitingAnswer);
        Ok(())
    }

    async fn handle_signal(&mut self, msg: SignalMessage) -> Result<(), NegotiationError> {
        match msg {
            SignalMessage::Offer(offer) => {
                if matches!(self.phase(), Phase::Connected | Phase::Closed) {
                    // renegotiation is unsupported; a late offer must not
                    // touch the established descriptions
                    warn!("Ignoring offer received while already connected");
                    return Ok(());
                }

                self.set_phase(Phase::AnsweringOffer);

                self.media.set_remote_description(offer).await?;
                self.remote_applied = true;
                self.flush_pending_candidates().await?;

                let answer = self.media.create_answer().await?;
                self.media.set_local_description(answer.clone()).await?;
                let _ = self.outbound.send(SignalMessage::Answer(answer));

                self.set_phase(Phase::Connected);
            }

            SignalMessage::Answer(answer) => {
                if self.phase() != Phase::AwaitingAnswer {
                    warn!("Ignoring answer received in phase {:?}", self.phase());
                    return Ok(());
                }

                self.media.set_remote_description(answer).await?;
                self.remote_applied = true;
                self.flush_pending_candidates().await?;

                self.set_phase(Phase::Connected);
            }

            SignalMessage::IceCandidate(candidate) => {
                if self.remote_applied {
                    self.media.add_ice_candidate(candidate).await?;
                } else {
                    debug!("Queueing remote candidate until a remote description exists");
                    self.pending_candidates.push_back(candidate);
                }
            }

            // chat and membership frames belong to other layers
            other => debug!("Negotiator ignoring non-negotiation message: {:?}", other),
        }

        Ok(())
    }

    /// Apply queued candidates in receipt order, then clear the queue.
    async fn flush_pending_candidates(&mut self) -> Result<(), NegotiationError> {
        while let Some(candidate) = self.pending_candidates.pop_front() {
            self.media.add_ice_candidate(candidate).await?;
        }
        Ok(())
    }

    fn set_phase(&self, phase: Phase) {
        debug!("Negotiation phase -> {:?}", phase);
        self.phase_tx.send_replace(phase);
    }
}

async fn deadline(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
