//! Live channel lifecycle.
//!
//! One channel per dashboard run: `connect` performs the handshake and
//! `run` pumps inbound frames until the server or the network ends the
//! stream. The pump is receive-only; this client never sends a frame.

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use podium_core::DashboardPage;
use podium_core::constants::{STATUS_CHANNEL_ERROR, STATUS_CONNECTED, STATUS_DISCONNECTED};

use crate::config::LiveConfig;
use crate::dispatch::dispatch_frame;
use crate::errors::LiveError;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Lifecycle states of the live channel.
///
/// `Closed` is terminal; there is no reconnection. A transport error is an
/// orthogonal event surfaced through the status region, not a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelState {
    /// Handshake in flight. A handle only exists once the handshake has
    /// resolved, so this state is observable in logs, not on a handle.
    Connecting,
    /// Established; frames are being dispatched.
    Open,
    /// Ended by the server or the network. Terminal.
    Closed,
}

/// A single live channel instance.
pub struct LiveChannel {
    ws: WsStream,
    state: ChannelState,
}

impl LiveChannel {
    /// Open the channel addressed by `config`.
    ///
    /// Exactly one handshake per call; on success the channel is `Open`.
    pub async fn connect(config: &LiveConfig) -> Result<Self, LiveError> {
        let url = config.channel_url()?;
        tracing::debug!(%url, state = ?ChannelState::Connecting, "opening live channel");

        let (ws, _) = connect_async(&url).await?;
        tracing::info!(state = ?ChannelState::Open, "live channel established");

        Ok(Self {
            ws,
            state: ChannelState::Open,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Pump inbound frames until the channel closes.
    ///
    /// Frames are dispatched in arrival order. A transport error updates
    /// the status region but does not end the pump by itself; the `Closed`
    /// transition comes from a close frame or the stream ending.
    pub async fn run(&mut self, page: &mut impl DashboardPage) {
        page.set_status(STATUS_CONNECTED);

        while let Some(frame) = self.ws.next().await {
            match frame {
                Ok(Message::Text(text)) => dispatch_frame(text.as_str(), page),
                Ok(Message::Close(close)) => {
                    tracing::info!(?close, "live channel closed by peer");
                    break;
                }
                // Ping/pong are handled by the transport; binary frames
                // have no meaning on this channel.
                Ok(other) => {
                    tracing::trace!(kind = %frame_kind(&other), "ignoring non-text frame");
                }
                Err(e) => {
                    tracing::warn!("live channel error: {e}");
                    page.set_status(STATUS_CHANNEL_ERROR);
                }
            }
        }

        self.state = ChannelState::Closed;
        page.set_status(STATUS_DISCONNECTED);
    }
}

fn frame_kind(message: &Message) -> &'static str {
    match message {
        Message::Text(_) => "text",
        Message::Binary(_) => "binary",
        Message::Ping(_) => "ping",
        Message::Pong(_) => "pong",
        Message::Close(_) => "close",
        Message::Frame(_) => "frame",
    }
}
