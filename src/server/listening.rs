use super::state::ServerState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};

/// Represents a server after listening has begun
pub struct ListeningServer {
    /// Address of bound server
    pub(super) addr: SocketAddr,

    /// Represents the state of the active server
    pub(super) state: Arc<ServerState>,

    /// Represents the handle for the connection-accepting loop
    pub(super) accept_handle: JoinHandle<()>,
}

impl ListeningServer {
    /// Represents the bound address of the server
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Flags the server's internal state as no longer running; the accept
    /// loop stops after its next connection and in-flight connections
    /// finish naturally
    pub fn shutdown(&self) {
        self.state.shutdown()
    }

    /// Waits for the server to complete
    pub async fn wait(self) -> Result<(), JoinError> {
        self.accept_handle.await
    }
}
