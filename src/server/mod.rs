pub mod action;
pub mod command;
pub mod fs;
mod listening;
pub mod random;
pub mod session;
pub mod state;

pub use listening::ListeningServer;

use crate::msg::{content::Content, Msg};
use crate::transport;
use derive_builder::Builder;
use log::{error, info, trace, warn};
use state::ServerState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::{
    io,
    net::{TcpListener, TcpStream},
    sync::mpsc,
};

/// Represents a server configuration prior to listening
#[derive(Builder, Clone, Debug)]
pub struct Server {
    /// Address to bind to
    addr: SocketAddr,

    /// Name the node advertises once serving
    #[builder(default = "String::from(\"random\")")]
    service_name: String,

    /// Fixed seed for the draw source; seeded from entropy when absent
    #[builder(default)]
    seed: Option<u64>,

    /// Internal buffer for per-connection outbound msgs
    #[builder(default = "1000")]
    buffer: usize,
}

impl Server {
    /// Binds the listener and starts serving connections
    pub async fn listen(self) -> io::Result<ListeningServer> {
        let mut listener = TcpListener::bind(self.addr).await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ServerState::new(self.seed));

        info!("Serving {} on {}", self.service_name, addr);

        let accept_state = Arc::clone(&state);
        let buffer = self.buffer;
        let accept_handle = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, remote)) => {
                        trace!("Accepted connection from {}", remote);
                        tokio::spawn(handle_connection(
                            Arc::clone(&accept_state),
                            stream,
                            buffer,
                        ));
                    }
                    Err(x) => {
                        error!("Failed to accept connection: {}", x);
                        break;
                    }
                }

                if !accept_state.is_running() {
                    break;
                }
            }
        });

        Ok(ListeningServer {
            addr,
            state,
            accept_handle,
        })
    }
}

/// Serves one connection until it closes or its wire breaks; failures here
/// never take down the listener or any other connection
async fn handle_connection(
    state: Arc<ServerState>,
    stream: TcpStream,
    buffer: usize,
) {
    let (mut reader, mut writer) = tokio::io::split(stream);
    let (mut tx, mut rx) = mpsc::channel::<Vec<u8>>(buffer);

    let outbound_handle = tokio::spawn(async move {
        while let Some(data) = rx.recv().await {
            if let Err(x) = transport::write_frame(&mut writer, &data).await
            {
                error!("Failed to write frame: {}", x);
                break;
            }
        }
    });

    loop {
        match transport::read_frame(&mut reader).await {
            Ok(None) => break,
            Ok(Some(data)) => {
                process_frame(&state, data, &mut tx).await;
            }
            Err(x) => {
                error!("Fatal error on wire: {}", x);
                break;
            }
        }
    }

    // Dropping the sender lets the outbound loop drain and finish
    drop(tx);
    if let Err(x) = outbound_handle.await {
        error!("Outbound loop failed: {}", x);
    }
}

/// Decodes one inbound frame, evaluates it, and queues the reply; anything
/// that is not a request msg is logged and discarded
async fn process_frame(
    state: &Arc<ServerState>,
    data: Vec<u8>,
    tx: &mut mpsc::Sender<Vec<u8>>,
) {
    let msg = match Msg::from_slice(&data) {
        Ok(msg) => msg,
        Err(x) => {
            warn!(
                "Discarding data of size {} as not a valid msg: {}",
                data.len(),
                x
            );
            return;
        }
    };

    trace!("Incoming msg: {:?}", msg);
    let header = msg.header;

    let request = match msg.content.to_request() {
        Some(request) => request,
        None => {
            warn!("Discarding msg {} as not a request", header.id);
            return;
        }
    };

    let reply = action::execute(Arc::clone(state), &request).await;
    trace!("Response: {:?}", reply);

    match Msg::from((Content::from(reply), header)).to_vec() {
        Ok(data) => {
            if tx.send(data).await.is_err() {
                error!("Failed to queue reply: outbound loop is gone");
            }
        }
        Err(x) => error!("Failed to encode reply msg: {}", x),
    }
}
