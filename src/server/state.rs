use crate::server::fs::Node;
use crate::server::session::Session;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// One caller-visible reference into the tree. Tracks which node the
/// reference is bound to and, once opened, the file's session state.
#[derive(Debug)]
pub struct Handle {
    /// Represents a unique id with which to look up the handle
    pub id: u32,

    /// The node the handle is currently bound to
    pub node: &'static Node,

    /// Identity presented at attach time; echoed into metadata records
    pub uname: String,

    /// Whether the handle has been readied for reading and writing
    pub open: bool,

    /// Range state for open file handles; directories never carry one
    pub session: Option<Session>,
}

#[derive(Debug)]
pub struct ServerState {
    /// Mapping of handle id -> live handle
    pub handles: Mutex<HashMap<u32, Handle>>,

    /// Shared draw source for every generator invocation
    pub rng: Mutex<StdRng>,

    running: AtomicBool,
}

impl ServerState {
    /// Produces new state whose draw source starts from `seed`, or from
    /// entropy when no seed is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            handles: Mutex::new(HashMap::new()),
            rng: Mutex::new(rng),
            running: AtomicBool::new(true),
        }
    }

    /// Binds a fresh handle to `node`, picking an id no live handle is
    /// using, and returns that id
    pub async fn insert_handle(
        &self,
        node: &'static Node,
        uname: String,
    ) -> u32 {
        let mut handles = self.handles.lock().await;

        let mut id = rand::random::<u32>();
        while handles.contains_key(&id) {
            id = rand::random::<u32>();
        }

        handles.insert(
            id,
            Handle {
                id,
                node,
                uname,
                open: false,
                session: None,
            },
        );

        id
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Flags the state as shutting down; loops watching the flag finish
    /// their current work and stop
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::SeqCst)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(None)
    }
}
