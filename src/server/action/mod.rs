pub mod handler;

use crate::msg::content::reply::{
    BadCommandArgs, InvalidHandleArgs, NotFoundArgs, Reply, ReplyError,
    WrongOperationArgs,
};
use crate::msg::content::request::Request;
use crate::server::command::CommandError;
use crate::server::state::ServerState;
use derive_more::Display;
use log::trace;
use std::error::Error;
use std::sync::Arc;

/// Failure of one dispatched operation. Resolved into a structured error
/// reply at the dispatcher boundary; never fatal to the server, and never
/// visible to any other handle.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum OpError {
    /// Walk target does not exist
    #[display(fmt = "{} not found", name)]
    NotFound { name: String },

    /// Unrecognized verb or malformed arguments in a write payload
    #[display(fmt = "bad command: {}", "_0")]
    BadCommand(CommandError),

    /// Operation not valid for the handle's node or current status
    #[display(fmt = "{}", description)]
    WrongOperation { description: String },

    /// Handle was never issued or has already been released
    #[display(fmt = "No handle with id {}", id)]
    InvalidHandle { id: u32 },
}

impl Error for OpError {}

impl From<CommandError> for OpError {
    fn from(x: CommandError) -> Self {
        Self::BadCommand(x)
    }
}

impl From<OpError> for ReplyError {
    fn from(x: OpError) -> Self {
        match x {
            OpError::NotFound { name } => {
                Self::NotFound(NotFoundArgs { name })
            }
            OpError::BadCommand(x) => Self::BadCommand(BadCommandArgs {
                reason: x.to_string(),
            }),
            OpError::WrongOperation { description } => {
                Self::WrongOperation(WrongOperationArgs { description })
            }
            OpError::InvalidHandle { id } => {
                Self::InvalidHandle(InvalidHandleArgs { id })
            }
        }
    }
}

impl From<OpError> for Reply {
    fn from(x: OpError) -> Self {
        Self::Error(ReplyError::from(x))
    }
}

/// Evaluates one request against the server state, producing the reply to
/// send back to the caller
pub async fn execute(state: Arc<ServerState>, request: &Request) -> Reply {
    trace!("Executing request: {:?}", request);

    match request {
        Request::Heartbeat => handler::heartbeat::heartbeat().await,
        Request::Version => handler::heartbeat::version().await,
        Request::Attach(args) => {
            match handler::fs::attach(state, args).await {
                Ok(x) => Reply::Attached(x),
                Err(x) => Reply::from(x),
            }
        }
        Request::Walk(args) => match handler::fs::walk(state, args).await {
            Ok(x) => Reply::Walked(x),
            Err(x) => Reply::from(x),
        },
        Request::Open(args) => match handler::file::open(state, args).await {
            Ok(x) => Reply::Opened(x),
            Err(x) => Reply::from(x),
        },
        Request::Read(args) => match handler::file::read(state, args).await {
            Ok(x) => x,
            Err(x) => Reply::from(x),
        },
        Request::Write(args) => {
            match handler::file::write(state, args).await {
                Ok(x) => Reply::Written(x),
                Err(x) => Reply::from(x),
            }
        }
        Request::Stat(args) => match handler::fs::stat(state, args).await {
            Ok(x) => Reply::Stat(x),
            Err(x) => Reply::from(x),
        },
        Request::Release(args) => {
            match handler::fs::release(state, args).await {
                Ok(x) => Reply::Released(x),
                Err(x) => Reply::from(x),
            }
        }
    }
}
