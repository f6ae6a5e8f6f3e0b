use crate::msg::content::reply::{Reply, ReplyError};
use crate::transport::WireError;
use derive_more::Display;
use std::error::Error;
use std::io;

#[derive(Debug, Display)]
pub enum AskError {
    /// The server answered with a structured error reply
    #[display(fmt = "Failed: {}", "_0")]
    Failure(ReplyError),

    /// The server answered, but not with the kind of reply the request
    /// called for
    #[display(fmt = "Invalid response: {:?}", reply)]
    InvalidResponse { reply: Reply },

    Timeout,

    EncodingFailed,

    #[display(fmt = "{}", "_0")]
    Wire(WireError),

    #[display(fmt = "IO error: {}", "_0")]
    Io(io::Error),
}

impl Error for AskError {}

impl From<WireError> for AskError {
    fn from(x: WireError) -> Self {
        Self::Wire(x)
    }
}

impl From<io::Error> for AskError {
    fn from(x: io::Error) -> Self {
        Self::Io(x)
    }
}
