pub mod content;

use chrono::prelude::{DateTime, Utc};
use content::{Content, Reply, Request};
use derive_more::Display;
use rand::random;
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Display)]
pub enum MsgError {
    #[display(fmt = "Failed to encode msg: {}", "_0")]
    EncodeMsg(serde_cbor::Error),

    #[display(fmt = "Failed to decode msg: {}", "_0")]
    DecodeMsg(serde_cbor::Error),
}

impl Error for MsgError {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// ID associated with a request or reply
    pub id: u32,

    /// The time at which the message was created
    pub creation_date: DateTime<Utc>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            id: random(),
            creation_date: Utc::now(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Msg {
    /// Information associated with this message
    pub header: Header,

    /// Information associated with the parent of this message
    /// to provide origin context
    pub parent_header: Option<Header>,

    /// Content within the message
    pub content: Content,
}

impl Msg {
    pub fn new(content: Content, parent_header: Option<Header>) -> Self {
        Self {
            header: Header::default(),
            parent_header,
            content,
        }
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, MsgError> {
        serde_cbor::to_vec(&self).map_err(MsgError::EncodeMsg)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, MsgError> {
        serde_cbor::from_slice(slice).map_err(MsgError::DecodeMsg)
    }
}

/// Produce a new message from the content with no parent
impl From<Content> for Msg {
    fn from(content: Content) -> Self {
        Self::new(content, None)
    }
}

/// Produce a new message from the content with the given parent header
impl From<(Content, Header)> for Msg {
    fn from((content, parent_header): (Content, Header)) -> Self {
        Self::new(content, Some(parent_header))
    }
}

impl From<Request> for Msg {
    fn from(request: Request) -> Self {
        Self::from(Content::from(request))
    }
}

impl From<Reply> for Msg {
    fn from(reply: Reply) -> Self {
        Self::from(Content::from(reply))
    }
}
