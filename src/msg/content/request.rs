use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(JsonSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum Request {
    // ------------------------------------------------------------------------
    // Heartbeats are used to ensure remote instances are alive
    #[serde(rename = "heartbeat_request")]
    Heartbeat,

    // ------------------------------------------------------------------------
    // Version information to ensure that we don't have
    // conflicting functionality
    #[serde(rename = "version_request")]
    Version,

    // ------------------------------------------------------------------------
    // Handle-based operations against the virtual tree
    /// This will be sent to bind a fresh handle to the root of the tree
    #[serde(rename = "attach_request")]
    Attach(AttachArgs),

    /// This will be sent to move a handle one path component through
    /// the tree
    #[serde(rename = "walk_request")]
    Walk(WalkArgs),

    /// This will be sent to ready a handle for reading and writing
    #[serde(rename = "open_request")]
    Open(OpenArgs),

    /// This will be sent to fetch generated content from a file, or the
    /// entry listing when the handle is bound to the root
    #[serde(rename = "read_request")]
    Read(ReadArgs),

    /// This will be sent to deliver a control command to a file
    #[serde(rename = "write_request")]
    Write(WriteArgs),

    /// This will be sent to fetch the metadata record of whatever node
    /// the handle is bound to
    #[serde(rename = "stat_request")]
    Stat(StatArgs),

    /// This will be sent to discard a handle and any state attached to it
    #[serde(rename = "release_request")]
    Release(ReleaseArgs),
}

impl crate::SchemaInfo for Request {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct AttachArgs {
    /// Identity presented by the caller; passed through into metadata
    /// records untouched
    pub uname: String,
}

impl crate::SchemaInfo for AttachArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct WalkArgs {
    pub id: u32,
    pub name: String,
}

impl crate::SchemaInfo for WalkArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct OpenArgs {
    pub id: u32,
}

impl crate::SchemaInfo for OpenArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct ReadArgs {
    pub id: u32,

    /// Entry index to restart a directory listing from; ignored for files,
    /// whose content is generated fresh on every read
    pub offset: u64,

    /// Maximum number of content bytes to return
    pub count: u32,
}

impl crate::SchemaInfo for ReadArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct WriteArgs {
    pub id: u32,
    pub data: Vec<u8>,
}

impl crate::SchemaInfo for WriteArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct StatArgs {
    pub id: u32,
}

impl crate::SchemaInfo for StatArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct ReleaseArgs {
    pub id: u32,
}

impl crate::SchemaInfo for ReleaseArgs {}
