use chrono::prelude::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(JsonSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum Reply {
    // ------------------------------------------------------------------------
    // Heartbeats are used to ensure remote instances are alive
    #[serde(rename = "heartbeat_reply")]
    Heartbeat,

    // ------------------------------------------------------------------------
    // Version information to ensure that we don't have
    // conflicting functionality
    #[serde(rename = "version_reply")]
    Version(VersionArgs),

    // ------------------------------------------------------------------------
    // Handle-based operations against the virtual tree
    /// This will be returned upon binding a fresh handle to the root
    #[serde(rename = "attach_reply")]
    Attached(AttachedArgs),

    /// This will be returned upon moving a handle to a new node
    #[serde(rename = "walk_reply")]
    Walked(WalkedArgs),

    /// This will be returned upon readying a handle for reading and writing
    #[serde(rename = "open_reply")]
    Opened(OpenedArgs),

    /// This will be returned upon reading a file, carrying one freshly
    /// generated value as decimal text
    #[serde(rename = "read_file_reply")]
    FileContents(FileContentsArgs),

    /// This will be returned upon reading the root directory
    #[serde(rename = "read_dir_reply")]
    DirContents(DirContentsArgs),

    /// This will be returned upon a file accepting a control command
    #[serde(rename = "write_reply")]
    Written(WrittenArgs),

    /// This will be returned upon fetching the metadata record of a node
    #[serde(rename = "stat_reply")]
    Stat(StatReplyArgs),

    /// This will be returned upon discarding a handle
    #[serde(rename = "release_reply")]
    Released(ReleasedArgs),

    // ------------------------------------------------------------------------
    // Miscellaneous, adhoc messages
    /// This will be returned upon encountering an error during evaluation
    #[serde(rename = "error_reply")]
    Error(ReplyError),
}

impl crate::SchemaInfo for Reply {}

impl From<ReplyError> for Reply {
    fn from(x: ReplyError) -> Self {
        Self::Error(x)
    }
}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct VersionArgs {
    pub version: String,
}

impl crate::SchemaInfo for VersionArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct AttachedArgs {
    pub id: u32,
    pub node_id: u64,
}

impl crate::SchemaInfo for AttachedArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq,
)]
pub struct WalkedArgs {
    pub id: u32,
    pub node_id: u64,
    pub kind: NodeKind,
}

impl crate::SchemaInfo for WalkedArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct OpenedArgs {
    pub id: u32,
    pub node_id: u64,
}

impl crate::SchemaInfo for OpenedArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct FileContentsArgs {
    pub id: u32,
    pub data: Vec<u8>,
}

impl crate::SchemaInfo for FileContentsArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct DirContentsArgs {
    pub id: u32,

    /// Entry index the listing resumed from
    pub offset: u64,

    pub entries: Vec<NodeStat>,
}

impl crate::SchemaInfo for DirContentsArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct WrittenArgs {
    pub id: u32,
    pub count: u32,
}

impl crate::SchemaInfo for WrittenArgs {}

#[derive(JsonSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatReplyArgs {
    pub stat: NodeStat,
}

impl crate::SchemaInfo for StatReplyArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct ReleasedArgs {
    pub id: u32,
}

impl crate::SchemaInfo for ReleasedArgs {}

/// What sort of node a handle is looking at
#[derive(
    JsonSchema, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Directory,
    IntegerFile,
    RealFile,
}

impl crate::SchemaInfo for NodeKind {}

/// Metadata record for one node, as produced by stat calls and directory
/// listings. Lengths are always zero as content is generated on demand
/// rather than stored.
#[derive(JsonSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NodeStat {
    pub name: String,
    pub node_id: u64,
    pub kind: NodeKind,
    pub perm: u32,
    pub length: u64,
    pub owner: String,
    pub group: String,
    pub modified_by: String,
    pub accessed: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl crate::SchemaInfo for NodeStat {}

#[derive(JsonSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ReplyError {
    #[serde(rename = "not_found_error")]
    NotFound(NotFoundArgs),

    #[serde(rename = "bad_command_error")]
    BadCommand(BadCommandArgs),

    #[serde(rename = "wrong_operation_error")]
    WrongOperation(WrongOperationArgs),

    #[serde(rename = "invalid_handle_error")]
    InvalidHandle(InvalidHandleArgs),

    #[serde(rename = "generic_error")]
    Generic(GenericErrorArgs),
}

impl crate::SchemaInfo for ReplyError {}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(args) => write!(f, "{} not found", args.name),
            Self::BadCommand(args) => write!(f, "bad command: {}", args.reason),
            Self::WrongOperation(args) => write!(f, "{}", args.description),
            Self::InvalidHandle(args) => {
                write!(f, "No handle with id {}", args.id)
            }
            Self::Generic(args) => write!(f, "{}", args.msg),
        }
    }
}

impl From<String> for ReplyError {
    fn from(text: String) -> Self {
        Self::Generic(GenericErrorArgs { msg: text })
    }
}

impl From<&str> for ReplyError {
    fn from(text: &str) -> Self {
        Self::from(String::from(text))
    }
}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct NotFoundArgs {
    /// The path component that failed to resolve
    pub name: String,
}

impl crate::SchemaInfo for NotFoundArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct BadCommandArgs {
    pub reason: String,
}

impl crate::SchemaInfo for BadCommandArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct WrongOperationArgs {
    pub description: String,
}

impl crate::SchemaInfo for WrongOperationArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct InvalidHandleArgs {
    pub id: u32,
}

impl crate::SchemaInfo for InvalidHandleArgs {}

#[derive(
    JsonSchema, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq,
)]
pub struct GenericErrorArgs {
    pub msg: String,
}

impl crate::SchemaInfo for GenericErrorArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_error_should_render_its_details() {
        let error = ReplyError::NotFound(NotFoundArgs {
            name: String::from("missing"),
        });
        assert_eq!(error.to_string(), "missing not found");

        let error = ReplyError::InvalidHandle(InvalidHandleArgs { id: 123 });
        assert_eq!(error.to_string(), "No handle with id 123");
    }

    #[test]
    fn reply_error_from_text_should_be_generic() {
        match ReplyError::from("oops") {
            ReplyError::Generic(args) => assert_eq!(args.msg, "oops"),
            x => panic!("Unexpected error: {:?}", x),
        }
    }
}
