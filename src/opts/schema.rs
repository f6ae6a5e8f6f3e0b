use clap::Clap;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

#[derive(Clap, Debug)]
pub struct SchemaCommand {
    #[clap(subcommand)]
    pub command: SchemaSubcommand,
}

#[derive(Clap, Debug)]
pub enum SchemaSubcommand {
    /// Lists all possible items to print schema
    #[clap(name = "list")]
    List,

    /// Prints information about schema for specific item
    #[clap(name = "info")]
    Info(SchemaInfoOpts),
}

#[derive(Clap, Debug)]
pub struct SchemaInfoOpts {
    /// The type of msg whose schema to print
    #[clap(
        name = "type",
        parse(try_from_str),
        possible_values = &SchemaType::VARIANTS,
    )]
    pub schema_type: SchemaType,
}

#[derive(Clap, Debug, EnumString, EnumVariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum SchemaType {
    Content,
    Request,
    Reply,
    HeartbeatRequest,
    VersionRequest,
    AttachRequest,
    WalkRequest,
    OpenRequest,
    ReadRequest,
    WriteRequest,
    StatRequest,
    ReleaseRequest,
    VersionReply,
    AttachReply,
    WalkReply,
    OpenReply,
    ReadFileReply,
    ReadDirReply,
    WriteReply,
    StatReply,
    ReleaseReply,
    ErrorReply,
}
