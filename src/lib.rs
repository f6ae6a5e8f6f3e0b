pub mod client;
pub mod msg;
pub mod opts;
mod run;
pub mod server;
pub mod transport;

pub use client::{AskError, Client};
pub use msg::{
    content::{reply, request, Content, Reply, ReplyError, Request},
    Header, Msg, MsgError,
};
pub use opts::Opts;
pub use run::run;
pub use server::{ListeningServer, Server, ServerBuilder};

/// Types whose wire schema can be rendered for external tooling
pub trait SchemaInfo: schemars::JsonSchema + Sized {
    /// Outputs schema as a pretty JSON string
    fn schema() -> String {
        let schema = schemars::schema_for!(Self);
        serde_json::to_string_pretty(&schema)
            .expect("Failed to serialize schema")
    }
}
