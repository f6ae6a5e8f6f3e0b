pub mod client;
mod parsers;
pub mod schema;
pub mod serve;

use clap::Clap;

#[derive(Clap, Debug)]
pub enum Command {
    /// Launches the file server
    #[clap(name = "serve")]
    Serve(serve::ServeCommand),

    /// Talks to a running file server
    #[clap(name = "client")]
    Client(client::ClientCommand),

    /// Prints information about msg schemas
    #[clap(name = "schema")]
    Schema(schema::SchemaCommand),
}

impl Command {
    pub fn debug_protocol(&self) -> bool {
        match self {
            Self::Serve(c) => c.opts.debug_protocol,
            Self::Client(c) => c.opts.debug_protocol,
            Self::Schema(_) => false,
        }
    }
}

#[derive(Clap, Debug)]
#[clap(author, about, version)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Clap, Debug)]
pub struct CommonOpts {
    /// Log every msg crossing the wire
    #[clap(short = "D", long)]
    pub debug_protocol: bool,
}
