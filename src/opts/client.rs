use super::{parsers, CommonOpts};
use clap::Clap;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clap, Debug)]
pub struct ClientCommand {
    /// Address (<host>:<port>) of the server to talk to
    #[clap(name = "address", parse(try_from_str = parsers::parse_socket_addr))]
    pub addr: SocketAddr,

    #[clap(flatten)]
    pub opts: CommonOpts,

    /// Timeout (in seconds) to wait on each reply
    #[clap(
        long,
        parse(try_from_str = parsers::parse_duration),
        default_value = "5"
    )]
    pub timeout: Duration,

    /// Identity presented when attaching
    #[clap(long, default_value = "nobody")]
    pub uname: String,

    #[clap(subcommand)]
    pub operation: ClientOperation,
}

#[derive(Clap, Debug)]
pub enum ClientOperation {
    /// Lists the entries of the root directory
    #[clap(name = "ls")]
    Ls,

    /// Reads one freshly generated value from a file
    #[clap(name = "read")]
    Read(ReadOperation),

    /// Writes a control command to a file
    #[clap(name = "write")]
    Write(WriteOperation),

    /// Prints a file's metadata record
    #[clap(name = "stat")]
    Stat(StatOperation),
}

#[derive(Clap, Debug)]
pub struct ReadOperation {
    /// Name of the file to read (integer or real)
    pub name: String,

    /// Maximum number of bytes to ask for
    #[clap(long, default_value = "128")]
    pub count: u32,
}

#[derive(Clap, Debug)]
pub struct WriteOperation {
    /// Name of the file to send the command to
    pub name: String,

    /// Raw command line, e.g. "range 3 7"
    pub command: String,

    /// Also read one value back afterwards
    #[clap(long)]
    pub then_read: bool,
}

#[derive(Clap, Debug)]
pub struct StatOperation {
    /// Name of the file to describe; use ".." for the root itself
    pub name: String,
}
