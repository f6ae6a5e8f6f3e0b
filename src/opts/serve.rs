use super::{parsers, CommonOpts};
use clap::Clap;
use std::net::SocketAddr;

#[derive(Clap, Debug)]
pub struct ServeCommand {
    /// Address (<host>:<port>) to bind to
    #[clap(name = "address", parse(try_from_str = parsers::parse_socket_addr))]
    pub addr: SocketAddr,

    #[clap(flatten)]
    pub opts: CommonOpts,

    /// Name the node advertises once serving
    #[clap(long, default_value = "random")]
    pub service_name: String,

    /// Fixed seed for the draw source, making served values reproducible
    #[clap(long)]
    pub seed: Option<u64>,

    /// Maximum size of internal msg passing between connection loops
    #[clap(long, default_value = "1000")]
    pub buffer: usize,
}
