use clap::Clap;
use log::LevelFilter;
use tokio::runtime::Runtime;

fn main() {
    let opts = randfs::Opts::parse();
    init_logger(&opts);

    let mut rt = Runtime::new().expect("Failed to start runtime");
    rt.block_on(randfs::run(opts)).unwrap();
}

fn init_logger(opts: &randfs::Opts) {
    let mut builder = env_logger::Builder::from_default_env();
    if opts.command.debug_protocol() {
        builder.filter_module("randfs", LevelFilter::Trace);
    }
    builder.init();
}
