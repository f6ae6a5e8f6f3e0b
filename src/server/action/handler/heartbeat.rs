use crate::msg::content::reply::{Reply, VersionArgs};
use log::debug;

pub async fn heartbeat() -> Reply {
    debug!("handler::heartbeat");
    Reply::Heartbeat
}

pub async fn version() -> Reply {
    debug!("handler::version");
    Reply::Version(VersionArgs {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
