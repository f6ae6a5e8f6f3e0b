use crate::msg::content::reply::{
    AttachedArgs, ReleasedArgs, StatReplyArgs, WalkedArgs,
};
use crate::msg::content::request::{
    AttachArgs, ReleaseArgs, StatArgs, WalkArgs,
};
use crate::server::action::OpError;
use crate::server::{fs, state::ServerState};
use log::debug;
use std::sync::Arc;

pub async fn attach(
    state: Arc<ServerState>,
    args: &AttachArgs,
) -> Result<AttachedArgs, OpError> {
    debug!("handler::attach: {:?}", args);

    let id = state.insert_handle(fs::root(), args.uname.clone()).await;

    Ok(AttachedArgs {
        id,
        node_id: fs::NODE_ROOT,
    })
}

pub async fn walk(
    state: Arc<ServerState>,
    args: &WalkArgs,
) -> Result<WalkedArgs, OpError> {
    debug!("handler::walk: {:?}", args);

    let mut handles = state.handles.lock().await;
    let handle = handles
        .get_mut(&args.id)
        .ok_or(OpError::InvalidHandle { id: args.id })?;

    if handle.open {
        return Err(OpError::WrongOperation {
            description: String::from("cannot walk an open handle"),
        });
    }

    match fs::walk_step(handle.node.id, &args.name) {
        Some(node) => {
            handle.node = node;

            Ok(WalkedArgs {
                id: handle.id,
                node_id: node.id,
                kind: node.kind,
            })
        }
        // The handle stays bound to wherever it already was
        None => Err(OpError::NotFound {
            name: args.name.clone(),
        }),
    }
}

pub async fn stat(
    state: Arc<ServerState>,
    args: &StatArgs,
) -> Result<StatReplyArgs, OpError> {
    debug!("handler::stat: {:?}", args);

    let handles = state.handles.lock().await;
    let handle = handles
        .get(&args.id)
        .ok_or(OpError::InvalidHandle { id: args.id })?;

    Ok(StatReplyArgs {
        stat: fs::stat_record(handle.node, &handle.uname),
    })
}

pub async fn release(
    state: Arc<ServerState>,
    args: &ReleaseArgs,
) -> Result<ReleasedArgs, OpError> {
    debug!("handler::release: {:?}", args);

    let mut handles = state.handles.lock().await;

    // The session, if any, is dropped together with the handle entry
    match handles.remove(&args.id) {
        Some(_) => Ok(ReleasedArgs { id: args.id }),
        None => Err(OpError::InvalidHandle { id: args.id }),
    }
}
