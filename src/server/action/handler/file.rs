use crate::msg::content::reply::{
    DirContentsArgs, FileContentsArgs, NodeKind, OpenedArgs, Reply,
    WrittenArgs,
};
use crate::msg::content::request::{OpenArgs, ReadArgs, WriteArgs};
use crate::server::action::OpError;
use crate::server::{
    command::Command, fs, random, session::Range, session::Session,
    state::ServerState,
};
use log::debug;
use std::sync::Arc;

pub async fn open(
    state: Arc<ServerState>,
    args: &OpenArgs,
) -> Result<OpenedArgs, OpError> {
    debug!("handler::open: {:?}", args);

    let mut handles = state.handles.lock().await;
    let handle = handles
        .get_mut(&args.id)
        .ok_or(OpError::InvalidHandle { id: args.id })?;

    if handle.open {
        return Err(OpError::WrongOperation {
            description: String::from("handle is already open"),
        });
    }

    // Files pick up their starting range here; directories carry none
    handle.session = Session::new_for(handle.node.kind);
    handle.open = true;

    Ok(OpenedArgs {
        id: handle.id,
        node_id: handle.node.id,
    })
}

pub async fn read(
    state: Arc<ServerState>,
    args: &ReadArgs,
) -> Result<Reply, OpError> {
    debug!("handler::read: {:?}", args);

    let mut handles = state.handles.lock().await;
    let handle = handles
        .get_mut(&args.id)
        .ok_or(OpError::InvalidHandle { id: args.id })?;

    if !handle.open {
        return Err(OpError::WrongOperation {
            description: String::from("handle is not open for reading"),
        });
    }

    if handle.node.kind == NodeKind::Directory {
        let entries = fs::children()
            .iter()
            .skip(args.offset as usize)
            .map(|node| fs::stat_record(node, &handle.uname))
            .collect();

        return Ok(Reply::DirContents(DirContentsArgs {
            id: handle.id,
            offset: args.offset,
            entries,
        }));
    }

    let range = match &handle.session {
        Some(session) => &session.range,
        None => {
            return Err(OpError::WrongOperation {
                description: String::from("file handle has no open session"),
            })
        }
    };

    // A fresh draw on every read; the stored bounds are never reordered
    let text = {
        let mut rng = state.rng.lock().await;
        match *range {
            Range::Integer { min, max } => {
                format!("{}\n", random::random_integer(&mut *rng, min, max))
            }
            Range::Real { min, max } => {
                format!("{:.6}\n", random::random_real(&mut *rng, min, max))
            }
        }
    };

    let mut data = text.into_bytes();
    data.truncate(args.count as usize);

    Ok(Reply::FileContents(FileContentsArgs {
        id: handle.id,
        data,
    }))
}

pub async fn write(
    state: Arc<ServerState>,
    args: &WriteArgs,
) -> Result<WrittenArgs, OpError> {
    debug!(
        "handler::write: id: {} ; data: {} bytes",
        args.id,
        args.data.len()
    );

    let mut handles = state.handles.lock().await;
    let handle = handles
        .get_mut(&args.id)
        .ok_or(OpError::InvalidHandle { id: args.id })?;

    if !handle.open {
        return Err(OpError::WrongOperation {
            description: String::from("handle is not open for writing"),
        });
    }

    let session = match handle.session.as_mut() {
        Some(session) => session,
        None => {
            return Err(OpError::WrongOperation {
                description: String::from("cannot write to a directory"),
            })
        }
    };

    let command = Command::parse(&args.data)?;
    command.apply_to(&mut session.range)?;

    Ok(WrittenArgs {
        id: handle.id,
        count: args.data.len() as u32,
    })
}
