mod error;

pub use error::AskError;

use crate::msg::{
    content::{
        reply::{
            AttachedArgs, DirContentsArgs, FileContentsArgs, NodeStat,
            OpenedArgs, Reply, ReleasedArgs, VersionArgs, WalkedArgs,
            WrittenArgs,
        },
        request::{
            AttachArgs, OpenArgs, ReadArgs, ReleaseArgs, Request, StatArgs,
            WalkArgs, WriteArgs,
        },
        Content,
    },
    Msg,
};
use crate::transport;
use log::{trace, warn};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time;

/// Default time to wait for a reply before giving up on it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Talks to one server over one connection, one request at a time
pub struct Client {
    stream: TcpStream,

    /// Time to wait for each reply
    pub timeout: Duration,
}

impl Client {
    pub async fn connect(addr: SocketAddr) -> io::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self {
            stream,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sends a request and waits for the matching reply, skipping any
    /// unrelated msgs that arrive in between. An error reply surfaces as
    /// `AskError::Failure`.
    pub async fn ask(&mut self, request: Request) -> Result<Reply, AskError> {
        let msg = Msg::from(request);
        let data = msg.to_vec().map_err(|_| AskError::EncodingFailed)?;

        trace!("Outgoing msg: {:?}", msg);
        transport::write_frame(&mut self.stream, &data).await?;

        let timeout = self.timeout;
        let parent_id = msg.header.id;
        time::timeout(timeout, self.wait_for_reply(parent_id))
            .await
            .map_err(|_| AskError::Timeout)?
    }

    async fn wait_for_reply(
        &mut self,
        parent_id: u32,
    ) -> Result<Reply, AskError> {
        loop {
            let data = match transport::read_frame(&mut self.stream).await? {
                Some(data) => data,
                None => {
                    return Err(AskError::Io(io::Error::from(
                        io::ErrorKind::UnexpectedEof,
                    )))
                }
            };

            let msg = match Msg::from_slice(&data) {
                Ok(msg) => msg,
                Err(x) => {
                    warn!(
                        "Discarding data of size {} as not a valid msg: {}",
                        data.len(),
                        x
                    );
                    continue;
                }
            };

            trace!("Incoming msg: {:?}", msg);
            match (msg.parent_header, msg.content) {
                (Some(parent), Content::Reply(reply))
                    if parent.id == parent_id =>
                {
                    return match reply {
                        Reply::Error(x) => Err(AskError::Failure(x)),
                        reply => Ok(reply),
                    };
                }
                _ => trace!("Skipping msg unrelated to request {}", parent_id),
            }
        }
    }

    pub async fn ask_heartbeat(&mut self) -> Result<(), AskError> {
        match self.ask(Request::Heartbeat).await? {
            Reply::Heartbeat => Ok(()),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_version(&mut self) -> Result<VersionArgs, AskError> {
        match self.ask(Request::Version).await? {
            Reply::Version(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_attach(
        &mut self,
        uname: &str,
    ) -> Result<AttachedArgs, AskError> {
        match self
            .ask(Request::Attach(AttachArgs {
                uname: uname.to_string(),
            }))
            .await?
        {
            Reply::Attached(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_walk(
        &mut self,
        id: u32,
        name: &str,
    ) -> Result<WalkedArgs, AskError> {
        match self
            .ask(Request::Walk(WalkArgs {
                id,
                name: name.to_string(),
            }))
            .await?
        {
            Reply::Walked(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_open(
        &mut self,
        id: u32,
    ) -> Result<OpenedArgs, AskError> {
        match self.ask(Request::Open(OpenArgs { id })).await? {
            Reply::Opened(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_read_file(
        &mut self,
        id: u32,
        count: u32,
    ) -> Result<FileContentsArgs, AskError> {
        match self
            .ask(Request::Read(ReadArgs {
                id,
                offset: 0,
                count,
            }))
            .await?
        {
            Reply::FileContents(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_read_dir(
        &mut self,
        id: u32,
        offset: u64,
    ) -> Result<DirContentsArgs, AskError> {
        match self
            .ask(Request::Read(ReadArgs {
                id,
                offset,
                count: 0,
            }))
            .await?
        {
            Reply::DirContents(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_write(
        &mut self,
        id: u32,
        data: impl Into<Vec<u8>>,
    ) -> Result<WrittenArgs, AskError> {
        match self
            .ask(Request::Write(WriteArgs {
                id,
                data: data.into(),
            }))
            .await?
        {
            Reply::Written(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_stat(&mut self, id: u32) -> Result<NodeStat, AskError> {
        match self.ask(Request::Stat(StatArgs { id })).await? {
            Reply::Stat(args) => Ok(args.stat),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }

    pub async fn ask_release(
        &mut self,
        id: u32,
    ) -> Result<ReleasedArgs, AskError> {
        match self.ask(Request::Release(ReleaseArgs { id })).await? {
            Reply::Released(args) => Ok(args),
            reply => Err(AskError::InvalidResponse { reply }),
        }
    }
}
