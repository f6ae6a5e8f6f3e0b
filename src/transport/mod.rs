use derive_more::Display;
use std::error::Error;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest frame accepted off the wire; anything bigger is a protocol
/// violation rather than a legitimate msg
pub const MAX_FRAME_SIZE: u32 = 1024 * 1024;

#[derive(Debug, Display)]
pub enum WireError {
    #[display(fmt = "IO error on wire: {}", "_0")]
    Io(io::Error),

    #[display(fmt = "Frame of {} bytes exceeds limit of {}", size, limit)]
    FrameTooLarge { size: u32, limit: u32 },
}

impl Error for WireError {}

impl From<io::Error> for WireError {
    fn from(x: io::Error) -> Self {
        Self::Io(x)
    }
}

/// Reads one length-prefixed frame, yielding `None` when the connection
/// closed cleanly before a new frame began
pub async fn read_frame<R>(
    reader: &mut R,
) -> Result<Option<Vec<u8>>, WireError>
where
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => (),
        Err(x) if x.kind() == io::ErrorKind::UnexpectedEof => {
            return Ok(None)
        }
        Err(x) => return Err(WireError::Io(x)),
    }

    let size = u32::from_be_bytes(len_buf);
    if size > MAX_FRAME_SIZE {
        return Err(WireError::FrameTooLarge {
            size,
            limit: MAX_FRAME_SIZE,
        });
    }

    let mut data = vec![0u8; size as usize];
    reader.read_exact(&mut data).await?;
    Ok(Some(data))
}

/// Writes one frame as a big-endian u32 length followed by the data
pub async fn write_frame<W>(
    writer: &mut W,
    data: &[u8],
) -> Result<(), WireError>
where
    W: AsyncWrite + Unpin,
{
    if data.len() > MAX_FRAME_SIZE as usize {
        return Err(WireError::FrameTooLarge {
            size: data.len() as u32,
            limit: MAX_FRAME_SIZE,
        });
    }

    writer.write_all(&(data.len() as u32).to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::{TcpListener, TcpStream};

    async fn stream_pair() -> (TcpStream, TcpStream) {
        let mut listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Missing local addr");

        let connect = TcpStream::connect(addr);
        let accept = listener.accept();
        let (connected, accepted) = tokio::join!(connect, accept);

        (
            connected.expect("Failed to connect"),
            accepted.expect("Failed to accept").0,
        )
    }

    #[tokio::test]
    async fn frames_should_round_trip() {
        let (mut writer, mut reader) = stream_pair().await;

        write_frame(&mut writer, b"hello")
            .await
            .expect("Failed to write frame");
        write_frame(&mut writer, b"")
            .await
            .expect("Failed to write frame");

        assert_eq!(
            read_frame(&mut reader).await.expect("Failed to read frame"),
            Some(b"hello".to_vec())
        );
        assert_eq!(
            read_frame(&mut reader).await.expect("Failed to read frame"),
            Some(Vec::new())
        );
    }

    #[tokio::test]
    async fn read_frame_should_yield_none_on_clean_close() {
        let (writer, mut reader) = stream_pair().await;
        drop(writer);

        assert_eq!(
            read_frame(&mut reader).await.expect("Failed to read frame"),
            None
        );
    }

    #[tokio::test]
    async fn read_frame_should_reject_oversized_lengths() {
        let (mut writer, mut reader) = stream_pair().await;

        writer
            .write_all(&(MAX_FRAME_SIZE + 1).to_be_bytes())
            .await
            .expect("Failed to write length");
        writer.flush().await.expect("Failed to flush");

        match read_frame(&mut reader).await {
            Err(WireError::FrameTooLarge { size, .. }) => {
                assert_eq!(size, MAX_FRAME_SIZE + 1)
            }
            x => panic!("Unexpected result: {:?}", x),
        }
    }

    #[tokio::test]
    async fn write_frame_should_reject_oversized_payloads() {
        let (mut writer, _reader) = stream_pair().await;
        let data = vec![0u8; (MAX_FRAME_SIZE + 1) as usize];

        match write_frame(&mut writer, &data).await {
            Err(WireError::FrameTooLarge { .. }) => (),
            x => panic!("Unexpected result: {:?}", x),
        }
    }
}
