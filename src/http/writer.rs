use std::io::SeekFrom;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseHeader;

/// Largest piece of a file read and written in one go.
pub const CHUNK_SIZE: usize = 1023;

/// Writes `buf` to `stream`, failing if the peer stops accepting bytes.
async fn write_fully<W>(stream: &mut W, buf: &[u8]) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while written < buf.len() {
        let n = stream.write(&buf[written..]).await?;

        if n == 0 {
            return Err(anyhow::anyhow!("connection closed while writing"));
        }

        written += n;
    }

    Ok(())
}

/// Copies `file` to `stream` from the start, one chunk at a time, until EOF.
///
/// Returns the number of body bytes written.
pub async fn stream_file<R, W>(file: &mut R, stream: &mut W) -> anyhow::Result<u64>
where
    R: AsyncRead + AsyncSeek + Unpin,
    W: AsyncWrite + Unpin,
{
    file.seek(SeekFrom::Start(0)).await?;

    let mut chunk = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            break;
        }

        write_fully(stream, &chunk[..n]).await?;
        total += n as u64;
    }

    Ok(total)
}

/// Sends one header block followed by one file body.
pub struct ResponseWriter {
    header: Vec<u8>,
}

impl ResponseWriter {
    pub fn new(header: &ResponseHeader) -> Self {
        Self {
            header: header.to_bytes(),
        }
    }

    pub async fn write_to_stream<R, W>(&self, body: &mut R, stream: &mut W) -> anyhow::Result<u64>
    where
        R: AsyncRead + AsyncSeek + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_fully(stream, &self.header).await?;
        let sent = stream_file(body, stream).await?;
        stream.flush().await?;

        Ok(sent)
    }
}
