use std::io::{self, SeekFrom};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeekExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::ServerConfig;
use crate::http::mime::MimeTable;
use crate::http::parser::parse_request_line;
use crate::http::path;
use crate::http::request::Request;
use crate::http::response::{ResponseHeader, StatusCode};
use crate::http::writer::ResponseWriter;

/// Bytes read from the client; only the request line inside them matters.
pub const REQUEST_BUFFER_SIZE: usize = 1024;

/// How long a served connection waits for the client to hang up.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Read-only state every connection gets a handle to.
#[derive(Debug, Clone)]
pub struct ServeContext {
    pub config: Arc<ServerConfig>,
    pub mime: Arc<MimeTable>,
}

impl ServeContext {
    pub fn new(config: ServerConfig, mime: MimeTable) -> Self {
        Self {
            config: Arc::new(config),
            mime: Arc::new(mime),
        }
    }
}

/// One accepted client, served exactly once and then closed.
pub struct Connection<S = TcpStream> {
    stream: S,
    peer: SocketAddr,
    ctx: ServeContext,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, File),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, ctx: ServeContext) -> Self {
        Self {
            stream,
            peer,
            ctx,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion.
    ///
    /// Any error means the client got no response, or an incomplete one.
    /// Either way the socket is closed when this returns.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    if let Some(req) = self.read_request().await? {
                        self.state = ConnectionState::Processing(req);
                    }
                }

                ConnectionState::Processing(req) => {
                    let (writer, file) = self.prepare_response(&req).await?;
                    self.state = ConnectionState::Writing(writer, file);
                }

                ConnectionState::Writing(writer, mut file) => {
                    let sent = writer.write_to_stream(&mut file, &mut self.stream).await?;
                    tracing::trace!(peer = %self.peer, bytes = sent, "Body sent");
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        // The peer may already be gone; there is nothing left to report to it.
        let _ = self.stream.shutdown().await;
        self.drain_unread().await;
        Ok(())
    }

    /// Consumes whatever the client sent past the first read, until it hangs up.
    ///
    /// Closing a socket with unread input makes the kernel reset the
    /// connection, which discards response bytes the client has not read yet.
    async fn drain_unread(&mut self) {
        let mut scratch = [0u8; REQUEST_BUFFER_SIZE];
        let drain = async {
            loop {
                match self.stream.read(&mut scratch).await {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {}
                }
            }
        };

        if tokio::time::timeout(DRAIN_TIMEOUT, drain).await.is_err() {
            tracing::debug!(peer = %self.peer, "Client kept the connection open, closing");
        }
    }

    /// Reads once and parses the request line.
    ///
    /// Returns `None` if the client closed the connection without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut buf = [0u8; REQUEST_BUFFER_SIZE];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            tracing::debug!(peer = %self.peer, "Client closed connection before sending a request");
            return Ok(None);
        }

        let request = parse_request_line(&buf[..n])?;
        Ok(Some(request))
    }

    async fn prepare_response(&self, req: &Request) -> anyhow::Result<(ResponseWriter, File)> {
        let config = &self.ctx.config;
        let target = req.target();

        let full_path = path::resolve(&config.document_root, &target)?;
        let content_type = self.ctx.mime.content_type_for(&target);

        let (status, mut file) = match open_regular_file(&full_path).await {
            Ok(file) => (StatusCode::Ok, file),
            Err(e) => {
                tracing::debug!(
                    peer = %self.peer,
                    path = %full_path.display(),
                    error = %e,
                    "Requested file unavailable, falling back"
                );
                let fallback = config.not_found_path();
                let file = open_regular_file(&fallback).await.with_context(|| {
                    format!("no fallback page at {}", fallback.display())
                })?;
                (StatusCode::NotFound, file)
            }
        };

        let length = file
            .seek(SeekFrom::End(0))
            .await
            .context("failed to determine file size")?;
        file.seek(SeekFrom::Start(0))
            .await
            .context("failed to rewind file")?;

        tracing::info!(
            peer = %self.peer,
            method = %req.method,
            path = %req.path,
            status = status.as_u16(),
            content_type,
            length,
            "Serving file"
        );

        let header = ResponseHeader::new(status, req.version.as_str(), content_type, length);
        Ok((ResponseWriter::new(&header), file))
    }
}

/// Opens `path` for reading, refusing anything that is not a regular file.
async fn open_regular_file(path: &Path) -> io::Result<File> {
    let file = File::open(path).await?;
    if !file.metadata().await?.is_file() {
        return Err(io::Error::other("not a regular file"));
    }
    Ok(file)
}
