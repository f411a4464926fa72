use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::http::connection::{Connection, ServeContext};
use crate::server::shutdown::ShutdownSignal;

/// Pending connections the kernel queues before `accept`.
pub const BACKLOG: u32 = 5;

/// Pause after a failed accept, so descriptor exhaustion does not spin.
pub const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// The accept loop. Owns the listening socket for its whole life.
pub struct Listener {
    listener: TcpListener,
    ctx: ServeContext,
}

impl Listener {
    /// Binds the configured port on every IPv4 interface.
    pub fn bind(ctx: ServeContext) -> anyhow::Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], ctx.config.listen_port));

        let socket = TcpSocket::new_v4().context("failed to create listening socket")?;
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {}", addr))?;
        let listener = socket
            .listen(BACKLOG)
            .with_context(|| format!("failed to listen on {}", addr))?;

        Ok(Self { listener, ctx })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts until `shutdown` fires.
    ///
    /// Every connection is moved into its own task and forgotten; the loop
    /// never waits for one to finish. Tasks still running when the loop ends
    /// are left alone.
    pub async fn run(self, mut shutdown: ShutdownSignal) -> anyhow::Result<()> {
        let Listener { listener, ctx } = self;
        info!("Listening on {}", listener.local_addr()?);

        loop {
            tokio::select! {
                biased;

                () = shutdown.cancelled() => {
                    info!("Stopped accepting connections");
                    break;
                }

                res = listener.accept() => {
                    let (socket, peer) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            tracing::error!(error = %e, "Accept failed");
                            tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                            continue;
                        }
                    };
                    info!("Accepted connection from {}", peer);

                    let ctx = ctx.clone();
                    tokio::spawn(async move {
                        let conn = Connection::new(socket, peer, ctx);
                        if let Err(e) = conn.run().await {
                            tracing::warn!("Connection from {} dropped: {:#}", peer, e);
                        }
                    });
                }
            }
        }

        Ok(())
    }
}
