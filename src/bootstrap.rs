use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::time;

/// Conditions that end the port search. An in-use port is not one of them;
/// the search moves to the next port instead.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: io::Error },
    #[error("timed out binding port {port}")]
    Timeout { port: u16 },
    #[error("no free port within {attempts} attempts starting at {start}")]
    Exhausted { start: u16, attempts: u32 },
}

/// Walks ports upward from a preferred value until one accepts a listener,
/// then reports that port for the caller to bind.
pub struct PortFinder {
    host: IpAddr,
    max_attempts: u32,
    retry_delay: Option<Duration>,
    bind_timeout: Option<Duration>,
}

impl PortFinder {
    pub fn new() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            max_attempts: 100,
            retry_delay: None,
            bind_timeout: None,
        }
    }

    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    pub fn bind_timeout(mut self, limit: Duration) -> Self {
        self.bind_timeout = Some(limit);
        self
    }

    /// The probe binding is released before returning, and the caller
    /// performs the real bind afterwards; another process can win the port
    /// in that window. Only "address in use" moves the search along; any
    /// other bind error is terminal.
    pub async fn find_free_port(&self, preferred: u16) -> Result<u16, ProbeError> {
        let mut port = preferred;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                if let Some(delay) = self.retry_delay {
                    time::sleep(delay).await;
                }
            }

            match self.probe(port).await {
                Ok(()) => return Ok(port),
                Err(ProbeError::Bind { source, .. })
                    if source.kind() == io::ErrorKind::AddrInUse =>
                {
                    match port.checked_add(1) {
                        Some(next) => {
                            tracing::info!("port {} is in use, trying {}...", port, next);
                            port = next;
                        }
                        None => {
                            // Ran off the end of the port space.
                            return Err(ProbeError::Exhausted {
                                start: preferred,
                                attempts: attempt + 1,
                            });
                        }
                    }
                }
                Err(err) => return Err(err),
            }
        }

        Err(ProbeError::Exhausted {
            start: preferred,
            attempts: self.max_attempts,
        })
    }

    async fn probe(&self, port: u16) -> Result<(), ProbeError> {
        let addr = SocketAddr::new(self.host, port);

        let bind = TcpListener::bind(addr);
        let listener = match self.bind_timeout {
            Some(limit) => time::timeout(limit, bind)
                .await
                .map_err(|_| ProbeError::Timeout { port })?,
            None => bind.await,
        }
        .map_err(|source| ProbeError::Bind { port, source })?;

        // The probe only proves the port was bindable; release it for the
        // real listener.
        drop(listener);

        Ok(())
    }
}

impl Default for PortFinder {
    fn default() -> Self {
        Self::new()
    }
}
