//! SSH connector backed by libssh2.
//!
//! Password authentication only. The server host key is NOT verified; callers
//! announce that through an `InsecureHostKey` event before dialing.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use ssh2::{ExtendedData, Session};

use crate::domain::entities::SshCredentials;
use crate::domain::ports::{RemoteConnector, RemoteShell};
use crate::error::{RowpushError, RowpushResult};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Dials one SSH connection per `connect` call.
pub struct Ssh2Connector {
    creds: SshCredentials,
}

impl Ssh2Connector {
    pub fn new(creds: SshCredentials) -> Self {
        Self { creds }
    }

    fn dial(&self) -> RowpushResult<TcpStream> {
        let addr = self.creds.addr();
        let candidates: Vec<SocketAddr> = addr
            .to_socket_addrs()
            .map_err(|err| RowpushError::SshConnect {
                addr: addr.clone(),
                message: err.to_string(),
            })?
            .collect();

        connect_any(&candidates, CONNECT_TIMEOUT).map_err(|err| RowpushError::SshConnect {
            addr,
            message: err.to_string(),
        })
    }
}

/// Try each resolved address in turn; the last failure is reported.
fn connect_any(candidates: &[SocketAddr], timeout: Duration) -> io::Result<TcpStream> {
    let mut last_err = None;
    for candidate in candidates {
        match TcpStream::connect_timeout(candidate, timeout) {
            Ok(stream) => return Ok(stream),
            Err(err) => {
                tracing::debug!(%candidate, error = %err, "ssh dial failed, trying next address");
                last_err = Some(err);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "host did not resolve")
    }))
}

impl RemoteConnector for Ssh2Connector {
    type Shell = Ssh2Shell;

    fn connect(&self) -> RowpushResult<Ssh2Shell> {
        let addr = self.creds.addr();
        let tcp = self.dial()?;

        let mut session = Session::new().map_err(|err| RowpushError::SshConnect {
            addr: addr.clone(),
            message: err.to_string(),
        })?;
        session.set_tcp_stream(tcp);
        session.handshake().map_err(|err| RowpushError::SshConnect {
            addr: addr.clone(),
            message: err.to_string(),
        })?;

        session
            .userauth_password(&self.creds.user, &self.creds.password)
            .map_err(|err| RowpushError::SshAuth {
                user: self.creds.user.clone(),
                addr: addr.clone(),
                message: err.to_string(),
            })?;
        if !session.authenticated() {
            return Err(RowpushError::SshAuth {
                user: self.creds.user.clone(),
                addr,
                message: "server rejected the password".to_string(),
            });
        }

        tracing::info!(remote = %addr, user = %self.creds.user, "ssh session established");
        Ok(Ssh2Shell { session })
    }

    fn describe(&self) -> String {
        format!("{}@{}", self.creds.user, self.creds.addr())
    }
}

/// An authenticated SSH connection. Each `run` opens its own channel.
pub struct Ssh2Shell {
    session: Session,
}

impl RemoteShell for Ssh2Shell {
    fn run(&self, command_line: &str) -> RowpushResult<i32> {
        let mut channel = self.session.channel_session().map_err(channel_err)?;
        // One stream for both outputs, so a chatty stderr cannot stall the
        // remote while stdout is still being drained.
        channel
            .handle_extended_data(ExtendedData::Merge)
            .map_err(channel_err)?;
        channel.exec(command_line).map_err(channel_err)?;

        let output = drain(&mut channel).map_err(channel_err)?;

        channel.wait_close().map_err(channel_err)?;
        let status = channel.exit_status().map_err(channel_err)?;

        // Forward the whole buffer so concurrent targets do not interleave mid-line.
        io::stdout().lock().write_all(&output)?;

        Ok(status)
    }

    fn disconnect(&self) -> RowpushResult<()> {
        self.session
            .disconnect(None, "rowpush done", None)
            .map_err(channel_err)
    }
}

/// Read `reader` to EOF.
fn drain(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut output = Vec::new();
    reader.read_to_end(&mut output)?;
    Ok(output)
}

fn channel_err(err: impl std::fmt::Display) -> RowpushError {
    RowpushError::SshChannel {
        message: err.to_string(),
    }
}
