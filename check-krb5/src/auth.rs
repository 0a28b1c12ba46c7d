//! Credential acquisition via the system Kerberos tooling.
//!
//! The probe does not speak the Kerberos wire protocol itself. The
//! [`Authenticator`] trait is the seam: the shipped implementation drives
//! the system `kinit` binary synchronously, once per trial, against a
//! private scratch credential cache so the user's own cache is never
//! touched. The cache lives for the whole probe run and is removed when
//! the authenticator is dropped.

use crate::config::CredentialSource;
use crate::errors::AuthError;
use crate::principal::Principal;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;
use tracing::debug;

/// A credential obtained by one successful acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub client: String,
    pub service: String,
}

/// One synchronous credential-acquisition attempt.
///
/// Any error is fatal to the benchmark run: the executor does not retry
/// and does not continue with later trials.
pub trait Authenticator {
    fn acquire(&self, client: &Principal, service: &Principal) -> Result<Credential, AuthError>;
}

/// Authenticator backed by the system `kinit` binary.
pub struct KinitAuthenticator {
    credentials: CredentialSource,
    // Scratch ccache; the NamedTempFile guard deletes it on drop.
    cache: NamedTempFile,
}

impl KinitAuthenticator {
    /// Prepare a scratch credential cache for the run.
    pub fn new(credentials: CredentialSource) -> std::io::Result<Self> {
        let cache = tempfile::Builder::new()
            .prefix("check-krb5-")
            .suffix(".ccache")
            .tempfile()?;
        debug!(cache = %cache.path().display(), "prepared scratch credential cache");
        Ok(Self { credentials, cache })
    }
}

impl Authenticator for KinitAuthenticator {
    fn acquire(&self, client: &Principal, service: &Principal) -> Result<Credential, AuthError> {
        let client_name = client.to_string();
        let service_name = service.to_string();

        let mut command = Command::new("kinit");
        command
            .arg("-c")
            .arg(self.cache.path())
            .arg("-S")
            .arg(&service_name);
        match &self.credentials {
            CredentialSource::Keytab(path) => {
                command.arg("-k").arg("-t").arg(path);
            }
            CredentialSource::Password(_) => {
                command.stdin(Stdio::piped());
            }
        }
        command
            .arg(&client_name)
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|source| AuthError::Spawn {
            command: "kinit".to_string(),
            source,
        })?;

        if let CredentialSource::Password(password) = &self.credentials
            && let Some(mut stdin) = child.stdin.take()
        {
            writeln!(stdin, "{}", password).map_err(|source| AuthError::Io {
                context: "writing password to kinit".to_string(),
                source,
            })?;
            // Dropping stdin closes the pipe so kinit stops reading.
        }

        let output = child.wait_with_output().map_err(|source| AuthError::Io {
            context: "waiting for kinit".to_string(),
            source,
        })?;

        if !output.status.success() {
            let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if detail.is_empty() {
                format!("kinit exited with {}", output.status)
            } else {
                detail
            };
            return Err(AuthError::Rejected { detail });
        }

        Ok(Credential {
            client: client_name,
            service: service_name,
        })
    }
}
