//! Mock authenticator helper for tests.
//!
//! No KDC is contacted; latency is simulated with a plain sleep and
//! failures are injected at a chosen attempt. Intended for unit and
//! integration tests where real Kerberos infrastructure is unavailable.

use crate::auth::{Authenticator, Credential};
use crate::errors::AuthError;
use crate::principal::Principal;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Scripted [`Authenticator`] with per-call latency and failure injection.
#[derive(Debug, Default)]
pub struct MockAuthenticator {
    latency: Duration,
    fail_on: Option<u32>,
    calls: AtomicU32,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long on every successful acquisition.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fail the n-th acquisition (1-based) with a rejected-credential error.
    #[must_use]
    pub fn failing_on(mut self, attempt: u32) -> Self {
        self.fail_on = Some(attempt);
        self
    }

    /// Number of acquisitions attempted so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Authenticator for MockAuthenticator {
    fn acquire(&self, client: &Principal, service: &Principal) -> Result<Credential, AuthError> {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_on == Some(attempt) {
            return Err(AuthError::Rejected {
                detail: format!("injected failure on attempt {}", attempt),
            });
        }

        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        Ok(Credential {
            client: client.to_string(),
            service: service.to_string(),
        })
    }
}
