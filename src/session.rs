use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::error::ClientError;

/// A reusable HTTP connection session.
///
/// Clones share the underlying connection pool and the open/closed state, so a
/// caller can hand a clone to the client and later close it from its own copy.
#[derive(Clone, Debug)]
pub struct HttpSession {
    client: reqwest::Client,
    closed: Arc<AtomicBool>,
}

impl HttpSession {
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// Wrap a client configured by the caller (timeouts, proxies, user agent).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Release the session. Further requests through any clone fail with
    /// [`ClientError::SessionClosed`].
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!("HTTP session closed");
        }
    }

    pub(crate) fn client(&self) -> Result<&reqwest::Client, ClientError> {
        if self.is_closed() {
            return Err(ClientError::SessionClosed);
        }
        Ok(&self.client)
    }
}

impl Default for HttpSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Session used for a single request.
///
/// A borrowed lease leaves the session open; an owned lease closes the session it
/// created when dropped, on both the success and the error path.
pub(crate) enum SessionLease<'a> {
    Borrowed(&'a HttpSession),
    Owned(HttpSession),
}

impl<'a> SessionLease<'a> {
    pub(crate) fn acquire(existing: Option<&'a HttpSession>) -> Self {
        match existing {
            Some(session) => {
                debug!("Reusing attached HTTP session");
                Self::Borrowed(session)
            }
            None => {
                debug!("Creating HTTP session for this request");
                Self::Owned(HttpSession::new())
            }
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl Deref for SessionLease<'_> {
    type Target = HttpSession;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Borrowed(session) => session,
            Self::Owned(session) => session,
        }
    }
}

impl Drop for SessionLease<'_> {
    fn drop(&mut self) {
        if let Self::Owned(session) = self {
            session.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_closed_state() {
        let session = HttpSession::new();
        let attached = session.clone();
        assert!(!attached.is_closed());
        session.close();
        assert!(attached.is_closed());
        assert!(matches!(attached.client(), Err(ClientError::SessionClosed)));
    }

    #[test]
    fn wraps_a_configured_client() {
        let client = reqwest::Client::builder()
            .user_agent("krisinformation-tests")
            .build()
            .unwrap();
        let session = HttpSession::from_client(client);
        assert!(!session.is_closed());
        assert!(session.client().is_ok());
    }

    #[test]
    fn borrowed_lease_leaves_session_open() {
        let session = HttpSession::new();
        {
            let lease = SessionLease::acquire(Some(&session));
            assert!(!lease.is_owned());
        }
        assert!(!session.is_closed());
    }

    #[test]
    fn owned_lease_closes_on_drop() {
        let lease = SessionLease::acquire(None);
        assert!(lease.is_owned());
        let observer = (*lease).clone();
        drop(lease);
        assert!(observer.is_closed());
    }
}
