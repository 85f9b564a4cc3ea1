//! Contract of the external user subsystem
//!
//! Notes refer to their owner by id; the owner itself is registered and
//! authenticated elsewhere. The note routes treat owner ids as opaque and
//! never call into this service, so owner existence is assumed, not
//! validated.

use async_trait::async_trait;

/// Identifier of a note owner, issued by the user subsystem
pub type UserId = i64;

/// User registration and authentication
///
/// Mirrors the surface of the external collaborator so a real client can
/// be wired in without touching the note routes
#[allow(dead_code)]
#[async_trait]
pub trait UserService: Send + Sync + 'static {
    /// Register a new user, returning its id
    async fn register(&self, username: &str, password: &str) -> anyhow::Result<UserId>;

    /// Verify credentials, returning the matching user id
    async fn login(&self, username: &str, password: &str) -> anyhow::Result<Option<UserId>>;
}
