//! Storage permission collaborator.

use async_trait::async_trait;

/// Abstraction over the host platform's storage permission dialog.
///
/// Resolved once, before gesture handling is armed. The prompt strings
/// come from [`crate::config::PermissionConfig`].
#[async_trait]
pub trait PermissionProbe: Send + Sync {
    /// Shows the permission prompt and resolves to granted/denied.
    async fn request_access(&self, title: &str, message: &str) -> bool;
}

/// Probe that grants unconditionally.
///
/// The default on platforms whose storage APIs need no runtime prompt,
/// and a convenient stand-in for tests.
pub struct AlwaysGranted;

#[async_trait]
impl PermissionProbe for AlwaysGranted {
    async fn request_access(&self, _title: &str, _message: &str) -> bool {
        true
    }
}
