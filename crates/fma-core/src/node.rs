//! Node metadata and the invocation contract shared by the appender nodes.

use serde::Serialize;
use thiserror::Error;

use crate::relocate::RelocateError;

/// Version reported by every appender node.
pub const NODE_VERSION: &str = "1.0.0";

/// Static registration data for one node, as presented to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeMeta {
    /// Stable identifier the host registers the node under.
    pub name: &'static str,
    /// Human-readable title shown in the node picker.
    pub title: &'static str,
    /// Picker category.
    pub category: &'static str,
    /// Search tags.
    pub tags: &'static [&'static str],
    /// Node version string.
    pub version: &'static str,
}

/// Errors raised when a node invocation fails.
#[derive(Debug, Error)]
pub enum AppendError {
    /// Input validation rejected the invocation before any file was touched.
    #[error("{0}")]
    Validation(&'static str),
    /// An asset move failed.
    #[error(transparent)]
    Relocate(#[from] RelocateError),
}

/// An invokable node: validated inputs in, serializable output out.
pub trait Invocation {
    type Output: Serialize;

    const META: NodeMeta;

    fn invoke(&self) -> Result<Self::Output, AppendError>;
}

/// Metadata for every node this crate provides, in registration order.
pub fn registered_nodes() -> [NodeMeta; 3] {
    [
        crate::appender::PortraitAppender::META,
        crate::appender::LogoAppender::META,
        crate::appender::KitAppender::META,
    ]
}
