//! Source Identifier and Error Contract Stability
//!
//! Deployment configuration names sources by string, and monitoring
//! pipelines match on error classification tags. Both sets are pinned
//! here so a rename fails in this crate instead of in production.
