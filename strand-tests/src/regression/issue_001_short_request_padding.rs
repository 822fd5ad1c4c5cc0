//! Regression test for issue #001
//!
//! **Issue**: Short requests padded instead of rejected
//! **Link**: https://github.com/strand-rs/strand/issues/1
//!
//! ## Bug Description
//!
//! A request below the minimum byte count was silently padded up to the
//! minimum and served. Callers received more bytes than they asked for
//! and never learned their request was invalid, so downstream systems
//! sized buffers from the request and truncated the result.
//!
//! ## Fix Description
//!
//! Requests below the minimum are rejected with `InvalidLength`, which
//! names both the enforced minimum and the value the caller sent.
//!
//! ## Test Strategy
//!
//! Verify that every length below the minimum is rejected from every
//! source, that the error carries both numbers, and that the minimum
//! itself is still served at exactly the requested size.
