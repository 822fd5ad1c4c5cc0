//! Bundle Wire Format Stability
//!
//! The serialized bundle is consumed by systems that index it by field
//! name. The names, their order, and the digest widths are all pinned.
