//! Output assembly for the generated C source.
//!
//! The emitter is a text sink with three ordered regions (headers,
//! auxiliary declarations, main body) and a deferred-patch operation over
//! the main body. The parser emits code as a side effect of descent and
//! resolves forward references — declaration types, format specifiers,
//! print separators — by rewriting marker strings after the fact.

pub mod emitter;
