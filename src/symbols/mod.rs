//! Symbol table for declared variables.
//!
//! One table exists per compilation run and records every declared name with
//! its inferred or declared numeric type. The table enforces the
//! single-declaration rule; type-consistency checks on reassignment read the
//! stored type back out of it.

pub mod table;
