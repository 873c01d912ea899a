//! Road network namespace modules.
//!
//! Each sub-module encodes one namespace as Rust data and emits its fixed
//! statements. Both are built once per run, before any data is translated;
//! see [`crate::schema_statements`].

pub mod roadonto;
pub mod road;
