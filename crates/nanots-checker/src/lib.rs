//! On-demand, memoised type checking.
//!
//! The checker never walks the tree eagerly: `check` drives exactly one
//! `checkStatement` per top-level statement, and every symbol's
//! `valueType`/`typeType` is computed the first time something asks for
//! it (`getValueTypeOfSymbol`/`getTypeTypeOfSymbol`) and cached on the
//! symbol itself from then on. This mirrors the teacher's on-demand
//! resolver rather than a batch whole-program pass.

mod state;
mod state_call;
mod state_expressions;
mod state_statements;
mod state_symbol_queries;
mod state_types;

pub use state::{check, CheckResult};

#[cfg(test)]
mod state_tests;
