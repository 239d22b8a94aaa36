//! Internal invariant violations.
//!
//! These never reach a user as a diagnostic: they indicate a contract
//! violation between phases (a missing symbol, an unreachable dispatch
//! arm) and abort the compile. The driver turns these into exit code
//! 101 rather than swallowing them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InternalError {
    #[error("internal error: declaration has no symbol attached")]
    MissingSymbol,

    #[error("internal error: node has no parent")]
    MissingParent,

    #[error("internal error: symbol has no value declaration")]
    MissingValueDeclaration,

    #[error("internal error: symbol has no declaration that can produce a {meaning} type")]
    NoProducibleType { meaning: &'static str },

    #[error("internal error: unreachable node kind reached {dispatcher}")]
    UnreachableKind { dispatcher: &'static str },

    #[error("internal error: {0}")]
    Other(String),
}
