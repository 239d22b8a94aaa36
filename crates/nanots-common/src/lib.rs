//! Common types shared across every nanots compiler phase.
//!
//! Placing these here — rather than in the binder or checker — breaks
//! what would otherwise be a circular dependency: the scanner needs
//! `Pos`, the checker needs `DiagnosticSink`, and the CLI needs both
//! plus `InternalError`.

pub mod diagnostics;
pub mod errors;
pub mod ids;
pub mod position;

pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use errors::InternalError;
pub use ids::{Mapper, Meaning, NodeId, SymbolId, TypeId};
pub use position::{LineCol, LineMap, Pos};
