use nanots_binder::{BindResult, SymbolArena, Table};
use nanots_common::{DiagnosticSink, NodeId, SymbolId};
use nanots_parser::Ast;
use nanots_solver::TypeArena;
use rustc_hash::{FxHashMap, FxHashSet};

/// Output of `check`: the type of every top-level statement, plus the
/// symbol and type arenas the checker populated — the driver needs
/// these alive to call `typeToString` on diagnostics or to drive
/// Transform/Emitter afterwards.
pub struct CheckResult {
    pub statement_types: Vec<nanots_common::TypeId>,
    pub symbols: SymbolArena,
    pub types: TypeArena,
}

/// All the mutable state one `check` pass threads through. Owns the
/// binder's output outright rather than borrowing it, since the
/// checker allocates further symbols (generic instantiation) and types
/// into the same arenas as it goes.
pub(crate) struct CheckerState<'a> {
    pub(crate) ast: &'a Ast,
    pub(crate) scopes: FxHashMap<NodeId, Table>,
    pub(crate) symbols: SymbolArena,
    pub(crate) types: TypeArena,
    pub(crate) diagnostics: &'a mut DiagnosticSink,
    /// Symbols whose `valueType`/`typeType` is currently being computed.
    /// Reentry during that computation (a self-referential declaration)
    /// returns `anyType` instead of recursing forever.
    pub(crate) in_progress: FxHashSet<SymbolId>,
}

impl<'a> CheckerState<'a> {
    /// Runs `body` while `sym` is marked in-progress, returning `None`
    /// (the caller substitutes `anyType`) if `sym` was already
    /// in-progress when called.
    pub(crate) fn guarded<T>(&mut self, sym: SymbolId, body: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if !self.in_progress.insert(sym) {
            return None;
        }
        let result = body(self);
        self.in_progress.remove(&sym);
        Some(result)
    }
}

/// Checks every top-level statement of `ast`, which must already have
/// been `bind`-ed. See SPEC_FULL.md §4.4 / §6.
#[must_use]
pub fn check(ast: &Ast, bind_result: BindResult, diagnostics: &mut DiagnosticSink) -> CheckResult {
    let mut state = CheckerState {
        ast,
        scopes: bind_result.scopes,
        symbols: bind_result.symbols,
        types: TypeArena::new(),
        diagnostics,
        in_progress: FxHashSet::default(),
    };
    let statements = ast.module_statements().to_vec();
    tracing::debug!(count = statements.len(), "checking module");
    let statement_types = statements.into_iter().map(|stmt| state.check_statement(stmt)).collect();
    CheckResult {
        statement_types,
        symbols: state.symbols,
        types: state.types,
    }
}
