//! Best-effort type-argument inference over structural positions.
//! SPEC_FULL.md §4.9 / §9 open questions 2–3: only `Function` and
//! `TypeVariable` target positions contribute inferences, and only the
//! first candidate collected per type parameter is kept.

use crate::arena::TypeArena;
use crate::instantiate::{resolve_type_type, resolve_value_type};
use crate::types::Type;
use nanots_binder::SymbolArena;
use nanots_common::{SymbolId, TypeId};
use rustc_hash::FxHashMap;

/// `inferTypeArguments`. `type_parameters` are the call's generic
/// signature's type-variable `TypeId`s (already resolved via
/// `getTypeTypeOfSymbol`); `parameter_symbols`/`arg_types` are the
/// signature's declared parameters and the checked argument types at
/// the same positions. Returns one `TypeId` per type parameter, in the
/// same order, falling back to `any` for a parameter no argument
/// position ever constrained (open question 1, resolved in DESIGN.md).
#[must_use]
pub fn infer_type_arguments(
    symbols: &mut SymbolArena,
    types: &mut TypeArena,
    type_parameters: &[TypeId],
    parameter_symbols: &[SymbolId],
    arg_types: &[TypeId],
) -> Vec<TypeId> {
    let mut inferences: FxHashMap<TypeId, Vec<TypeId>> =
        type_parameters.iter().map(|&tp| (tp, Vec::new())).collect();

    for i in 0..parameter_symbols.len().min(arg_types.len()) {
        let declared = resolve_value_type(symbols, types, parameter_symbols[i]);
        infer_type(symbols, types, &mut inferences, arg_types[i], declared);
    }

    type_parameters
        .iter()
        .map(|tp| {
            inferences
                .get(tp)
                .and_then(|candidates| candidates.first().copied())
                .unwrap_or_else(|| types.any_type())
        })
        .collect()
}

/// `inferType(source, target)`, recursing structurally on `target`.
fn infer_type(
    symbols: &mut SymbolArena,
    types: &mut TypeArena,
    inferences: &mut FxHashMap<TypeId, Vec<TypeId>>,
    source: TypeId,
    target: TypeId,
) {
    match types.get(target).clone() {
        Type::Primitive(_) | Type::Object { .. } => {
            // No structural inference into object or primitive
            // positions in this version (open question 2).
        }
        Type::TypeVariable { .. } => {
            if let Some(candidates) = inferences.get_mut(&target) {
                candidates.push(source);
            }
        }
        Type::Function(target_sig) => {
            if let Type::Function(source_sig) = types.get(source).clone() {
                for (&s, &t) in source_sig.type_parameters.iter().zip(target_sig.type_parameters.iter()) {
                    let s_ty = resolve_type_type(symbols, types, s);
                    let t_ty = resolve_type_type(symbols, types, t);
                    infer_type(symbols, types, inferences, s_ty, t_ty);
                }
                for (&s, &t) in source_sig.parameters.iter().zip(target_sig.parameters.iter()) {
                    let s_ty = resolve_value_type(symbols, types, s);
                    let t_ty = resolve_value_type(symbols, types, t);
                    infer_type(symbols, types, inferences, s_ty, t_ty);
                }
                infer_type(symbols, types, inferences, source_sig.return_type, target_sig.return_type);
            }
        }
    }
}
