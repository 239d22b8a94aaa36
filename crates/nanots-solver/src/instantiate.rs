//! Generic instantiation: producing a concrete type/signature/symbol
//! from a generic one by applying a `Mapper`. Never cached — every call
//! allocates fresh ids, per SPEC_FULL.md §4.8.

use crate::arena::TypeArena;
use crate::types::{Signature, Type};
use nanots_binder::SymbolArena;
use nanots_common::{Mapper, SymbolId, TypeId};

/// `instantiateType`. Primitives pass through unchanged (no new id is
/// allocated for them — there is nothing to substitute inside a leaf).
#[must_use]
pub fn instantiate_type(symbols: &mut SymbolArena, types: &mut TypeArena, ty: TypeId, mapper: &Mapper) -> TypeId {
    match types.get(ty).clone() {
        Type::Primitive(_) => ty,
        Type::TypeVariable { .. } => mapper.substitute(ty).unwrap_or(ty),
        Type::Function(sig) => {
            let instantiated = instantiate_signature(symbols, types, &sig, mapper);
            types.alloc(Type::Function(instantiated))
        }
        Type::Object { symbol } => {
            let members = symbols
                .get(symbol)
                .members
                .clone()
                .unwrap_or_default();
            let new_symbol = symbols.instantiate_object(&members, mapper);
            types.alloc(Type::Object { symbol: new_symbol })
        }
    }
}

/// A member/parameter symbol's `value_type` the way anything that only
/// looks at declared symbols would read it: if it has been computed
/// (or is an ordinary, never-instantiated symbol), return the cache.
/// Symbols synthesized by `instantiate`/`instantiate_object` never get
/// their own `value_type` forced, though — nothing in the checker
/// visits them directly — so for those, substitute through `target`'s
/// (possibly itself instantiated) value type under this symbol's own
/// `mapper` instead of silently widening to `any`.
#[must_use]
pub fn resolve_value_type(symbols: &mut SymbolArena, types: &mut TypeArena, id: SymbolId) -> TypeId {
    if let Some(ty) = symbols.get(id).value_type.get() {
        return ty;
    }
    let source = symbols.get(id);
    match (source.target, source.mapper.clone()) {
        (Some(target), Some(mapper)) => {
            let base = resolve_value_type(symbols, types, target);
            instantiate_type(symbols, types, base, &mapper)
        }
        _ => types.any_type(),
    }
}

/// The `type_type` counterpart of [`resolve_value_type`], for type
/// parameter symbols (whose `TypeVariable` lives in `type_type`).
#[must_use]
pub fn resolve_type_type(symbols: &mut SymbolArena, types: &mut TypeArena, id: SymbolId) -> TypeId {
    if let Some(ty) = symbols.get(id).type_type.get() {
        return ty;
    }
    let source = symbols.get(id);
    match (source.target, source.mapper.clone()) {
        (Some(target), Some(mapper)) => {
            let base = resolve_type_type(symbols, types, target);
            instantiate_type(symbols, types, base, &mapper)
        }
        _ => types.any_type(),
    }
}

/// `instantiateSignature`. `type_parameters` are dropped — once a
/// signature has been instantiated it is no longer itself generic —
/// and `target`/`mapper` are recorded so a later `getValueTypeOfSymbol`
/// on one of its (instantiated) parameter symbols can delegate back.
#[must_use]
pub fn instantiate_signature(
    symbols: &mut SymbolArena,
    types: &mut TypeArena,
    sig: &Signature,
    mapper: &Mapper,
) -> Signature {
    let parameters = sig
        .parameters
        .iter()
        .map(|&p| symbols.instantiate(p, mapper.clone()))
        .collect();
    let return_type = instantiate_type(symbols, types, sig.return_type, mapper);
    Signature {
        type_parameters: Vec::new(),
        parameters,
        return_type,
        target: Some(Box::new(sig.clone())),
        mapper: Some(mapper.clone()),
    }
}
