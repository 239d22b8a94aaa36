//! Structural assignability: "can a value of type `source` be used
//! where `target` is expected". Reflexive, not symmetric. Both sides
//! must already be fully checked — member and parameter types are read
//! from the cached `value_type` on their symbols rather than recomputed
//! here, so the solver never needs to re-enter the checker.

use crate::arena::TypeArena;
use crate::instantiate::{instantiate_signature, resolve_type_type, resolve_value_type};
use crate::types::{Primitive, Signature, Type};
use nanots_binder::SymbolArena;
use nanots_common::{Mapper, TypeId};

/// `isAssignableTo`. Instantiation during the generic-function branch
/// needs to allocate fresh signatures, so this takes `&mut SymbolArena`
/// / `&mut TypeArena` even though it never mutates an existing type.
pub fn is_assignable_to(symbols: &mut SymbolArena, types: &mut TypeArena, source: TypeId, target: TypeId) -> bool {
    let any_type = types.any_type();
    let error_type = types.error_type();

    if source == target || source == any_type || target == any_type || source == error_type || target == error_type {
        return true;
    }

    match (types.get(source).clone(), types.get(target).clone()) {
        (Type::Primitive(a), Type::Primitive(b)) => a == b,
        (Type::Object { symbol: source_sym }, Type::Object { symbol: target_sym }) => {
            let target_members = symbols
                .get(target_sym)
                .members
                .clone()
                .unwrap_or_default();
            for (name, target_member) in target_members.values_in_order() {
                let source_members = symbols.get(source_sym).members.clone().unwrap_or_default();
                let Some(source_member) = source_members.get(name, nanots_common::Meaning::Value) else {
                    return false;
                };
                let source_ty = resolve_value_type(symbols, types, source_member);
                let target_ty = resolve_value_type(symbols, types, target_member);
                if !is_assignable_to(symbols, types, source_ty, target_ty) {
                    return false;
                }
            }
            true
        }
        (Type::Function(source_sig), Type::Function(target_sig)) => {
            is_function_assignable(symbols, types, &source_sig, &target_sig)
        }
        _ => false,
    }
}

fn is_function_assignable(
    symbols: &mut SymbolArena,
    types: &mut TypeArena,
    source_sig: &Signature,
    target_sig: &Signature,
) -> bool {
    let target_sig = if !source_sig.type_parameters.is_empty() && !target_sig.type_parameters.is_empty() {
        let sources: Vec<TypeId> = target_sig
            .type_parameters
            .iter()
            .map(|&p| resolve_type_type(symbols, types, p))
            .collect();
        let targets: Vec<TypeId> = source_sig
            .type_parameters
            .iter()
            .map(|&p| resolve_type_type(symbols, types, p))
            .collect();
        instantiate_signature(symbols, types, target_sig, &Mapper::new(sources, targets))
    } else {
        target_sig.clone()
    };

    if !is_assignable_to(symbols, types, source_sig.return_type, target_sig.return_type) {
        return false;
    }

    if source_sig.parameters.len() > target_sig.parameters.len() {
        return false;
    }

    for i in 0..source_sig.parameters.len() {
        let source_param = resolve_value_type(symbols, types, source_sig.parameters[i]);
        let target_param = resolve_value_type(symbols, types, target_sig.parameters[i]);
        // Contravariant: the target's parameter type must accept
        // whatever the source expected, not the other way around.
        if !is_assignable_to(symbols, types, target_param, source_param) {
            return false;
        }
    }

    true
}
