//! `typeToString`, used only for diagnostic messages. Never used by
//! `is_assignable_to` — types are compared by id, not by their string
//! rendering.

use crate::arena::TypeArena;
use crate::instantiate::resolve_value_type;
use crate::types::{Primitive, Type};
use nanots_binder::SymbolArena;
use nanots_common::TypeId;

#[must_use]
pub fn type_to_string(symbols: &mut SymbolArena, types: &mut TypeArena, id: TypeId) -> String {
    match types.get(id).clone() {
        Type::Primitive(Primitive::String) => "string".to_string(),
        Type::Primitive(Primitive::Number) => "number".to_string(),
        Type::Primitive(Primitive::Error) => "error".to_string(),
        Type::Primitive(Primitive::Any) => "any".to_string(),
        Type::Object { symbol } => {
            let members = symbols.get(symbol).members.clone().unwrap_or_default();
            let rendered: Vec<String> = members
                .values_in_order()
                .map(|(name, member)| {
                    let member_ty = resolve_value_type(symbols, types, member);
                    format!("{name}: {}", type_to_string(symbols, types, member_ty))
                })
                .collect();
            if rendered.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {} }}", rendered.join(", "))
            }
        }
        Type::Function(sig) => {
            let params: Vec<String> = sig
                .parameters
                .iter()
                .map(|&p| {
                    let name = symbols.get(p).name.clone();
                    let param_ty = resolve_value_type(symbols, types, p);
                    format!("{name}: {}", type_to_string(symbols, types, param_ty))
                })
                .collect();
            format!(
                "({}) => {}",
                params.join(", "),
                type_to_string(symbols, types, sig.return_type)
            )
        }
        Type::TypeVariable { name, .. } => name.clone(),
    }
}
