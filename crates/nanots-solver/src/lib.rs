//! The type universe, structural assignability, and generic
//! instantiation. This crate owns no AST and no symbol-declaring logic
//! — it is the algebra the checker drives: allocate types, ask whether
//! one is assignable to another, instantiate a generic signature under
//! a substitution, infer type arguments from call-site evidence.

mod arena;
mod assignability;
mod display;
mod infer;
mod instantiate;
pub mod types;

pub use arena::TypeArena;
pub use assignability::is_assignable_to;
pub use display::type_to_string;
pub use infer::infer_type_arguments;
pub use instantiate::{instantiate_signature, instantiate_type, resolve_type_type, resolve_value_type};
pub use types::{Primitive, Signature, Type};

#[cfg(test)]
mod tests {
    use super::*;
    use nanots_binder::SymbolArena;
    use nanots_common::Mapper;

    #[test]
    fn canonical_primitives_have_stable_ids() {
        let types = TypeArena::new();
        assert_eq!(types.string_type(), nanots_common::TypeId(0));
        assert_eq!(types.number_type(), nanots_common::TypeId(1));
        assert_eq!(types.error_type(), nanots_common::TypeId(2));
        assert_eq!(types.any_type(), nanots_common::TypeId(3));
    }

    #[test]
    fn any_and_error_are_assignable_both_ways() {
        let mut symbols = SymbolArena::new();
        let mut types = TypeArena::new();
        let number = types.number_type();
        let any = types.any_type();
        let error = types.error_type();
        assert!(is_assignable_to(&mut symbols, &mut types, number, any));
        assert!(is_assignable_to(&mut symbols, &mut types, any, number));
        assert!(is_assignable_to(&mut symbols, &mut types, number, error));
        assert!(is_assignable_to(&mut symbols, &mut types, error, number));
    }

    #[test]
    fn identical_primitives_are_assignable() {
        let mut symbols = SymbolArena::new();
        let mut types = TypeArena::new();
        let number = types.number_type();
        assert!(is_assignable_to(&mut symbols, &mut types, number, number));
    }

    #[test]
    fn distinct_primitives_are_not_assignable() {
        let mut symbols = SymbolArena::new();
        let mut types = TypeArena::new();
        let number = types.number_type();
        let string = types.string_type();
        assert!(!is_assignable_to(&mut symbols, &mut types, number, string));
    }

    #[test]
    fn type_variable_substitutes_through_mapper() {
        let mut symbols = SymbolArena::new();
        let mut types = TypeArena::new();
        let symbol = symbols.declare("T".to_string());
        let var = types.alloc(Type::TypeVariable {
            symbol,
            name: "T".to_string(),
        });
        let number = types.number_type();
        let mapper = Mapper::new(vec![var], vec![number]);
        let result = instantiate_type(&mut symbols, &mut types, var, &mapper);
        assert_eq!(result, number);
    }

    #[test]
    fn type_variable_outside_mapper_is_unchanged() {
        let mut symbols = SymbolArena::new();
        let mut types = TypeArena::new();
        let symbol = symbols.declare("T".to_string());
        let var = types.alloc(Type::TypeVariable {
            symbol,
            name: "T".to_string(),
        });
        let mapper = Mapper::new(Vec::new(), Vec::new());
        let result = instantiate_type(&mut symbols, &mut types, var, &mapper);
        assert_eq!(result, var);
    }

    #[test]
    fn type_to_string_renders_primitives() {
        let mut symbols = SymbolArena::new();
        let mut types = TypeArena::new();
        let number = types.number_type();
        let string = types.string_type();
        assert_eq!(type_to_string(&mut symbols, &mut types, number), "number");
        assert_eq!(type_to_string(&mut symbols, &mut types, string), "string");
    }
}
