//! Monotonic type allocator. Every distinct type computed during a
//! compile — including one per object literal and one per generic
//! instantiation — gets a new slot; nothing is ever freed or reused
//! mid-compile.

use crate::types::{Primitive, Type};
use nanots_common::TypeId;

#[derive(Debug)]
pub struct TypeArena {
    types: Vec<Type>,
}

impl TypeArena {
    /// The four canonical primitives are allocated first, at fixed
    /// ids, so every other module can hand out `arena.string_type()`
    /// without first looking anything up.
    #[must_use]
    pub fn new() -> Self {
        let types = vec![
            Type::Primitive(Primitive::String),
            Type::Primitive(Primitive::Number),
            Type::Primitive(Primitive::Error),
            Type::Primitive(Primitive::Any),
        ];
        TypeArena { types }
    }

    #[must_use]
    pub fn string_type(&self) -> TypeId {
        TypeId(0)
    }

    #[must_use]
    pub fn number_type(&self) -> TypeId {
        TypeId(1)
    }

    #[must_use]
    pub fn error_type(&self) -> TypeId {
        TypeId(2)
    }

    #[must_use]
    pub fn any_type(&self) -> TypeId {
        TypeId(3)
    }

    pub fn alloc(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    #[must_use]
    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}
