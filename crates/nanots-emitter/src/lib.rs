//! Strips type annotations from a parsed tree and renders what is left
//! back to source text (SPEC_FULL.md §4.13–§4.14). Runs after the
//! checker has had a chance to reject the program, but does not itself
//! consult any symbol or type information: emission is a pure
//! syntactic rewrite.

mod printer;
mod transform;
mod tree;

pub use printer::emit;
pub use transform::strip;
pub use tree::EmitNode;

#[cfg(test)]
mod state_tests;
