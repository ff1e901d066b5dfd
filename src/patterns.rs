//! Hooks for graph pattern objects.
//!
//! Pattern clauses live outside this crate. Anything that describes a node,
//! relationship or path pattern implements [`Pattern`] so the structural
//! coercions can substitute the pattern's variable for it.

use std::fmt::{self, Debug};

use crate::expressions::Variable;
use crate::types::QueryConvertible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Node,
    Relationship,
    Path,
}

impl PatternKind {
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Node => "Node",
            PatternKind::Relationship => "Relationship",
            PatternKind::Path => "Path",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Pattern: QueryConvertible + Debug + Send + Sync {
    fn kind(&self) -> PatternKind;

    /// Variable bound to this pattern. Implementations generate one on demand
    /// when the pattern was created without a name.
    fn variable(&self) -> Variable;
}
