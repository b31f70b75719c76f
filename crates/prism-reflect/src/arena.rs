use std::fmt;

use prism_model::TypeExpr;

/// Identity of an interned type expression node.
///
/// Ids are only meaningful for the [`crate::Reflector`] whose arena produced
/// them; an id presented to a different context evaluates as unsatisfiable
/// rather than panicking.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeExprId(u32);

impl TypeExprId {
    fn from_raw(raw: u32) -> Self {
        TypeExprId(raw)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeExprId({})", self.0)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum ExprNode {
    Named { name: String, builtin: bool },
    Union(Vec<TypeExprId>),
    Intersection(Vec<TypeExprId>),
    Opaque,
}

/// Arena of interned type expression nodes.
///
/// Interning always allocates fresh nodes: structurally equal expressions
/// obtained from different members deliberately do not share ids, so the
/// compatibility memo is keyed by identity, not by structural value.
#[derive(Debug, Default)]
pub(crate) struct ExprArena {
    nodes: Vec<ExprNode>,
}

impl ExprArena {
    pub(crate) fn intern(&mut self, expr: &TypeExpr) -> TypeExprId {
        let node = match expr {
            TypeExpr::Named { name, builtin } => ExprNode::Named {
                name: name.clone(),
                builtin: *builtin,
            },
            TypeExpr::Union(members) => {
                let members = members.iter().map(|m| self.intern(m)).collect();
                ExprNode::Union(members)
            }
            TypeExpr::Intersection(members) => {
                let members = members.iter().map(|m| self.intern(m)).collect();
                ExprNode::Intersection(members)
            }
            TypeExpr::Opaque => ExprNode::Opaque,
        };
        self.alloc(node)
    }

    pub(crate) fn node(&self, id: TypeExprId) -> Option<&ExprNode> {
        self.nodes.get(id.idx())
    }

    fn alloc(&mut self, node: ExprNode) -> TypeExprId {
        let idx = self.nodes.len() as u32;
        self.nodes.push(node);
        TypeExprId::from_raw(idx)
    }
}
