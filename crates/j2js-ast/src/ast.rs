//! Expression and statement nodes for generated JavaScript.
//!
//! Each variant represents a JavaScript construct that the printer can emit.
//! Builder helpers keep generation code close to the shape of the output:
//! `JsExpr::assign(JsExpr::name_ref(temp), call)` reads like `_ = provide(...)`.

use j2js_common::Span;

use crate::names::JsName;

/// Expression node for generated JavaScript.
#[derive(Debug, Clone, PartialEq)]
pub enum JsExpr {
    /// Reference to a declared output identifier: `foo`
    NameRef(JsName),

    /// String literal: `"hello"`
    StringLiteral(String),

    /// Property access: `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    /// Call expression: `callee(args)`
    Call {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    /// Binary expression: `left op right`
    Binary {
        left: Box<Self>,
        operator: String,
        right: Box<Self>,
    },
}

impl JsExpr {
    /// Create a name reference
    pub const fn name_ref(name: JsName) -> Self {
        Self::NameRef(name)
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringLiteral(s.into())
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create a call expression
    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Create a binary expression
    pub fn binary(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::binary(target, "=", value)
    }

    /// Wrap this expression in an expression statement
    pub fn into_stmt(self, span: Span) -> JsStmt {
        JsStmt { expr: self, span }
    }
}

/// Expression statement: `expr;`
///
/// The span points at the source construct the statement was generated for
/// and is used for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub struct JsStmt {
    pub expr: JsExpr,
    pub span: Span,
}
