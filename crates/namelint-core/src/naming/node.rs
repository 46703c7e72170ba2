//! Function-like nodes paired with their syntactic parent.
//!
//! SWC nodes carry no parent links, so the walker hands each function-like
//! node to visitors as a [`FunctionCursor`]: the node plus a borrowed view of
//! the node that contains it.

use swc_common::Span;
use swc_ecma_ast::{
    ArrowExpr, AssignExpr, AssignPat, AssignPatProp, CallExpr, ClassMember, Constructor, Expr,
    FnDecl, FnExpr, Function, GetterProp, KeyValueProp, MethodProp, OptCall, SetterProp,
    VarDeclarator,
};

/// Unwraps `(expr)` groupings, which ESTree-based tools never see.
pub fn strip_parens(expr: &Expr) -> &Expr {
    let mut current = expr;
    while let Expr::Paren(paren) = current {
        current = &paren.expr;
    }
    current
}

#[derive(Debug, Clone, Copy)]
pub enum FunctionNode<'a> {
    /// `function name() {}`
    Decl(&'a FnDecl),
    /// `function () {}` or `function name() {}` in expression position
    Expr(&'a FnExpr),
    /// `() => {}`
    Arrow(&'a ArrowExpr),
    /// Body of an object or class method: `{ name() {} }`
    Method(&'a Function),
    /// `{ get name() {} }`
    Getter(&'a GetterProp),
    /// `{ set name(value) {} }`
    Setter(&'a SetterProp),
    /// `class { constructor() {} }`
    Constructor(&'a Constructor),
}

impl<'a> FunctionNode<'a> {
    /// Returns the function-like node an expression evaluates to, if any.
    pub fn from_expr(expr: &'a Expr) -> Option<Self> {
        match strip_parens(expr) {
            Expr::Fn(fn_expr) => Some(Self::Expr(fn_expr)),
            Expr::Arrow(arrow) => Some(Self::Arrow(arrow)),
            _ => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Decl(decl) => decl.function.span,
            Self::Expr(fn_expr) => fn_expr.function.span,
            Self::Arrow(arrow) => arrow.span,
            Self::Method(function) => function.span,
            Self::Getter(prop) => prop.span,
            Self::Setter(prop) => prop.span,
            Self::Constructor(ctor) => ctor.span,
        }
    }

    pub fn is_async(&self) -> bool {
        match self {
            Self::Decl(decl) => decl.function.is_async,
            Self::Expr(fn_expr) => fn_expr.function.is_async,
            Self::Arrow(arrow) => arrow.is_async,
            Self::Method(function) => function.is_async,
            Self::Getter(_) | Self::Setter(_) | Self::Constructor(_) => false,
        }
    }

    /// True when `expr` is this very node (by address, ignoring parentheses).
    pub fn is_expr(&self, expr: &Expr) -> bool {
        match (self, strip_parens(expr)) {
            (Self::Expr(node), Expr::Fn(other)) => std::ptr::eq(*node, other),
            (Self::Arrow(node), Expr::Arrow(other)) => std::ptr::eq(*node, other),
            _ => false,
        }
    }

    /// True when `function` is the body of this method node.
    pub fn is_function(&self, function: &Function) -> bool {
        match self {
            Self::Method(node) => std::ptr::eq(*node, function),
            Self::Expr(fn_expr) => std::ptr::eq(&*fn_expr.function, function),
            Self::Decl(decl) => std::ptr::eq(&*decl.function, function),
            Self::Arrow(_) | Self::Getter(_) | Self::Setter(_) | Self::Constructor(_) => false,
        }
    }

    pub fn is_getter(&self, prop: &GetterProp) -> bool {
        matches!(self, Self::Getter(node) if std::ptr::eq(*node, prop))
    }

    pub fn is_setter(&self, prop: &SetterProp) -> bool {
        matches!(self, Self::Setter(node) if std::ptr::eq(*node, prop))
    }
}

/// The immediate parent of a function-like node.
#[derive(Debug, Clone, Copy)]
pub enum ParentNode<'a> {
    /// `const name = <fn>`
    VarDeclarator(&'a VarDeclarator),
    /// `target = <fn>` (any assignment operator)
    Assign(&'a AssignExpr),
    /// `{ key: <fn> }`
    KeyValueProp(&'a KeyValueProp),
    /// `{ key() {} }`
    MethodProp(&'a MethodProp),
    /// `{ get key() {} }`
    GetterProp(&'a GetterProp),
    /// `{ set key(value) {} }`
    SetterProp(&'a SetterProp),
    /// `[name = <fn>]`, `{ key: name = <fn> }`, `(name = <fn>) => {}`
    AssignPat(&'a AssignPat),
    /// `{ name = <fn> }` in a binding or assignment pattern
    AssignPatProp(&'a AssignPatProp),
    /// Methods and fields of a class body
    ClassMember(&'a ClassMember),
    /// `callee(<fn>)`
    Call(&'a CallExpr),
    /// `callee?.(<fn>)`, `object?.callee(<fn>)`
    OptCall(&'a OptCall),
    /// Any parent that never contributes a name
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionCursor<'a> {
    pub node: FunctionNode<'a>,
    pub parent: ParentNode<'a>,
}

impl<'a> FunctionCursor<'a> {
    pub fn new(node: FunctionNode<'a>, parent: ParentNode<'a>) -> Self {
        Self { node, parent }
    }
}
