//! Printer that walks node trees and emits JavaScript text.

use crate::ast::{JsExpr, JsStmt};
use crate::names::{JsName, NameRegistry};

/// Renders `JsExpr` / `JsStmt` trees to JavaScript source.
///
/// Borrows the unit's `NameRegistry` to resolve `JsName` handles.
pub struct JsPrinter<'a> {
    names: &'a NameRegistry,
    out: String,
}

impl<'a> JsPrinter<'a> {
    pub fn new(names: &'a NameRegistry) -> Self {
        Self {
            names,
            out: String::new(),
        }
    }

    /// Render a single statement to a string.
    pub fn emit_to_string(names: &NameRegistry, stmt: &JsStmt) -> String {
        let mut printer = JsPrinter::new(names);
        printer.emit_stmt(stmt);
        printer.out
    }

    /// Render a single expression to a string.
    pub fn emit_expr_to_string(names: &NameRegistry, expr: &JsExpr) -> String {
        let mut printer = JsPrinter::new(names);
        printer.emit_expr(expr);
        printer.out
    }

    /// Render a statement list, one statement per line.
    pub fn emit_stmts_to_string(names: &NameRegistry, stmts: &[JsStmt]) -> String {
        let mut printer = JsPrinter::new(names);
        for (i, stmt) in stmts.iter().enumerate() {
            if i > 0 {
                printer.write("\n");
            }
            printer.emit_stmt(stmt);
        }
        printer.out
    }

    pub fn emit_stmt(&mut self, stmt: &JsStmt) {
        self.emit_expr(&stmt.expr);
        self.write(";");
    }

    pub fn emit_expr(&mut self, expr: &JsExpr) {
        match expr {
            JsExpr::NameRef(name) => self.emit_name(*name),
            JsExpr::StringLiteral(text) => {
                self.write_char('"');
                self.emit_escaped_string(text, '"');
                self.write_char('"');
            }
            JsExpr::PropertyAccess { object, property } => {
                self.emit_expr(object);
                self.write_char('.');
                self.write(property);
            }
            JsExpr::Call { callee, arguments } => {
                self.emit_expr(callee);
                self.write_char('(');
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expr(arg);
                }
                self.write_char(')');
            }
            JsExpr::Binary {
                left,
                operator,
                right,
            } => {
                self.emit_expr(left);
                self.write_char(' ');
                self.write(operator);
                self.write_char(' ');
                self.emit_expr(right);
            }
        }
    }

    /// Take the accumulated output.
    pub fn finish(self) -> String {
        self.out
    }

    fn emit_name(&mut self, name: JsName) {
        let ident = self.names.ident(name);
        self.out.push_str(ident);
    }

    fn emit_escaped_string(&mut self, s: &str, quote_char: char) {
        for ch in s.chars() {
            match ch {
                '\n' => self.write("\\n"),
                '\r' => self.write("\\r"),
                '\t' => self.write("\\t"),
                '\\' => self.write("\\\\"),
                c if c == quote_char => {
                    self.write_char('\\');
                    self.write_char(c);
                }
                c => self.write_char(c),
            }
        }
    }

    fn write(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.out.push(c);
    }
}
