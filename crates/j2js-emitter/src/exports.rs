//! Export statement generation.
//!
//! Publishes exported members into a global namespace:
//!
//! ```javascript
//! _ = provide("foo.bar.ExportNamespace");
//! _.memberName = RHS;
//! ```
//!
//! `_` is a scratch accumulator: its value is only meaningful between its
//! assignment and the next `provide` call. Because the driver feeds export
//! requests grouped by namespace, consecutive members sharing a namespace
//! reuse the accumulator and only the first emits a `provide` call.

use j2js_ast::ast::{JsExpr, JsStmt};
use j2js_ast::names::JsName;
use j2js_common::Span;

use crate::error::ExportError;
use crate::intrinsics::{IntrinsicIndex, PROVIDE_INTRINSIC};
use crate::model::{ExportedMember, ExportedType, NameBindings};

/// Output dialect of the export statements. Selected once at driver
/// construction; generation code never inspects the dialect again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportDialect {
    /// Plain global-namespace output: members are aliased into namespace
    /// objects, types need no registration of their own.
    Global,
    /// Module-namespaced output: types additionally register their fully
    /// qualified name so downstream tooling sees the declaration.
    Module,
}

/// Generates export statements for declarations marked externally visible.
///
/// One instance is constructed per compilation unit and is the sole writer
/// to the shared output list for the duration of the pass.
pub trait ExportsGenerator {
    fn export_type(&mut self, ty: &ExportedType) -> Result<(), ExportError>;
    fn export_member(&mut self, member: &ExportedMember) -> Result<(), ExportError>;
}

/// Single-slot memo over the namespace-provisioning call.
///
/// Holds the namespace the accumulator currently points at; the memo is
/// updated in the same step that appends the `provide` statement, so it can
/// never diverge from the emitted stream. Dedup is contiguous-only: a
/// namespace recurring non-adjacently is provisioned again, which is
/// value-safe since `provide` is idempotent.
#[derive(Debug)]
struct NamespaceProvisioner {
    provide_fn: JsName,
    global_temp: JsName,
    last_exported_namespace: Option<String>,
}

impl NamespaceProvisioner {
    fn resolve(global_temp: JsName, intrinsics: &IntrinsicIndex) -> Result<Self, ExportError> {
        let provide_fn =
            intrinsics
                .lookup(PROVIDE_INTRINSIC)
                .ok_or(ExportError::MissingProvideIntrinsic {
                    key: PROVIDE_INTRINSIC,
                })?;
        Ok(Self {
            provide_fn,
            global_temp,
            last_exported_namespace: None,
        })
    }

    /// Append `_ = provide("namespace")` unless the immediately preceding
    /// export already provisioned the same namespace.
    fn ensure_provided(&mut self, namespace: &str, span: Span, stmts: &mut Vec<JsStmt>) {
        if self.last_exported_namespace.as_deref() == Some(namespace) {
            return;
        }
        self.last_exported_namespace = Some(namespace.to_string());

        let call = JsExpr::call(
            JsExpr::name_ref(self.provide_fn),
            vec![JsExpr::string(namespace)],
        );
        stmts.push(JsExpr::assign(JsExpr::name_ref(self.global_temp), call).into_stmt(span));
        tracing::debug!("[exports] provisioned namespace `{namespace}`");
    }
}

/// `_.memberName = boundName`, preceded by a `provide` call when the
/// namespace changes.
fn publish_member(
    provisioner: &mut NamespaceProvisioner,
    names: &NameBindings,
    stmts: &mut Vec<JsStmt>,
    member: &ExportedMember,
) -> Result<(), ExportError> {
    provisioner.ensure_provided(&member.export_namespace, member.span, stmts);

    let bound = names
        .get(member.id)
        .ok_or_else(|| ExportError::UnboundMember {
            export_name: member.export_name.clone(),
        })?;
    let target = JsExpr::prop(
        JsExpr::name_ref(provisioner.global_temp),
        member.export_name.clone(),
    );
    stmts.push(JsExpr::assign(target, JsExpr::name_ref(bound)).into_stmt(member.span));
    tracing::trace!(
        "[exports] published `{}.{}`",
        member.export_namespace,
        member.export_name
    );
    Ok(())
}

/// Export generation for plain global-namespace output.
pub struct GlobalExportsGenerator<'a> {
    export_stmts: &'a mut Vec<JsStmt>,
    names: &'a NameBindings,
    provisioner: NamespaceProvisioner,
}

impl<'a> GlobalExportsGenerator<'a> {
    pub fn new(
        export_stmts: &'a mut Vec<JsStmt>,
        names: &'a NameBindings,
        global_temp: JsName,
        intrinsics: &IntrinsicIndex,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            export_stmts,
            names,
            provisioner: NamespaceProvisioner::resolve(global_temp, intrinsics)?,
        })
    }
}

impl ExportsGenerator for GlobalExportsGenerator<'_> {
    fn export_type(&mut self, _ty: &ExportedType) -> Result<(), ExportError> {
        // Global-namespace output does nothing special to export types;
        // namespaces materialize lazily when the first member is published.
        Ok(())
    }

    fn export_member(&mut self, member: &ExportedMember) -> Result<(), ExportError> {
        publish_member(&mut self.provisioner, self.names, self.export_stmts, member)
    }
}

/// Export generation for module-namespaced output.
///
/// Members are published exactly as in the global dialect, but types also
/// register their fully qualified export name with a `provide` call.
pub struct ModuleExportsGenerator<'a> {
    export_stmts: &'a mut Vec<JsStmt>,
    names: &'a NameBindings,
    provisioner: NamespaceProvisioner,
}

impl<'a> ModuleExportsGenerator<'a> {
    pub fn new(
        export_stmts: &'a mut Vec<JsStmt>,
        names: &'a NameBindings,
        global_temp: JsName,
        intrinsics: &IntrinsicIndex,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            export_stmts,
            names,
            provisioner: NamespaceProvisioner::resolve(global_temp, intrinsics)?,
        })
    }
}

impl ExportsGenerator for ModuleExportsGenerator<'_> {
    fn export_type(&mut self, ty: &ExportedType) -> Result<(), ExportError> {
        self.provisioner
            .ensure_provided(&ty.qualified_name(), ty.span, self.export_stmts);
        Ok(())
    }

    fn export_member(&mut self, member: &ExportedMember) -> Result<(), ExportError> {
        publish_member(&mut self.provisioner, self.names, self.export_stmts, member)
    }
}

/// Run one export pass over a compilation unit's exported declarations.
///
/// Constructs a fresh generator for the requested dialect (fresh provisioning
/// memo; state never leaks across units), exports every type, then every
/// member grouped by namespace. The sort is stable, so members within one
/// namespace keep their input order.
pub fn generate_exports(
    dialect: ExportDialect,
    types: &[ExportedType],
    members: &[ExportedMember],
    names: &NameBindings,
    global_temp: JsName,
    intrinsics: &IntrinsicIndex,
) -> Result<Vec<JsStmt>, ExportError> {
    let mut export_stmts = Vec::new();
    {
        let mut generator: Box<dyn ExportsGenerator + '_> = match dialect {
            ExportDialect::Global => Box::new(GlobalExportsGenerator::new(
                &mut export_stmts,
                names,
                global_temp,
                intrinsics,
            )?),
            ExportDialect::Module => Box::new(ModuleExportsGenerator::new(
                &mut export_stmts,
                names,
                global_temp,
                intrinsics,
            )?),
        };

        for ty in types {
            generator.export_type(ty)?;
        }

        // Grouping by namespace is what makes the provisioner's
        // adjacent-dedup effective.
        let mut ordered: Vec<&ExportedMember> = members.iter().collect();
        ordered.sort_by(|a, b| a.export_namespace.cmp(&b.export_namespace));
        for member in ordered {
            generator.export_member(member)?;
        }
    }
    tracing::debug!(
        "[exports] generated {} statement(s) for {} type(s), {} member(s)",
        export_stmts.len(),
        types.len(),
        members.len()
    );
    Ok(export_stmts)
}
