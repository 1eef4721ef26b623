//! End-to-end tests for export statement generation: requests in, printed
//! JavaScript statements out.

use j2js_ast::ast::JsStmt;
use j2js_ast::names::{JsName, NameRegistry};
use j2js_ast::printer::JsPrinter;
use j2js_common::Span;
use j2js_emitter::{
    ExportDialect, ExportError, ExportedMember, ExportedType, GlobalExportsGenerator,
    IntrinsicIndex, MemberId, NameBindings, PROVIDE_INTRINSIC, TypeId, generate_exports,
};

/// One compilation unit's worth of naming state: an identifier registry with
/// the accumulator and provide function declared, plus the binding table the
/// upstream naming pass would have produced.
struct TestUnit {
    registry: NameRegistry,
    bindings: NameBindings,
    intrinsics: IntrinsicIndex,
    global_temp: JsName,
    next_member: u32,
}

impl TestUnit {
    fn new() -> Self {
        let mut registry = NameRegistry::new();
        let global_temp = registry.declare("_");
        let provide = registry.declare("provide");
        let mut intrinsics = IntrinsicIndex::new();
        intrinsics.register(PROVIDE_INTRINSIC, provide);
        Self {
            registry,
            bindings: NameBindings::new(),
            intrinsics,
            global_temp,
            next_member: 0,
        }
    }

    fn member(&mut self, namespace: &str, export_name: &str, bound_ident: &str) -> ExportedMember {
        let id = MemberId(self.next_member);
        self.next_member += 1;
        let bound = self.registry.declare(bound_ident);
        self.bindings.insert(id, bound);
        ExportedMember::new(id, namespace, export_name, Span::SYNTHETIC)
    }

    /// A member the naming pass "forgot" to bind.
    fn unbound_member(&mut self, namespace: &str, export_name: &str) -> ExportedMember {
        let id = MemberId(self.next_member);
        self.next_member += 1;
        ExportedMember::new(id, namespace, export_name, Span::SYNTHETIC)
    }

    fn generate(
        &self,
        dialect: ExportDialect,
        types: &[ExportedType],
        members: &[ExportedMember],
    ) -> Result<Vec<JsStmt>, ExportError> {
        generate_exports(
            dialect,
            types,
            members,
            &self.bindings,
            self.global_temp,
            &self.intrinsics,
        )
    }

    fn render(&self, stmts: &[JsStmt]) -> Vec<String> {
        stmts
            .iter()
            .map(|stmt| JsPrinter::emit_to_string(&self.registry, stmt))
            .collect()
    }
}

#[test]
fn members_sharing_a_namespace_share_one_provide_call() {
    let mut unit = TestUnit::new();
    let members = vec![
        unit.member("a.b", "f1", "Foo_f1"),
        unit.member("a.b", "f2", "Foo_f2"),
        unit.member("a.c", "f3", "Bar_f3"),
    ];

    let stmts = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap();

    assert_eq!(
        unit.render(&stmts),
        vec![
            "_ = provide(\"a.b\");",
            "_.f1 = Foo_f1;",
            "_.f2 = Foo_f2;",
            "_ = provide(\"a.c\");",
            "_.f3 = Bar_f3;",
        ]
    );
}

#[test]
fn type_export_appends_nothing_in_global_dialect() {
    let unit = TestUnit::new();
    let types = vec![ExportedType::new(
        TypeId(0),
        "a.b",
        "Foo",
        Span::SYNTHETIC,
    )];

    let stmts = unit.generate(ExportDialect::Global, &types, &[]).unwrap();
    assert!(stmts.is_empty());
}

#[test]
fn provide_count_matches_namespace_runs_not_request_count() {
    let mut unit = TestUnit::new();
    let members = vec![
        unit.member("x", "a", "X_a"),
        unit.member("x", "b", "X_b"),
        unit.member("x", "c", "X_c"),
        unit.member("y", "d", "Y_d"),
    ];

    let stmts = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap();
    let rendered = unit.render(&stmts);
    let provides = rendered.iter().filter(|s| s.contains("provide(")).count();

    // Two maximal runs of equal namespaces, so two provide calls.
    assert_eq!(provides, 2);
    assert_eq!(stmts.len(), 6);
}

#[test]
fn non_adjacent_namespace_repeat_is_provisioned_again() {
    let mut unit = TestUnit::new();
    let mut stmts = Vec::new();
    let m1 = unit.member("a.b", "f1", "f1");
    let m2 = unit.member("a.c", "f2", "f2");
    let m3 = unit.member("a.b", "f3", "f3");

    // Feed the generator directly, bypassing the driver's sort, to exercise
    // an imperfectly grouped input.
    {
        use j2js_emitter::ExportsGenerator;
        let mut generator = GlobalExportsGenerator::new(
            &mut stmts,
            &unit.bindings,
            unit.global_temp,
            &unit.intrinsics,
        )
        .unwrap();
        generator.export_member(&m1).unwrap();
        generator.export_member(&m2).unwrap();
        generator.export_member(&m3).unwrap();
    }

    assert_eq!(
        unit.render(&stmts),
        vec![
            "_ = provide(\"a.b\");",
            "_.f1 = f1;",
            "_ = provide(\"a.c\");",
            "_.f2 = f2;",
            "_ = provide(\"a.b\");",
            "_.f3 = f3;",
        ]
    );
}

#[test]
fn driver_groups_members_by_namespace_keeping_input_order_within_a_group() {
    let mut unit = TestUnit::new();
    let members = vec![
        unit.member("a.c", "late", "late"),
        unit.member("a.b", "first", "first"),
        unit.member("a.b", "second", "second"),
    ];

    let stmts = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap();

    assert_eq!(
        unit.render(&stmts),
        vec![
            "_ = provide(\"a.b\");",
            "_.first = first;",
            "_.second = second;",
            "_ = provide(\"a.c\");",
            "_.late = late;",
        ]
    );
}

#[test]
fn module_dialect_registers_type_qualified_names() {
    let mut unit = TestUnit::new();
    let types = vec![ExportedType::new(
        TypeId(0),
        "a.b",
        "Foo",
        Span::SYNTHETIC,
    )];
    let members = vec![unit.member("a.b", "create", "Foo_create")];

    let stmts = unit
        .generate(ExportDialect::Module, &types, &members)
        .unwrap();

    assert_eq!(
        unit.render(&stmts),
        vec![
            "_ = provide(\"a.b.Foo\");",
            "_ = provide(\"a.b\");",
            "_.create = Foo_create;",
        ]
    );
}

#[test]
fn module_dialect_shares_the_cache_between_types_and_members() {
    let mut unit = TestUnit::new();
    // The type's qualified name equals the member's namespace, so the
    // member's provision dedups against the type registration.
    let types = vec![ExportedType::new(TypeId(0), "a", "b", Span::SYNTHETIC)];
    let members = vec![unit.member("a.b", "f", "f")];

    let stmts = unit
        .generate(ExportDialect::Module, &types, &members)
        .unwrap();

    assert_eq!(
        unit.render(&stmts),
        vec!["_ = provide(\"a.b\");", "_.f = f;"]
    );
}

#[test]
fn missing_provide_intrinsic_fails_construction() {
    let mut registry = NameRegistry::new();
    let global_temp = registry.declare("_");
    let bindings = NameBindings::new();
    let empty_intrinsics = IntrinsicIndex::new();

    let err = generate_exports(
        ExportDialect::Global,
        &[],
        &[],
        &bindings,
        global_temp,
        &empty_intrinsics,
    )
    .unwrap_err();

    assert_eq!(
        err,
        ExportError::MissingProvideIntrinsic {
            key: PROVIDE_INTRINSIC
        }
    );
}

#[test]
fn unbound_member_aborts_the_pass() {
    let mut unit = TestUnit::new();
    let members = vec![
        unit.member("a.b", "ok", "ok"),
        unit.unbound_member("a.b", "forgotten"),
    ];

    let err = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap_err();
    assert_eq!(
        err,
        ExportError::UnboundMember {
            export_name: "forgotten".to_string()
        }
    );
}

#[test]
fn each_pass_starts_with_a_fresh_provisioning_memo() {
    let mut unit = TestUnit::new();
    let members = vec![unit.member("a.b", "f", "f")];

    let first = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap();
    let second = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap();

    // The second unit provisions "a.b" again; no memo state leaks across runs.
    assert_eq!(unit.render(&first), unit.render(&second));
    assert_eq!(unit.render(&second)[0], "_ = provide(\"a.b\");");
}

#[test]
fn shared_display_names_publish_distinct_bound_identifiers() {
    let mut unit = TestUnit::new();
    // Two declarations whose display name is "f"; the registry uniquifies.
    let members = vec![unit.member("a.b", "f", "f"), unit.member("a.c", "f", "f")];

    let stmts = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap();

    assert_eq!(
        unit.render(&stmts),
        vec![
            "_ = provide(\"a.b\");",
            "_.f = f;",
            "_ = provide(\"a.c\");",
            "_.f = f_1;",
        ]
    );
}

#[test]
fn namespaces_with_escapable_characters_are_quoted_correctly() {
    let mut unit = TestUnit::new();
    let members = vec![unit.member("a\"b", "f", "f")];

    let stmts = unit
        .generate(ExportDialect::Global, &[], &members)
        .unwrap();
    assert_eq!(unit.render(&stmts)[0], "_ = provide(\"a\\\"b\");");
}
