//! Test fixtures

use callgraph_verifier::features::ssa::{MethodIr, SsaInstruction};
use callgraph_verifier::features::type_universe::{ClassKind, TypeUniverse};
use callgraph_verifier::shared::models::{LanguageTag, PRIMORDIAL_LOADER, SOURCE_LOADER};

/// Source + Primordial loaders with a handful of classes
///
/// - `A.m()V`, `A.main([Ljava/lang/String;)V`
/// - `B.n()V`, `B.unused()V`, abstract `B.k()V`
/// - `C.p(I)V`
/// - `pkg/Foo.bar()V`
/// - interface `I.run()V`
/// - `ssa/SSA1.start(III)V`, `ssa/SSA1.id(I)V`
pub fn java_universe() -> TypeUniverse {
    let mut u = TypeUniverse::new();
    u.register_loader(SOURCE_LOADER, LanguageTag::Java).unwrap();
    u.register_loader(PRIMORDIAL_LOADER, LanguageTag::Java).unwrap();

    let classes: &[(&str, ClassKind, &[(&str, &str, bool)])] = &[
        (
            "A",
            ClassKind::Class,
            &[("main", "([Ljava/lang/String;)V", false), ("m", "()V", false)],
        ),
        (
            "B",
            ClassKind::Class,
            &[("n", "()V", false), ("unused", "()V", false), ("k", "()V", true)],
        ),
        ("C", ClassKind::Class, &[("p", "(I)V", false)]),
        ("pkg/Foo", ClassKind::Class, &[("bar", "()V", false)]),
        ("I", ClassKind::Interface, &[("run", "()V", false)]),
        (
            "ssa/SSA1",
            ClassKind::Class,
            &[("start", "(III)V", false), ("id", "(I)V", false)],
        ),
    ];
    for (class, kind, methods) in classes {
        u.declare_class(SOURCE_LOADER, class, *kind).unwrap();
        for (name, sig, is_abstract) in *methods {
            u.declare_method(SOURCE_LOADER, class, name, sig, *is_abstract)
                .unwrap();
        }
    }

    u.declare_class(PRIMORDIAL_LOADER, "java/lang/Object", ClassKind::Class)
        .unwrap();
    u.declare_method(PRIMORDIAL_LOADER, "java/lang/Object", "<init>", "()V", false)
        .unwrap();
    u
}

/// `C.p(I)V`: line 10 defines v7 named `max`
pub fn max_binding_ir() -> MethodIr {
    MethodIr::builder()
        .instruction(SsaInstruction::new(0, "const").def(5u32))
        .line(0, 9)
        .instruction(SsaInstruction::new(2, "binaryop").def(7u32).uses([1, 5]))
        .line(2, 10)
        .local_names(2, 7, ["max"])
        .instruction(SsaInstruction::new(3, "return"))
        .line(3, 11)
        .build()
        .unwrap()
}

/// `SSA1.start(III)V` after SSA construction
///
/// The four assignments to `max` are copies folded away; only the phi at the
/// join (line 22, the `id(max)` call) defines a value carrying the name.
pub fn ssa1_start_ir() -> MethodIr {
    MethodIr::builder()
        .instruction(SsaInstruction::new(1, "conditional_branch").uses([1, 2]))
        .line(1, 8)
        .instruction(SsaInstruction::new(2, "conditional_branch").uses([1, 3]))
        .line(2, 9)
        .instruction(SsaInstruction::new(4, "goto"))
        .line(4, 10)
        .instruction(SsaInstruction::new(6, "conditional_branch").uses([2, 3]))
        .line(6, 15)
        .instruction(SsaInstruction::new(8, "goto"))
        .line(8, 16)
        .instruction(SsaInstruction::new(10, "phi").def(6u32).uses([1, 3]))
        .line(10, 22)
        .local_names(10, 6, ["max"])
        .instruction(SsaInstruction::new(11, "phi").def(7u32).uses([2, 3]))
        .line(11, 22)
        .local_names(11, 7, ["max"])
        .instruction(SsaInstruction::new(12, "phi").def(8u32).uses([6, 7]))
        .line(12, 22)
        .local_names(12, 8, ["max"])
        .instruction(SsaInstruction::new(13, "invokestatic").uses([8]))
        .line(13, 22)
        .instruction(SsaInstruction::new(14, "return"))
        .line(14, 23)
        .build()
        .unwrap()
}
