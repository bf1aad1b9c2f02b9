//! End-to-end generation over the shared fixtures.

use sealforge_core::model::{DeclarationKind, Modifier, Supertype, TypeRef};
use sealforge_core::{
    CollectingEmitter, DeclarationSource, DeclarationStatus, GenerationError, Generator,
    GeneratorConfig, WorkerCount,
};
use sealforge_test::{open_class, page_with_list, payment_result, ui_state};

fn generator() -> Generator {
    Generator::new(GeneratorConfig::default().with_worker_count(WorkerCount::None))
}

#[test]
fn test_fixture_source_round_trip() {
    let source = vec![ui_state(), payment_result()];
    let declarations = source.list_hierarchy_declarations().unwrap();
    assert_eq!(declarations, source);
}

#[test]
fn test_trigger_annotation_is_dropped_and_others_kept() {
    let mut emitter = CollectingEmitter::new();
    generator().run(&[payment_result()], &mut emitter);

    let card = &emitter.hierarchies[0];
    assert_eq!(card.name.as_str(), "com.example.pay.CardPaymentResult");
    assert_eq!(card.kind, DeclarationKind::Class);
    assert_eq!(card.modifiers, vec![Modifier::Sealed, Modifier::Internal]);
    let annotations: Vec<_> = card
        .annotations
        .iter()
        .map(|a| a.annotation.as_str())
        .collect();
    assert_eq!(annotations, vec!["kotlinx.serialization.Serializable"]);
}

#[test]
fn test_parameter_details_survive_substitution() {
    let mut emitter = CollectingEmitter::new();
    generator().run(&[payment_result()], &mut emitter);

    let card = &emitter.hierarchies[0];
    let accepted = &card.variants[0].declaration;
    assert_eq!(accepted.parameters[0].ty, TypeRef::concrete("com.example.pay.Card"));
    assert!(accepted.parameters[1].mutable);

    let declined = &card.variants[1].declaration;
    assert_eq!(declined.parameters[0].name, None);
    assert_eq!(declined.parameters[0].display_name(0), "param0");
    assert_eq!(declined.parameters[0].annotations.len(), 1);
    assert_eq!(declined.parameters[1].ty.to_string(), "kotlin.String?");

    assert!(card
        .variants
        .iter()
        .all(|v| v.supertype == Supertype::Extends(card.name.clone())));

    let directives: Vec<_> = emitter.all_directives().collect();
    assert_eq!(
        directives[0].parameter_types,
        vec!["com.example.pay.Card", "kotlin.Int"]
    );
    assert_eq!(
        directives[1].parameter_types,
        vec!["com.example.pay.Card", "kotlin.String"]
    );
    assert_eq!(directives[2].target, "com.example.pay.CardPaymentResult$Pending");
}

#[test]
fn test_mixed_batch_reports_each_declaration() {
    let declarations = vec![open_class(), page_with_list(), ui_state(), payment_result()];
    let mut emitter = CollectingEmitter::new();
    let report = Generator::default().run(&declarations, &mut emitter);

    assert_eq!(report.entries.len(), 4);
    assert_eq!(report.failed_count(), 2);
    assert_eq!(report.generated_count(), 2);
    assert_eq!(report.hierarchy_count(), 3);
    assert_eq!(emitter.errors().count(), 2);

    assert!(matches!(
        report.entry("com.example.Plain").unwrap().status,
        DeclarationStatus::Failed(GenerationError::NotClosedHierarchy { .. })
    ));
    assert!(matches!(
        report.entry("com.example.Page").unwrap().status,
        DeclarationStatus::Failed(GenerationError::NestedPlaceholderUsage { .. })
    ));
    match &report.entry("com.example.UIState").unwrap().status {
        DeclarationStatus::Generated {
            hierarchies,
            directives,
            emit_failures,
        } => {
            let names: Vec<_> = hierarchies.iter().map(|n| n.simple_name()).collect();
            assert_eq!(names, vec!["StringUIState", "IntUIState"]);
            assert_eq!(*directives, 6);
            assert_eq!(*emit_failures, 0);
        }
        other => panic!("unexpected status: {other:?}"),
    }
}
