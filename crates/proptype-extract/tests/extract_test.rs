//! Extraction tests: declaration matching, element reduction, remapping,
//! ordering, and fatal parse failures.

use proptype_core::errors::{ExtractError, ProptypeErrorCode};
use proptype_core::ModifierCategory;
use proptype_extract::extract_categorized_literals;

fn fixture() -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/Modifiers.java");
    std::fs::read_to_string(&path).unwrap()
}

fn names(table: &proptype_extract::CategorizedLiterals, category: ModifierCategory) -> Vec<&str> {
    table.get(category).iter().map(String::as_str).collect()
}

#[test]
fn fixture_categories_in_source_order() {
    let table = extract_categorized_literals(&fixture()).unwrap();

    assert_eq!(
        names(&table, ModifierCategory::Numeric),
        vec![
            "Familiar Weight",
            "Monster Level",
            "Combat Rate",
            "Initiative",
            "Item Drop",
            "Meat Drop",
            "HP Regen Min",
            "Item Drop",
        ]
    );
    assert_eq!(
        names(&table, ModifierCategory::Boolean),
        vec!["Softcore Only", "Single Equip", "Never Fumble", "Four Songs"]
    );
    assert_eq!(
        names(&table, ModifierCategory::String),
        vec!["Intrinsic Effect", "Equalize", "Wiki Name"]
    );
}

#[test]
fn remapped_literals_leave_their_declaring_array() {
    let table = extract_categorized_literals(&fixture()).unwrap();

    assert_eq!(names(&table, ModifierCategory::Class), vec!["Class", "Class"]);
    assert_eq!(
        names(&table, ModifierCategory::Effect),
        vec!["Rollover Effect", "Effect", "Rollover Effect"]
    );
    assert_eq!(names(&table, ModifierCategory::Stat), vec!["Plumber Stat"]);
    assert_eq!(names(&table, ModifierCategory::Skill), vec!["Skill"]);
    assert_eq!(names(&table, ModifierCategory::Monster), vec!["Avatar"]);
}

#[test]
fn rollover_effect_declared_in_class_array_is_an_effect() {
    let source = r#"
        class M {
            static final Object[][] classModifiers = {
                {"Rollover Effect", null},
            };
        }
    "#;
    let table = extract_categorized_literals(source).unwrap();
    assert!(table.get(ModifierCategory::Class).is_empty());
    assert_eq!(names(&table, ModifierCategory::Effect), vec!["Rollover Effect"]);
    assert_eq!(table.category_of("Rollover Effect"), Some(ModifierCategory::Effect));
}

#[test]
fn unmatched_declarations_are_ignored() {
    let table = extract_categorized_literals(&fixture()).unwrap();
    for name in ["Brimstone", "Cloathing", "Synergetic"] {
        assert_eq!(table.category_of(name), None, "{name} should not be extracted");
    }
    // itemModifiers declares "Item Drop" again; only the two numeric entries count.
    assert_eq!(table.total(), 8 + 4 + 2 + 3 + 3 + 1 + 1 + 1);
}

#[test]
fn non_literal_elements_are_skipped() {
    let table = extract_categorized_literals(&fixture()).unwrap();
    // Identifier, concatenation, and parenthesised literal are not evaluated.
    assert_eq!(table.category_of("Adventures"), None);
    assert_eq!(table.category_of("Stat Tuning"), None);
    assert!(table
        .get(ModifierCategory::Numeric)
        .iter()
        .all(|n| !n.contains("[-+]")));
}

#[test]
fn bare_string_elements_are_accepted() {
    let source = r#"
        class M {
            static final String[] booleanModifiers = { "Free Pull", /* legacy */ "Nonstackable Watch" };
        }
    "#;
    let table = extract_categorized_literals(source).unwrap();
    assert_eq!(
        names(&table, ModifierCategory::Boolean),
        vec!["Free Pull", "Nonstackable Watch"]
    );
}

#[test]
fn non_array_initializers_are_skipped() {
    let source = r#"
        class M {
            static final Object[][] doubleModifiers = new Object[][] { {"Item Drop"} };
            static Object[][] skillModifiers;
            static final Object[][] effectModifiers = { {"Effect Duration"} };
        }
    "#;
    let table = extract_categorized_literals(source).unwrap();
    assert!(table.get(ModifierCategory::Numeric).is_empty());
    assert!(table.get(ModifierCategory::Skill).is_empty());
    assert_eq!(names(&table, ModifierCategory::Effect), vec!["Effect Duration"]);
}

#[test]
fn nested_row_must_lead_with_a_literal() {
    let source = r#"
        class M {
            static final Object[][] stringModifiers = {
                {null, "Late Name"},
                {},
                {"Wiki Name", null},
            };
        }
    "#;
    let table = extract_categorized_literals(source).unwrap();
    assert_eq!(names(&table, ModifierCategory::String), vec!["Wiki Name"]);
}

#[test]
fn escapes_are_kept_verbatim() {
    let source = r#"
        class M {
            static final String[] stringModifiers = { "Say \"hi\"" };
        }
    "#;
    let table = extract_categorized_literals(source).unwrap();
    assert_eq!(names(&table, ModifierCategory::String), vec![r#"Say \"hi\""#]);
}

#[test]
fn source_without_declarations_yields_empty_table() {
    let table = extract_categorized_literals("class Empty {}").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.iter().count(), 0);
    assert_eq!(table.counts().len(), ModifierCategory::ALL.len());
}

#[test]
fn syntax_error_aborts_extraction() {
    let broken = "class M { static final Object[][] booleanModifiers = { {\"Softcore Only\" ; }";
    let err = extract_categorized_literals(broken).unwrap_err();
    assert!(matches!(err, ExtractError::Parse { .. }), "got {err:?}");
    assert_eq!(err.error_code(), "PARSE_FAILED");
}

#[test]
fn extraction_is_deterministic() {
    let source = fixture();
    let first = extract_categorized_literals(&source).unwrap();
    let second = extract_categorized_literals(&source).unwrap();
    assert_eq!(first, second);
}
