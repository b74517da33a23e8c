use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tariffsync_model::catalog::{
    GOODS_NOMENCLATURE, GOODS_NOMENCLATURE_DESCRIPTION, GOODS_NOMENCLATURE_DESCRIPTION_PERIOD,
    GOODS_NOMENCLATURE_INDENT,
};
use tariffsync_model::{ChangeDirective, EntityKind, EntityRecord, ModelError, Value};

fn make_record(kind: &'static EntityKind, change_type: Option<&str>, key: Vec<Value>) -> EntityRecord {
    let values = kind.attributes.iter().map(|_| Value::Null).collect();
    EntityRecord {
        kind,
        change_type: change_type.map(str::to_string),
        key,
        values,
        children: Vec::new(),
    }
}

// ── Directives ──────────────────────────────────────────────────

#[test]
fn wire_directives_parse() {
    assert_eq!(ChangeDirective::from_wire("U").unwrap(), ChangeDirective::Upsert);
    assert_eq!(ChangeDirective::from_wire("D").unwrap(), ChangeDirective::Delete);
    assert_eq!(
        ChangeDirective::from_wire("X"),
        Err(ModelError::UnknownDirective {
            directive: "X".into()
        })
    );
}

#[test]
fn child_without_directive_inherits() {
    let child = make_record(&GOODS_NOMENCLATURE_INDENT, None, vec![Value::Integer(7)]);
    assert_eq!(
        child.directive(Some(ChangeDirective::Upsert)).unwrap(),
        ChangeDirective::Upsert
    );
    assert_eq!(child.directive(None), Err(ModelError::MissingDirective));
}

#[test]
fn explicit_child_directive_is_validated() {
    let child = make_record(&GOODS_NOMENCLATURE_INDENT, Some("Z"), vec![Value::Integer(7)]);
    assert!(child.directive(Some(ChangeDirective::Upsert)).is_err());
}

// ── Keys and rows ───────────────────────────────────────────────

#[test]
fn keyed_child_natural_key_is_prefixed_by_parent() {
    let child = make_record(
        &GOODS_NOMENCLATURE_DESCRIPTION,
        None,
        vec![Value::Text("SV".into())],
    );
    assert_eq!(
        child.natural_key(&[Value::Integer(42)]),
        vec![Value::Integer(42), Value::Text("SV".into())]
    );
}

#[test]
fn owned_child_natural_key_ignores_parent() {
    let child = make_record(&GOODS_NOMENCLATURE_INDENT, None, vec![Value::Integer(9)]);
    assert_eq!(child.natural_key(&[Value::Integer(42)]), vec![Value::Integer(9)]);
}

#[test]
fn row_aligns_with_columns() {
    let mut root = make_record(&GOODS_NOMENCLATURE, Some("U"), vec![Value::Integer(1)]);
    root.values[0] = Value::Text("0101210000".into());
    root.values[3] = Value::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let row = root.row(&[]);
    assert_eq!(row.len(), GOODS_NOMENCLATURE.columns().len());
    assert_eq!(row[0], Value::Integer(1));
    assert_eq!(row[1], Value::Text("0101210000".into()));

    let child = make_record(&GOODS_NOMENCLATURE_INDENT, None, vec![Value::Integer(5)]);
    let row = child.row(&[Value::Integer(1)]);
    assert_eq!(row.len(), GOODS_NOMENCLATURE_INDENT.columns().len());
    assert_eq!(&row[..2], &[Value::Integer(1), Value::Integer(5)]);
}

#[test]
fn children_are_grouped_in_declaration_order() {
    let mut root = make_record(&GOODS_NOMENCLATURE, Some("U"), vec![Value::Integer(1)]);
    root.push_child(make_record(
        &GOODS_NOMENCLATURE_DESCRIPTION_PERIOD,
        None,
        vec![Value::Integer(10)],
    ));
    root.push_child(make_record(&GOODS_NOMENCLATURE_INDENT, None, vec![Value::Integer(20)]));
    root.push_child(make_record(
        &GOODS_NOMENCLATURE_DESCRIPTION_PERIOD,
        None,
        vec![Value::Integer(11)],
    ));

    let tables: Vec<_> = root.children.iter().map(|c| c.kind.table).collect();
    assert_eq!(
        tables,
        vec!["goods_nomenclature_indent", "goods_nomenclature_description_period"]
    );
    assert_eq!(root.children[1].len(), 2);
}

#[test]
fn describe_key_names_attributes() {
    let record = make_record(&GOODS_NOMENCLATURE, Some("U"), vec![Value::Integer(77)]);
    assert_eq!(record.describe_key(), "SID=77");
}
