use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tariffsync_changeset::{ParseError, parse_change_set};
use tariffsync_model::catalog::{
    GOODS_NOMENCLATURE, GOODS_NOMENCLATURE_DESCRIPTION, GOODS_NOMENCLATURE_DESCRIPTION_PERIOD,
    GOODS_NOMENCLATURE_INDENT, MEASURE, MEASUREMENT_UNIT,
};
use tariffsync_model::{ChangeSet, ModelError, Value};

fn parse(xml: &str) -> ChangeSet {
    parse_change_set(xml.as_bytes()).expect("document parses")
}

fn date(y: i32, m: u32, d: u32) -> Value {
    Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

const SNAPSHOT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<export>
  <id>4711</id>
  <exportType>tot</exportType>
  <parameters>
    <queryDateStart>2024-01-15</queryDateStart>
  </parameters>
  <items>
    <measure changeType="U" SID="900" measureType="103" geographicalAreaId="1011"
             SIDGeographicalArea="400" regulationId="R9000000" regulationRoleType="1"
             stoppedFlag="0" dateStart="2024-01-01" dateEnd="" national="0"/>
    <goodsNomenclature changeType="U" SID="1" goodsNomenclatureCode="0101210000"
                       productLineSuffix="80" statisticalIndicator="0"
                       dateStart="2024-01-01" dateEnd="" national="0">
      <goodsNomenclatureDescriptionPeriod SID="10" dateStart="2024-01-01" national="0">
        <goodsNomenclatureDescription languageId="SV" description="Levande h&#228;star" national="0"/>
      </goodsNomenclatureDescriptionPeriod>
      <goodsNomenclatureIndent SID="20" quantityIndents="2" dateStart="2024-01-01" national="0"/>
    </goodsNomenclature>
    <goodsNomenclature changeType="D" SID="2" dateStart="2023-01-01"/>
  </items>
</export>"#;

// ── Header ──────────────────────────────────────────────────────

#[test]
fn header_fields_are_captured() {
    let set = parse(SNAPSHOT);
    assert_eq!(set.header.id.as_deref(), Some("4711"));
    assert_eq!(set.header.export_type.as_deref(), Some("tot"));
    assert_eq!(set.header.query_date_start.as_deref(), Some("2024-01-15"));
}

// ── Collections ─────────────────────────────────────────────────

#[test]
fn collections_follow_catalog_order() {
    let set = parse(SNAPSHOT);
    let kinds: Vec<_> = set.collections.iter().map(|c| c.kind.table).collect();
    assert_eq!(kinds, vec!["goods_nomenclature", "measure"]);
    assert_eq!(set.record_count(), 3);
}

#[test]
fn records_keep_document_order_and_directives() {
    let set = parse(SNAPSHOT);
    let goods = &set.collections[0];
    assert_eq!(goods.kind, &GOODS_NOMENCLATURE);
    let directives: Vec<_> = goods
        .records
        .iter()
        .map(|r| r.change_type.as_deref())
        .collect();
    assert_eq!(directives, vec![Some("U"), Some("D")]);
    assert_eq!(goods.records[1].key, vec![Value::Integer(2)]);
}

#[test]
fn attributes_are_typed() {
    let set = parse(SNAPSHOT);
    let record = &set.collections[0].records[0];
    assert_eq!(record.key, vec![Value::Integer(1)]);
    assert_eq!(
        record.values,
        vec![
            Value::Text("0101210000".into()),
            Value::Text("80".into()),
            Value::Integer(0),
            date(2024, 1, 1),
            Value::Null,
            Value::Integer(0),
        ]
    );
}

#[test]
fn children_nest_under_their_parent() {
    let set = parse(SNAPSHOT);
    let record = &set.collections[0].records[0];
    let tables: Vec<_> = record.children.iter().map(|c| c.kind).collect();
    assert_eq!(
        tables,
        vec![&GOODS_NOMENCLATURE_INDENT, &GOODS_NOMENCLATURE_DESCRIPTION_PERIOD]
    );

    let period = &record.children[1].records[0];
    assert_eq!(period.change_type, None);
    assert_eq!(period.key, vec![Value::Integer(10)]);
    // dateEnd absent entirely
    assert_eq!(period.values[1], Value::Null);

    let description = &period.children[0].records[0];
    assert_eq!(description.kind, &GOODS_NOMENCLATURE_DESCRIPTION);
    assert_eq!(description.values[0], Value::Text("Levande hästar".into()));
}

#[test]
fn record_wrappers_are_transparent() {
    let set = parse(
        r#"<export><items>
            <record><measure changeType="U" SID="1" dateStart="2024-02-01"/></record>
            <record><measure changeType="D" SID="2"/></record>
        </items></export>"#,
    );
    assert_eq!(set.collections.len(), 1);
    assert_eq!(set.collections[0].kind, &MEASURE);
    assert_eq!(set.collections[0].len(), 2);
}

#[test]
fn unknown_elements_are_ignored_with_their_subtree() {
    let set = parse(
        r#"<export><items>
            <quotaBalanceEvent changeType="U" SID="5">
                <measure changeType="U" SID="99"/>
            </quotaBalanceEvent>
            <measure changeType="U" SID="1">
                <futureChild SID="3"/>
                <measureCondition SID="7" conditionCodeId="B" sequenceNumber="1">
                    <unexpected><deeper/></unexpected>
                </measureCondition>
            </measure>
        </items></export>"#,
    );
    assert_eq!(set.record_count(), 1);
    let measure = &set.collections[0].records[0];
    assert_eq!(measure.key, vec![Value::Integer(1)]);
    assert_eq!(measure.children.len(), 1);
    assert_eq!(measure.children[0].records[0].key, vec![Value::Integer(7)]);
}

#[test]
fn element_text_fields_are_read() {
    let set = parse(
        r#"<export><items>
            <measurementUnit changeType="U" measurementUnitCode="KGM" dateStart="2020-01-01">
                <nationalAbbreviation>kg</nationalAbbreviation>
            </measurementUnit>
        </items></export>"#,
    );
    let unit = &set.collections[0].records[0];
    assert_eq!(unit.kind, &MEASUREMENT_UNIT);
    assert_eq!(unit.values[0], Value::Text("kg".into()));
}

#[test]
fn unknown_directive_is_preserved_for_the_engine() {
    let set = parse(r#"<export><items><measure changeType="X" SID="1"/></items></export>"#);
    assert_eq!(set.collections[0].records[0].change_type.as_deref(), Some("X"));
}

#[test]
fn empty_document_yields_empty_change_set() {
    let set = parse(r#"<export><id>1</id><items/></export>"#);
    assert!(set.collections.is_empty());
}

// ── Failures ────────────────────────────────────────────────────

#[test]
fn missing_key_is_rejected() {
    let err = parse_change_set(
        r#"<export><items><measure changeType="U" dateStart="2024-01-01"/></items></export>"#
            .as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ParseError::Record {
            element: "measure",
            source: ModelError::MissingKey { attribute: "SID", .. }
        }
    ));
}

#[test]
fn malformed_date_is_rejected() {
    let err = parse_change_set(
        r#"<export><items><measure changeType="U" SID="1" dateStart="01/02/2024"/></items></export>"#
            .as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::Record { .. }));
}

#[test]
fn truncated_document_is_rejected() {
    let err = parse_change_set(
        r#"<export><items><measure changeType="U" SID="1">"#.as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ParseError::Truncated { element: "measure" } | ParseError::Xml { .. }
    ));
}
