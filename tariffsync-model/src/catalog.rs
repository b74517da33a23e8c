//! The tariff entity catalog.
//!
//! One static [`EntityKind`] per table. Root kinds are listed in [`CATALOG`] in
//! the order collections are applied: reference data first, then the kinds
//! that point at it.

use crate::kind::{DeletePolicy, EntityKind, ParentLink};
use crate::value::Field;

// ── Shared fields ───────────────────────────────────────────────

const SID: Field = Field::integer("SID", "sid");
const DATE_START: Field = Field::date("dateStart", "date_start");
const DATE_END: Field = Field::date("dateEnd", "date_end");
const NATIONAL: Field = Field::integer("national", "national");
const DESCRIPTION: Field = Field::text("description", "description");
const LANGUAGE_ID: Field = Field::text("languageId", "language_id");
const FOOTNOTE_ID: Field = Field::text("footnoteId", "footnote_id");
const FOOTNOTE_TYPE: Field = Field::text("footnoteType", "footnote_type");
const DUTY_EXPRESSION_ID: Field = Field::text("dutyExpressionId", "duty_expression_id");
const DUTY_AMOUNT: Field = Field::real("dutyAmount", "duty_amount");
const MEASUREMENT_UNIT_CODE: Field = Field::text("measurementUnitCode", "measurement_unit_code");
const MEASUREMENT_UNIT_QUALIFIER_CODE: Field =
    Field::text("measurementUnitQualifierCode", "measurement_unit_qualifier_code");
const MONETARY_UNIT_CODE: Field = Field::text("monetaryUnitCode", "monetary_unit_code");
const MEURSING_TABLE_PLAN_ID: Field = Field::integer("meursingTablePlanId", "meursing_table_plan_id");
const HEADING_NUMBER: Field = Field::integer("headingNumber", "heading_number");
const ROW_COLUMN_CODE: Field = Field::integer("rowColumnCode", "row_column_code");
const SUBHEADING_SEQUENCE_NUMBER: Field =
    Field::integer("subheadingSequenceNumber", "subheading_sequence_number");
const GOODS_NOMENCLATURE_CODE: Field = Field::text("goodsNomenclatureCode", "goods_nomenclature_code");
const PRODUCT_LINE_SUFFIX: Field = Field::text("productLineSuffix", "product_line_suffix");
const DATE_PUBLISHED: Field = Field::date("datePublished", "date_published");
const EFFECTIVE_END_DATE: Field = Field::date("effectiveEndDate", "effective_end_date");
const JOURNAL_PAGE: Field = Field::integer("journalPage", "journal_page");
const OFFICIAL_JOURNAL_ID: Field = Field::text("officialJournalId", "official_journal_id");
const REGULATION_APPROVED_FLAG: Field = Field::integer("regulationApprovedFlag", "regulation_approved_flag");
const REPLACEMENT_INDICATOR: Field = Field::integer("replacementIndicator", "replacement_indicator");
const STOPPED_FLAG: Field = Field::integer("stoppedFlag", "stopped_flag");

const VALIDITY: &[Field] = &[DATE_START, DATE_END, NATIONAL];
const DESCRIBED: &[Field] = &[DESCRIPTION, NATIONAL];
const FOOTNOTE_KEY: &[Field] = &[FOOTNOTE_ID, FOOTNOTE_TYPE];

const fn owned_by(columns: &'static [&'static str]) -> Option<ParentLink> {
    Some(ParentLink {
        columns,
        part_of_key: false,
        on_delete: DeletePolicy::Cascade,
    })
}

const fn keyed_by(columns: &'static [&'static str]) -> Option<ParentLink> {
    Some(ParentLink {
        columns,
        part_of_key: true,
        on_delete: DeletePolicy::Cascade,
    })
}

const BY_SID: &[&str] = &["parent_sid"];

/// Builds a `<languageId, description>` child keyed by its parent.
macro_rules! description_kind {
    ($name:ident, $table:literal, $element:literal, $parent:expr) => {
        pub static $name: EntityKind = EntityKind {
            table: $table,
            element: $element,
            key: &[LANGUAGE_ID],
            attributes: DESCRIBED,
            parent: keyed_by($parent),
            children: &[],
        };
    };
}

/// Builds a `<footnoteId, footnoteType>` association keyed by its parent.
macro_rules! footnote_association_kind {
    ($name:ident, $table:literal, $element:literal, $parent:expr, $attributes:expr) => {
        pub static $name: EntityKind = EntityKind {
            table: $table,
            element: $element,
            key: FOOTNOTE_KEY,
            attributes: $attributes,
            parent: keyed_by($parent),
            children: &[],
        };
    };
}

// ── Additional codes ────────────────────────────────────────────

pub static ADDITIONAL_CODE: EntityKind = EntityKind {
    table: "additional_code",
    element: "additionalCode",
    key: &[SID],
    attributes: &[
        Field::text("additionalCodeId", "additional_code_id"),
        Field::text("additionalCodeType", "additional_code_type"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[
        &ADDITIONAL_CODE_DESCRIPTION_PERIOD,
        &ADDITIONAL_CODE_FOOTNOTE_ASSOCIATION,
    ],
};

pub static ADDITIONAL_CODE_DESCRIPTION_PERIOD: EntityKind = EntityKind {
    table: "additional_code_description_period",
    element: "additionalCodeDescriptionPeriod",
    key: &[SID],
    attributes: VALIDITY,
    parent: owned_by(BY_SID),
    children: &[&ADDITIONAL_CODE_DESCRIPTION],
};

description_kind!(
    ADDITIONAL_CODE_DESCRIPTION,
    "additional_code_description",
    "additionalCodeDescription",
    BY_SID
);

footnote_association_kind!(
    ADDITIONAL_CODE_FOOTNOTE_ASSOCIATION,
    "additional_code_footnote_association",
    "additionalCodeFootnoteAssociation",
    BY_SID,
    VALIDITY
);

// ── Certificates ────────────────────────────────────────────────

pub static CERTIFICATE: EntityKind = EntityKind {
    table: "certificate",
    element: "certificate",
    key: &[
        Field::text("certificateCode", "certificate_code"),
        Field::text("certificateType", "certificate_type"),
    ],
    attributes: VALIDITY,
    parent: None,
    children: &[&CERTIFICATE_DESCRIPTION_PERIOD],
};

pub static CERTIFICATE_DESCRIPTION_PERIOD: EntityKind = EntityKind {
    table: "certificate_description_period",
    element: "certificateDescriptionPeriod",
    key: &[SID],
    attributes: VALIDITY,
    parent: owned_by(&["parent_certificate_code", "parent_certificate_type"]),
    children: &[&CERTIFICATE_DESCRIPTION],
};

description_kind!(
    CERTIFICATE_DESCRIPTION,
    "certificate_description",
    "certificateDescription",
    BY_SID
);

// ── Code types ──────────────────────────────────────────────────

pub static CODE_TYPE: EntityKind = EntityKind {
    table: "code_type",
    element: "codeType",
    key: &[Field::text("id", "id")],
    attributes: &[
        Field::text("codeTypeId", "code_type_id"),
        Field::text("exportImportType", "export_import_type"),
        Field::text("measureTypeSeriesId", "measure_type_series_id"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&CODE_TYPE_DESCRIPTION],
};

description_kind!(
    CODE_TYPE_DESCRIPTION,
    "code_type_description",
    "codeTypeDescription",
    &["parent_id"]
);

// ── Goods nomenclature ──────────────────────────────────────────

pub static DECLARABLE_GOODS_NOMENCLATURE: EntityKind = EntityKind {
    table: "declarable_goods_nomenclature",
    element: "declarableGoodsNomenclature",
    key: &[GOODS_NOMENCLATURE_CODE],
    attributes: &[Field::text("type", "nomenclature_type"), DATE_START, DATE_END],
    parent: None,
    children: &[],
};

pub static GOODS_NOMENCLATURE: EntityKind = EntityKind {
    table: "goods_nomenclature",
    element: "goodsNomenclature",
    key: &[SID],
    attributes: &[
        GOODS_NOMENCLATURE_CODE,
        PRODUCT_LINE_SUFFIX,
        Field::integer("statisticalIndicator", "statistical_indicator"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[
        &GOODS_NOMENCLATURE_INDENT,
        &GOODS_NOMENCLATURE_DESCRIPTION_PERIOD,
        &GOODS_NOMENCLATURE_FOOTNOTE_ASSOCIATION,
        &GOODS_NOMENCLATURE_GROUP_MEMBERSHIP,
    ],
};

pub static GOODS_NOMENCLATURE_INDENT: EntityKind = EntityKind {
    table: "goods_nomenclature_indent",
    element: "goodsNomenclatureIndent",
    key: &[SID],
    attributes: &[
        Field::integer("quantityIndents", "quantity_indents"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: owned_by(BY_SID),
    children: &[],
};

pub static GOODS_NOMENCLATURE_DESCRIPTION_PERIOD: EntityKind = EntityKind {
    table: "goods_nomenclature_description_period",
    element: "goodsNomenclatureDescriptionPeriod",
    key: &[SID],
    attributes: VALIDITY,
    parent: owned_by(BY_SID),
    children: &[&GOODS_NOMENCLATURE_DESCRIPTION],
};

description_kind!(
    GOODS_NOMENCLATURE_DESCRIPTION,
    "goods_nomenclature_description",
    "goodsNomenclatureDescription",
    BY_SID
);

footnote_association_kind!(
    GOODS_NOMENCLATURE_FOOTNOTE_ASSOCIATION,
    "goods_nomenclature_footnote_association",
    "goodsNomenclatureFootnoteAssociation",
    BY_SID,
    VALIDITY
);

pub static GOODS_NOMENCLATURE_GROUP_MEMBERSHIP: EntityKind = EntityKind {
    table: "goods_nomenclature_group_membership",
    element: "goodsNomenclatureGroupMembership",
    key: &[
        Field::text("goodsNomenclatureGroupId", "goods_nomenclature_group_id"),
        Field::text("goodsNomenclatureGroupType", "goods_nomenclature_group_type"),
    ],
    attributes: VALIDITY,
    parent: keyed_by(BY_SID),
    children: &[],
};

pub static GOODS_NOMENCLATURE_GROUP: EntityKind = EntityKind {
    table: "goods_nomenclature_group",
    element: "goodsNomenclatureGroup",
    key: &[
        Field::text("goodsNomenclatureGroupId", "goods_nomenclature_group_id"),
        Field::text("goodsNomenclatureGroupType", "goods_nomenclature_group_type"),
    ],
    attributes: &[
        Field::integer("nomenclatureGroupFacilityCode", "nomenclature_group_facility_code"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&GOODS_NOMENCLATURE_GROUP_DESCRIPTION],
};

description_kind!(
    GOODS_NOMENCLATURE_GROUP_DESCRIPTION,
    "goods_nomenclature_group_description",
    "goodsNomenclatureGroupDescription",
    &["parent_group_id", "parent_group_type"]
);

// ── Duty expressions ────────────────────────────────────────────

pub static DUTY_EXPRESSION: EntityKind = EntityKind {
    table: "duty_expression",
    element: "dutyExpression",
    key: &[DUTY_EXPRESSION_ID],
    attributes: &[
        Field::integer("dutyAmountApplicabilityCode", "duty_amount_applicability_code"),
        Field::integer(
            "measurementUnitApplicabilityCode",
            "measurement_unit_applicability_code",
        ),
        Field::integer(
            "monetaryUnitApplicabilityCode",
            "monetary_unit_applicability_code",
        ),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&DUTY_EXPRESSION_DESCRIPTION],
};

description_kind!(
    DUTY_EXPRESSION_DESCRIPTION,
    "duty_expression_description",
    "dutyExpressionDescription",
    &["parent_duty_expression_id"]
);

// ── Export refund nomenclature ──────────────────────────────────

pub static EXPORT_REFUND_NOMENCLATURE: EntityKind = EntityKind {
    table: "export_refund_nomenclature",
    element: "exportRefundNomenclature",
    key: &[SID],
    attributes: &[
        Field::text("additionalCodeType", "additional_code_type"),
        Field::text("exportRefundCode", "export_refund_code"),
        GOODS_NOMENCLATURE_CODE,
        PRODUCT_LINE_SUFFIX,
        Field::integer("SIDGoodsNomenclature", "sid_goods_nomenclature"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[
        &EXPORT_REFUND_NOMENCLATURE_INDENT,
        &EXPORT_REFUND_NOMENCLATURE_DESCRIPTION_PERIOD,
        &EXPORT_REFUND_NOMENCLATURE_FOOTNOTE_ASSOCIATION,
    ],
};

pub static EXPORT_REFUND_NOMENCLATURE_INDENT: EntityKind = EntityKind {
    table: "export_refund_nomenclature_indent",
    element: "exportRefundNomenclatureIndent",
    key: &[SID],
    attributes: &[
        Field::integer("quantityIndents", "quantity_indents"),
        DATE_START,
        NATIONAL,
    ],
    parent: owned_by(BY_SID),
    children: &[],
};

pub static EXPORT_REFUND_NOMENCLATURE_DESCRIPTION_PERIOD: EntityKind = EntityKind {
    table: "export_refund_nomenclature_description_period",
    element: "exportRefundNomenclatureDescriptionPeriod",
    key: &[SID],
    attributes: &[DATE_START, NATIONAL],
    parent: owned_by(BY_SID),
    children: &[&EXPORT_REFUND_NOMENCLATURE_DESCRIPTION],
};

description_kind!(
    EXPORT_REFUND_NOMENCLATURE_DESCRIPTION,
    "export_refund_nomenclature_description",
    "exportRefundNomenclatureDescription",
    BY_SID
);

footnote_association_kind!(
    EXPORT_REFUND_NOMENCLATURE_FOOTNOTE_ASSOCIATION,
    "export_refund_nomenclature_footnote_association",
    "exportRefundNomenclatureFootnoteAssociation",
    BY_SID,
    VALIDITY
);

// ── Footnotes ───────────────────────────────────────────────────

pub static FOOTNOTE: EntityKind = EntityKind {
    table: "footnote",
    element: "footnote",
    key: FOOTNOTE_KEY,
    attributes: VALIDITY,
    parent: None,
    children: &[&FOOTNOTE_DESCRIPTION_PERIOD],
};

pub static FOOTNOTE_DESCRIPTION_PERIOD: EntityKind = EntityKind {
    table: "footnote_description_period",
    element: "footnoteDescriptionPeriod",
    key: &[SID],
    attributes: VALIDITY,
    parent: owned_by(&["parent_footnote_id", "parent_footnote_type"]),
    children: &[&FOOTNOTE_DESCRIPTION],
};

description_kind!(
    FOOTNOTE_DESCRIPTION,
    "footnote_description",
    "footnoteDescription",
    BY_SID
);

// ── Geographical areas ──────────────────────────────────────────

pub static GEOGRAPHICAL_AREA: EntityKind = EntityKind {
    table: "geographical_area",
    element: "geographicalArea",
    key: &[SID],
    attributes: &[
        Field::integer("SIDParentGroup", "sid_parent_group"),
        Field::integer("geographicalAreaCode", "geographical_area_code"),
        Field::text("geographicalAreaId", "geographical_area_id"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[
        &GEOGRAPHICAL_AREA_MEMBERSHIP,
        &GEOGRAPHICAL_AREA_DESCRIPTION_PERIOD,
    ],
};

pub static GEOGRAPHICAL_AREA_MEMBERSHIP: EntityKind = EntityKind {
    table: "geographical_area_membership",
    element: "geographicalAreaMembership",
    key: &[
        Field::integer("SIDGeographicalAreaGroup", "sid_geographical_area_group"),
        DATE_START,
    ],
    attributes: &[DATE_END, NATIONAL],
    parent: keyed_by(BY_SID),
    children: &[],
};

pub static GEOGRAPHICAL_AREA_DESCRIPTION_PERIOD: EntityKind = EntityKind {
    table: "geographical_area_description_period",
    element: "geographicalAreaDescriptionPeriod",
    key: &[SID],
    attributes: VALIDITY,
    parent: owned_by(BY_SID),
    children: &[&GEOGRAPHICAL_AREA_DESCRIPTION],
};

description_kind!(
    GEOGRAPHICAL_AREA_DESCRIPTION,
    "geographical_area_description",
    "geographicalAreaDescription",
    BY_SID
);

// ── Lookup tables ───────────────────────────────────────────────

pub static LOOKUP_TABLE: EntityKind = EntityKind {
    table: "lookup_table",
    element: "lookupTable",
    key: &[SID],
    attributes: &[
        Field::text("tableId", "table_id"),
        Field::boolean("interpolate", "interpolate"),
        Field::integer("minInterval", "min_interval"),
        Field::integer("maxInterval", "max_interval"),
        DATE_START,
    ],
    parent: None,
    children: &[&LOOKUP_TABLE_ITEM, &LOOKUP_TABLE_DESCRIPTION],
};

pub static LOOKUP_TABLE_ITEM: EntityKind = EntityKind {
    table: "lookup_table_item",
    element: "lookupTableItem",
    key: &[
        Field::real("threshold", "threshold"),
        Field::real("value", "value"),
    ],
    attributes: &[],
    parent: keyed_by(BY_SID),
    children: &[],
};

description_kind!(
    LOOKUP_TABLE_DESCRIPTION,
    "lookup_table_description",
    "lookupTableDescription",
    BY_SID
);

// ── Measures ────────────────────────────────────────────────────

pub static MEASURE: EntityKind = EntityKind {
    table: "measure",
    element: "measure",
    key: &[SID],
    attributes: &[
        Field::integer("SIDAdditionalCode", "sid_additional_code"),
        Field::integer("SIDExportRefundNomenclature", "sid_export_refund_nomenclature"),
        Field::integer("SIDGeographicalArea", "sid_geographical_area"),
        Field::integer("SIDGoodsNomenclature", "sid_goods_nomenclature"),
        Field::text("additionalCodeId", "additional_code_id"),
        Field::text("additionalCodeType", "additional_code_type"),
        Field::text("expression", "expression"),
        Field::text("geographicalAreaId", "geographical_area_id"),
        GOODS_NOMENCLATURE_CODE,
        Field::text("justificationRegulationId", "justification_regulation_id"),
        Field::integer(
            "justificationRegulationRoleType",
            "justification_regulation_role_type",
        ),
        Field::text("measureType", "measure_type"),
        Field::text("quotaOrderNumber", "quota_order_number"),
        Field::integer("reductionIndicator", "reduction_indicator"),
        Field::text("regulationId", "regulation_id"),
        Field::integer("regulationRoleType", "regulation_role_type"),
        STOPPED_FLAG,
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[
        &MEASURE_CONDITION,
        &MEASURE_FOOTNOTE_ASSOCIATION,
        &MEASURE_COMPONENT,
        &MEASURE_EXCLUDED_GEOGRAPHICAL_AREA,
        &MEASURE_PARTIAL_TEMPORARY_STOP,
    ],
};

const DUTY_COMPONENT_ATTRIBUTES: &[Field] = &[
    DUTY_AMOUNT,
    MEASUREMENT_UNIT_CODE,
    MEASUREMENT_UNIT_QUALIFIER_CODE,
    MONETARY_UNIT_CODE,
    NATIONAL,
];

pub static MEASURE_CONDITION: EntityKind = EntityKind {
    table: "measure_condition",
    element: "measureCondition",
    key: &[SID],
    attributes: &[
        Field::text("conditionCodeId", "condition_code_id"),
        Field::integer("sequenceNumber", "sequence_number"),
        Field::text("actionCode", "action_code"),
        Field::text("certificateCode", "certificate_code"),
        Field::text("certificateType", "certificate_type"),
        DUTY_AMOUNT,
        Field::text("expression", "expression"),
        MEASUREMENT_UNIT_CODE,
        MEASUREMENT_UNIT_QUALIFIER_CODE,
        MONETARY_UNIT_CODE,
        NATIONAL,
    ],
    parent: owned_by(BY_SID),
    children: &[&MEASURE_CONDITION_COMPONENT],
};

pub static MEASURE_CONDITION_COMPONENT: EntityKind = EntityKind {
    table: "measure_condition_component",
    element: "measureConditionComponent",
    key: &[DUTY_EXPRESSION_ID],
    attributes: DUTY_COMPONENT_ATTRIBUTES,
    parent: keyed_by(BY_SID),
    children: &[],
};

footnote_association_kind!(
    MEASURE_FOOTNOTE_ASSOCIATION,
    "measure_footnote_association",
    "measureFootnoteAssociation",
    BY_SID,
    &[NATIONAL]
);

pub static MEASURE_COMPONENT: EntityKind = EntityKind {
    table: "measure_component",
    element: "measureComponent",
    key: &[DUTY_EXPRESSION_ID],
    attributes: DUTY_COMPONENT_ATTRIBUTES,
    parent: keyed_by(BY_SID),
    children: &[],
};

pub static MEASURE_EXCLUDED_GEOGRAPHICAL_AREA: EntityKind = EntityKind {
    table: "measure_excluded_geographical_area",
    element: "measureExcludedGeographicalArea",
    key: &[
        Field::text("geographicalAreaId", "geographical_area_id"),
        Field::integer("SIDGeographicalArea", "sid_geographical_area"),
    ],
    attributes: &[NATIONAL],
    parent: keyed_by(BY_SID),
    children: &[],
};

pub static MEASURE_PARTIAL_TEMPORARY_STOP: EntityKind = EntityKind {
    table: "measure_partial_temporary_stop",
    element: "measurePartialTemporaryStop",
    key: &[],
    attributes: &[
        Field::text("regulationId", "regulation_id"),
        Field::integer("regulationRoleType", "regulation_role_type"),
        NATIONAL,
    ],
    parent: keyed_by(BY_SID),
    children: &[],
};

pub static MEASURE_ACTION: EntityKind = EntityKind {
    table: "measure_action",
    element: "measureAction",
    key: &[Field::text("actionCode", "action_code")],
    attributes: VALIDITY,
    parent: None,
    children: &[&MEASURE_ACTION_DESCRIPTION],
};

description_kind!(
    MEASURE_ACTION_DESCRIPTION,
    "measure_action_description",
    "measureActionDescription",
    &["parent_action_code"]
);

pub static MEASURE_CONDITION_CODE: EntityKind = EntityKind {
    table: "measure_condition_code",
    element: "measureConditionCode",
    key: &[Field::text("conditionCode", "condition_code")],
    attributes: &[
        Field::integer("type", "condition_type"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&MEASURE_CONDITION_CODE_DESCRIPTION],
};

description_kind!(
    MEASURE_CONDITION_CODE_DESCRIPTION,
    "measure_condition_code_description",
    "measureConditionCodeDescription",
    &["parent_condition_code"]
);

pub static MEASURE_TYPE: EntityKind = EntityKind {
    table: "measure_type",
    element: "measureType",
    key: &[Field::text("measureType", "measure_type")],
    attributes: &[
        Field::integer("explosionLevel", "explosion_level"),
        Field::integer("measureComponentApplicableCode", "measure_component_applicable_code"),
        Field::text("measureTypeSeriesId", "measure_type_series_id"),
        Field::integer("orderNumberCaptureCode", "order_number_capture_code"),
        Field::integer("originDestinationCode", "origin_destination_code"),
        Field::integer("priorityCode", "priority_code"),
        Field::integer("tradeMovementCode", "trade_movement_code"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&MEASURE_TYPE_DESCRIPTION],
};

description_kind!(
    MEASURE_TYPE_DESCRIPTION,
    "measure_type_description",
    "measureTypeDescription",
    &["parent_measure_type"]
);

// ── Measurement units ───────────────────────────────────────────

pub static MEASUREMENT: EntityKind = EntityKind {
    table: "measurement",
    element: "measurement",
    key: &[MEASUREMENT_UNIT_CODE, MEASUREMENT_UNIT_QUALIFIER_CODE],
    attributes: VALIDITY,
    parent: None,
    children: &[],
};

pub static MEASUREMENT_UNIT: EntityKind = EntityKind {
    table: "measurement_unit",
    element: "measurementUnit",
    key: &[MEASUREMENT_UNIT_CODE],
    attributes: &[
        Field::element_text("nationalAbbreviation", "national_abbreviation"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&MEASUREMENT_UNIT_DESCRIPTION],
};

description_kind!(
    MEASUREMENT_UNIT_DESCRIPTION,
    "measurement_unit_description",
    "measurementUnitDescription",
    &["parent_measurement_unit_code"]
);

pub static MEASUREMENT_UNIT_QUALIFIER: EntityKind = EntityKind {
    table: "measurement_unit_qualifier",
    element: "measurementUnitQualifier",
    key: &[MEASUREMENT_UNIT_QUALIFIER_CODE],
    attributes: VALIDITY,
    parent: None,
    children: &[&MEASUREMENT_UNIT_QUALIFIER_DESCRIPTION],
};

description_kind!(
    MEASUREMENT_UNIT_QUALIFIER_DESCRIPTION,
    "measurement_unit_qualifier_description",
    "measurementUnitQualifierDescription",
    &["parent_measurement_unit_qualifier_code"]
);

// ── Meursing ────────────────────────────────────────────────────

pub static MEURSING_ADDITIONAL_CODE: EntityKind = EntityKind {
    table: "meursing_additional_code",
    element: "meursingAdditionalCode",
    key: &[SID],
    attributes: &[
        Field::text("additionalCodeId", "additional_code_id"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&MEURSING_TABLE_CELL_COMPONENT],
};

pub static MEURSING_TABLE_CELL_COMPONENT: EntityKind = EntityKind {
    table: "meursing_table_cell_component",
    element: "meursingTableCellComponent",
    key: &[
        MEURSING_TABLE_PLAN_ID,
        HEADING_NUMBER,
        ROW_COLUMN_CODE,
        SUBHEADING_SEQUENCE_NUMBER,
    ],
    attributes: &[DATE_START, DATE_END, NATIONAL],
    parent: keyed_by(BY_SID),
    children: &[],
};

const BY_MEURSING_HEADING: &[&str] = &[
    "parent_meursing_table_plan_id",
    "parent_heading_number",
    "parent_row_column_code",
];

pub static MEURSING_HEADING: EntityKind = EntityKind {
    table: "meursing_heading",
    element: "meursingHeading",
    key: &[MEURSING_TABLE_PLAN_ID, HEADING_NUMBER, ROW_COLUMN_CODE],
    attributes: VALIDITY,
    parent: None,
    children: &[
        &MEURSING_HEADING_FOOTNOTE_ASSOCIATION,
        &MEURSING_HEADING_TEXT,
    ],
};

footnote_association_kind!(
    MEURSING_HEADING_FOOTNOTE_ASSOCIATION,
    "meursing_heading_footnote_association",
    "meursingHeadingFootnoteAssociation",
    BY_MEURSING_HEADING,
    VALIDITY
);

description_kind!(
    MEURSING_HEADING_TEXT,
    "meursing_heading_text",
    "meursingHeadingText",
    BY_MEURSING_HEADING
);

pub static MEURSING_SUBHEADING: EntityKind = EntityKind {
    table: "meursing_subheading",
    element: "meursingSubheading",
    key: &[
        MEURSING_TABLE_PLAN_ID,
        HEADING_NUMBER,
        ROW_COLUMN_CODE,
        SUBHEADING_SEQUENCE_NUMBER,
    ],
    attributes: &[DESCRIPTION, DATE_START, DATE_END, NATIONAL],
    parent: None,
    children: &[],
};

pub static MEURSING_TABLE_PLAN: EntityKind = EntityKind {
    table: "meursing_table_plan",
    element: "meursingTablePlan",
    key: &[MEURSING_TABLE_PLAN_ID],
    attributes: VALIDITY,
    parent: None,
    children: &[],
};

// ── Monetary exchange ───────────────────────────────────────────

const EXCHANGE_RATE_ATTRIBUTES: &[Field] = &[
    Field::integer("calculationUnit", "calculation_unit"),
    Field::real("monetaryConversionRate", "monetary_conversion_rate"),
    NATIONAL,
];

pub static MONETARY_EXCHANGE_PERIOD: EntityKind = EntityKind {
    table: "monetary_exchange_period",
    element: "monetaryExchangePeriod",
    key: &[SID],
    attributes: &[MONETARY_UNIT_CODE, DATE_START, DATE_END, NATIONAL],
    parent: None,
    children: &[&MONETARY_EXCHANGE_RATE],
};

pub static MONETARY_EXCHANGE_RATE: EntityKind = EntityKind {
    table: "monetary_exchange_rate",
    element: "monetaryExchangeRate",
    key: &[MONETARY_UNIT_CODE],
    attributes: EXCHANGE_RATE_ATTRIBUTES,
    parent: keyed_by(BY_SID),
    children: &[],
};

pub static UNQUOTED_MONETARY_EXCHANGE_PERIOD: EntityKind = EntityKind {
    table: "unquoted_monetary_exchange_period",
    element: "unquotedMonetaryExchangePeriod",
    key: &[SID],
    attributes: &[MONETARY_UNIT_CODE, DATE_START, DATE_END, NATIONAL],
    parent: None,
    children: &[&UNQUOTED_MONETARY_EXCHANGE_RATE],
};

pub static UNQUOTED_MONETARY_EXCHANGE_RATE: EntityKind = EntityKind {
    table: "unquoted_monetary_exchange_rate",
    element: "unquotedMonetaryExchangeRate",
    key: &[MONETARY_UNIT_CODE],
    attributes: EXCHANGE_RATE_ATTRIBUTES,
    parent: keyed_by(BY_SID),
    children: &[],
};

// ── Preference codes ────────────────────────────────────────────

pub static PREFERENCE_CODE: EntityKind = EntityKind {
    table: "preference_code",
    element: "preferenceCode",
    key: &[Field::text("prefCode", "pref_code")],
    attributes: &[DATE_START, DATE_END, NATIONAL],
    parent: None,
    children: &[&PREFERENCE_CODE_DESCRIPTION],
};

description_kind!(
    PREFERENCE_CODE_DESCRIPTION,
    "preference_code_description",
    "preferenceCodeDescription",
    &["parent_pref_code"]
);

// ── Quotas ──────────────────────────────────────────────────────

pub static QUOTA_DEFINITION: EntityKind = EntityKind {
    table: "quota_definition",
    element: "quotaDefinition",
    key: &[SID],
    attributes: &[
        Field::integer("SIDQuotaOrderNumber", "sid_quota_order_number"),
        Field::text("quotaOrderNumber", "quota_order_number"),
        Field::text("quotaCriticalStateCode", "quota_critical_state_code"),
        Field::integer("quotaCriticalThreshold", "quota_critical_threshold"),
        Field::integer("quotaMaximumPrecision", "quota_maximum_precision"),
        DESCRIPTION,
        Field::real("initialVolume", "initial_volume"),
        Field::real("volume", "volume"),
        MEASUREMENT_UNIT_CODE,
        MEASUREMENT_UNIT_QUALIFIER_CODE,
        MONETARY_UNIT_CODE,
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[
        &QUOTA_BLOCKING_PERIOD,
        &QUOTA_ASSOCIATION,
        &QUOTA_SUSPENSION_PERIOD,
    ],
};

pub static QUOTA_BLOCKING_PERIOD: EntityKind = EntityKind {
    table: "quota_blocking_period",
    element: "quotaBlockingPeriod",
    key: &[SID],
    attributes: &[
        Field::integer("blockingPeriodType", "blocking_period_type"),
        DESCRIPTION,
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: owned_by(BY_SID),
    children: &[],
};

pub static QUOTA_ASSOCIATION: EntityKind = EntityKind {
    table: "quota_association",
    element: "quotaAssociation",
    key: &[Field::integer("SIDSubQuota", "sid_sub_quota")],
    attributes: &[
        Field::text("relationType", "relation_type"),
        Field::real("coefficient", "coefficient"),
        NATIONAL,
    ],
    parent: keyed_by(BY_SID),
    children: &[],
};

pub static QUOTA_SUSPENSION_PERIOD: EntityKind = EntityKind {
    table: "quota_suspension_period",
    element: "quotaSuspensionPeriod",
    key: &[SID],
    attributes: &[DESCRIPTION, DATE_START, DATE_END, NATIONAL],
    parent: owned_by(BY_SID),
    children: &[],
};

// ── Regulations ─────────────────────────────────────────────────

pub static BASE_REGULATION: EntityKind = EntityKind {
    table: "base_regulation",
    element: "baseRegulation",
    key: &[Field::text("regulationId", "regulation_id")],
    attributes: &[
        Field::integer("regulationRoleType", "regulation_role_type"),
        Field::text("antidumpingRegulationId", "antidumping_regulation_id"),
        Field::integer("antidumpingRegulationRoleType", "antidumping_regulation_role_type"),
        Field::integer("communityCode", "community_code"),
        DATE_PUBLISHED,
        DESCRIPTION,
        EFFECTIVE_END_DATE,
        JOURNAL_PAGE,
        OFFICIAL_JOURNAL_ID,
        REGULATION_APPROVED_FLAG,
        Field::text("regulationGroup", "regulation_group"),
        REPLACEMENT_INDICATOR,
        STOPPED_FLAG,
        Field::text("url", "url"),
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[],
};

pub static MODIFICATION_REGULATION: EntityKind = EntityKind {
    table: "modification_regulation",
    element: "modificationRegulation",
    key: &[Field::text("modificationRegulationId", "modification_regulation_id")],
    attributes: &[
        Field::integer("modificationRegulationRoleType", "modification_regulation_role_type"),
        Field::text("baseRegulationId", "base_regulation_id"),
        Field::integer("baseRegulationRoleType", "base_regulation_role_type"),
        DATE_PUBLISHED,
        DESCRIPTION,
        EFFECTIVE_END_DATE,
        JOURNAL_PAGE,
        OFFICIAL_JOURNAL_ID,
        REGULATION_APPROVED_FLAG,
        REPLACEMENT_INDICATOR,
        STOPPED_FLAG,
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[],
};

pub static FULL_TEMPORARY_STOP_REGULATION: EntityKind = EntityKind {
    table: "full_temporary_stop_regulation",
    element: "fullTemporaryStopRegulation",
    key: &[Field::text("ftsRegulationId", "fts_regulation_id")],
    attributes: &[
        Field::integer("ftsRegulationRoleType", "fts_regulation_role_type"),
        DATE_PUBLISHED,
        DESCRIPTION,
        EFFECTIVE_END_DATE,
        JOURNAL_PAGE,
        OFFICIAL_JOURNAL_ID,
        REGULATION_APPROVED_FLAG,
        REPLACEMENT_INDICATOR,
        STOPPED_FLAG,
        DATE_START,
        DATE_END,
        NATIONAL,
    ],
    parent: None,
    children: &[&FULL_TEMPORARY_STOP_REGULATION_ACTION],
};

pub static FULL_TEMPORARY_STOP_REGULATION_ACTION: EntityKind = EntityKind {
    table: "full_temporary_stop_regulation_action",
    element: "fullTemporaryStopRegulationAction",
    key: &[
        Field::text("stoppedRegulationId", "stopped_regulation_id"),
        Field::integer("stoppedRegulationRoleType", "stopped_regulation_role_type"),
    ],
    attributes: &[NATIONAL],
    parent: keyed_by(&["parent_fts_regulation_id"]),
    children: &[],
};

/// Root kinds in apply order.
pub static CATALOG: &[&EntityKind] = &[
    &CODE_TYPE,
    &MEASURE_TYPE,
    &MEASURE_ACTION,
    &MEASURE_CONDITION_CODE,
    &DUTY_EXPRESSION,
    &MEASUREMENT_UNIT,
    &MEASUREMENT_UNIT_QUALIFIER,
    &MEASUREMENT,
    &MONETARY_EXCHANGE_PERIOD,
    &UNQUOTED_MONETARY_EXCHANGE_PERIOD,
    &PREFERENCE_CODE,
    &CERTIFICATE,
    &FOOTNOTE,
    &ADDITIONAL_CODE,
    &GEOGRAPHICAL_AREA,
    &GOODS_NOMENCLATURE_GROUP,
    &BASE_REGULATION,
    &MODIFICATION_REGULATION,
    &FULL_TEMPORARY_STOP_REGULATION,
    &GOODS_NOMENCLATURE,
    &DECLARABLE_GOODS_NOMENCLATURE,
    &EXPORT_REFUND_NOMENCLATURE,
    &LOOKUP_TABLE,
    &MEURSING_TABLE_PLAN,
    &MEURSING_HEADING,
    &MEURSING_SUBHEADING,
    &MEURSING_ADDITIONAL_CODE,
    &QUOTA_DEFINITION,
    &MEASURE,
];

/// Finds a root kind by its XML element name.
pub fn root_kind(element: &str) -> Option<&'static EntityKind> {
    CATALOG.iter().copied().find(|k| k.element == element)
}

/// Position of a root kind in apply order.
pub fn apply_rank(kind: &EntityKind) -> usize {
    CATALOG
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(CATALOG.len())
}
