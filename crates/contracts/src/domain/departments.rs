//! Declarative configuration of every production department page.
//!
//! Each department differs only in its REST path, the backend field names
//! (CRM-style `__c` suffixes) and which weights feed its summary strip.

use crate::shared::summary::SummaryFields;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub label: &'static str,
    pub numeric: bool,
}

const fn text(field: &'static str, label: &'static str) -> Column {
    Column { field, label, numeric: false }
}

const fn grams(field: &'static str, label: &'static str) -> Column {
    Column { field, label, numeric: true }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentSpec {
    pub code: &'static str,
    pub title: &'static str,
    pub endpoint: &'static str,
    /// Backend field name -> record field name.
    pub field_map: &'static [(&'static str, &'static str)],
    pub columns: &'static [Column],
    pub summary: SummaryFields,
    /// Endpoint expects `startDate` / `endDate` of the selected window.
    pub windowed_endpoint: bool,
}

impl DepartmentSpec {
    pub fn has_summary(&self) -> bool {
        !self.summary.issued_field.is_empty()
    }
}

// ─── Shared column and field sets ───────────────────────────────────────────

const STAGE_COLUMNS: &[Column] = &[
    text("id", "Number"),
    text("orderId", "Order"),
    text("issuedDate", "Issued"),
    grams("issuedWeight", "Issued (g)"),
    grams("receivedWeight", "Received (g)"),
    grams("lossWeight", "Loss (g)"),
    text("status", "Status"),
];

const STAGE_SUMMARY: SummaryFields = SummaryFields {
    date_field: "issuedDate",
    issued_field: "issuedWeight",
    received_field: "receivedWeight",
    loss_field: Some("lossWeight"),
    extra_fields: &[],
};

// ─── Departments ────────────────────────────────────────────────────────────

pub const CASTING: DepartmentSpec = DepartmentSpec {
    code: "casting",
    title: "Casting",
    endpoint: "/api/casting",
    field_map: &[
        ("Name", "id"),
        ("Issued_Date__c", "issuedDate"),
        ("Issud_weight__c", "issuedWeight"),
        ("Weight_Received__c", "receivedWeight"),
        ("Casting_Loss__c", "lossWeight"),
        ("Casting_Scrap_Weight__c", "scrapWeight"),
        ("Casting_Dust_Weight__c", "dustWeight"),
        ("Status__c", "status"),
    ],
    columns: &[
        text("id", "Casting No."),
        text("issuedDate", "Issued"),
        grams("issuedWeight", "Issued (g)"),
        grams("receivedWeight", "Received (g)"),
        grams("scrapWeight", "Scrap (g)"),
        grams("dustWeight", "Dust (g)"),
        grams("lossWeight", "Loss (g)"),
        text("status", "Status"),
    ],
    summary: SummaryFields {
        extra_fields: &["scrapWeight", "dustWeight"],
        ..STAGE_SUMMARY
    },
    windowed_endpoint: false,
};

pub const FILING: DepartmentSpec = stage(
    "filing",
    "Filing",
    "/api/filing",
    &[
        ("Name", "id"),
        ("Order_Id__c", "orderId"),
        ("Issued_Date__c", "issuedDate"),
        ("Issued_Weight__c", "issuedWeight"),
        ("Received_Weight__c", "receivedWeight"),
        ("Filing_loss__c", "lossWeight"),
        ("Status__c", "status"),
    ],
);

pub const GRINDING: DepartmentSpec = stage(
    "grinding",
    "Grinding",
    "/api/grinding",
    &[
        ("Name", "id"),
        ("Order_Id__c", "orderId"),
        ("Issued_Date__c", "issuedDate"),
        ("Issued_Weight__c", "issuedWeight"),
        ("Received_Weight__c", "receivedWeight"),
        ("Grinding_loss__c", "lossWeight"),
        ("Status__c", "status"),
    ],
);

pub const SETTING: DepartmentSpec = DepartmentSpec {
    code: "setting",
    title: "Setting",
    endpoint: "/api/setting",
    field_map: &[
        ("Name", "id"),
        ("Order_Id__c", "orderId"),
        ("Issued_Date__c", "issuedDate"),
        ("Issued_Weight__c", "issuedWeight"),
        ("Returned_weight__c", "receivedWeight"),
        ("Setting_l__c", "lossWeight"),
        ("Stone_Weight__c", "stoneWeight"),
        ("Status__c", "status"),
    ],
    columns: &[
        text("id", "Setting No."),
        text("orderId", "Order"),
        text("issuedDate", "Issued"),
        grams("issuedWeight", "Issued (g)"),
        grams("receivedWeight", "Received (g)"),
        grams("stoneWeight", "Stones (g)"),
        grams("lossWeight", "Loss (g)"),
        text("status", "Status"),
    ],
    summary: SummaryFields {
        extra_fields: &["stoneWeight"],
        ..STAGE_SUMMARY
    },
    windowed_endpoint: false,
};

pub const POLISHING: DepartmentSpec = stage(
    "polishing",
    "Polishing",
    "/api/polishing",
    &[
        ("Name", "id"),
        ("Order_Id__c", "orderId"),
        ("Issued_Date__c", "issuedDate"),
        ("Issued_Weight__c", "issuedWeight"),
        ("Received_Weight__c", "receivedWeight"),
        ("Polishing_loss__c", "lossWeight"),
        ("Status__c", "status"),
    ],
);

pub const DULL: DepartmentSpec = stage(
    "dull",
    "Dull",
    "/api/dull",
    &[
        ("Name", "id"),
        ("Order_Id__c", "orderId"),
        ("Issued_Date__c", "issuedDate"),
        ("Issued_Weight__c", "issuedWeight"),
        ("Returned_weight__c", "receivedWeight"),
        ("Dull_loss__c", "lossWeight"),
        ("Status__c", "status"),
    ],
);

pub const PLATING: DepartmentSpec = stage(
    "plating",
    "Plating",
    "/api/plating",
    &[
        ("Name", "id"),
        ("Order_Id__c", "orderId"),
        ("Issued_Date__c", "issuedDate"),
        ("Issued_Weight__c", "issuedWeight"),
        ("Returned_weight__c", "receivedWeight"),
        ("Plating_loss__c", "lossWeight"),
        ("Status__c", "status"),
    ],
);

pub const CUTTING: DepartmentSpec = stage(
    "cutting",
    "Cutting",
    "/api/cutting",
    &[
        ("Name", "id"),
        ("Order_Id__c", "orderId"),
        ("Issued_Date__c", "issuedDate"),
        ("Issued_Weight__c", "issuedWeight"),
        ("Returned_weight__c", "receivedWeight"),
        ("Cutting_loss__c", "lossWeight"),
        ("Status__c", "status"),
    ],
);

pub const TAGGING: DepartmentSpec = DepartmentSpec {
    code: "tagging",
    title: "Tagging",
    endpoint: "/api/tagging",
    field_map: &[
        ("Name", "id"),
        ("Party_Name__c", "partyName"),
        ("Created_Date__c", "issuedDate"),
        ("Total_Gross_Weight__c", "issuedWeight"),
        ("Total_Net_Weight__c", "receivedWeight"),
        ("Total_Stone_Weight__c", "stoneWeight"),
        ("Pdf_URL__c", "pdfUrl"),
    ],
    columns: &[
        text("id", "Tagging ID"),
        text("partyName", "Party"),
        text("issuedDate", "Created"),
        grams("issuedWeight", "Gross (g)"),
        grams("receivedWeight", "Net (g)"),
        grams("stoneWeight", "Stones (g)"),
    ],
    summary: SummaryFields {
        loss_field: None,
        extra_fields: &["stoneWeight"],
        ..STAGE_SUMMARY
    },
    windowed_endpoint: false,
};

pub const BILLING: DepartmentSpec = DepartmentSpec {
    code: "billing",
    title: "Billing",
    endpoint: "/api/billing",
    field_map: &[
        ("Name", "id"),
        ("Party_Name__c", "partyName"),
        ("Created_Date__c", "issuedDate"),
        ("Total_Gross_Weight__c", "issuedWeight"),
        ("Total_Net_Weight__c", "receivedWeight"),
        ("Invoice_Number__c", "invoiceNumber"),
    ],
    columns: &[
        text("id", "Bill ID"),
        text("invoiceNumber", "Invoice"),
        text("partyName", "Party"),
        text("issuedDate", "Created"),
        grams("issuedWeight", "Gross (g)"),
        grams("receivedWeight", "Net (g)"),
    ],
    summary: SummaryFields {
        loss_field: None,
        ..STAGE_SUMMARY
    },
    windowed_endpoint: false,
};

/// Loss aggregation across all departments, filtered server-side by window.
pub const REFINERY: DepartmentSpec = DepartmentSpec {
    code: "refinery",
    title: "Refinery Losses",
    endpoint: "/api/department-losses",
    field_map: &[
        ("id", "id"),
        ("department", "department"),
        ("issuedDate", "issuedDate"),
        ("issuedWeight", "issuedWeight"),
        ("receivedWeight", "receivedWeight"),
        ("lossWeight", "lossWeight"),
    ],
    columns: &[
        text("id", "Number"),
        text("department", "Department"),
        text("issuedDate", "Issued"),
        grams("issuedWeight", "Issued (g)"),
        grams("receivedWeight", "Received (g)"),
        grams("lossWeight", "Loss (g)"),
    ],
    summary: STAGE_SUMMARY,
    windowed_endpoint: true,
};

/// Plain production stage: standard columns and summary fields.
const fn stage(
    code: &'static str,
    title: &'static str,
    endpoint: &'static str,
    field_map: &'static [(&'static str, &'static str)],
) -> DepartmentSpec {
    DepartmentSpec {
        code,
        title,
        endpoint,
        field_map,
        columns: STAGE_COLUMNS,
        summary: STAGE_SUMMARY,
        windowed_endpoint: false,
    }
}

// ─── Registry ───────────────────────────────────────────────────────────────

const ALL: &[DepartmentSpec] = &[
    CASTING, FILING, GRINDING, SETTING, POLISHING, DULL, PLATING, CUTTING, TAGGING, BILLING,
    REFINERY,
];

static BY_CODE: Lazy<HashMap<&'static str, &'static DepartmentSpec>> =
    Lazy::new(|| ALL.iter().map(|spec| (spec.code, spec)).collect());

/// Departments in production order.
pub fn all() -> &'static [DepartmentSpec] {
    ALL
}

pub fn find(code: &str) -> Option<&'static DepartmentSpec> {
    BY_CODE.get(code.trim().to_lowercase().as_str()).copied()
}
