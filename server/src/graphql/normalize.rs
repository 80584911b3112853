//! Upstream payload → GraphQL entity mapping.
//!
//! Every function here is pure. Optional fields fall back to `None`, `false`
//! or an empty list; only a missing structural field (the grid or list that
//! makes the payload the expected resource) yields a [`ShapeError`].

use serde_json::Value;
use thiserror::Error;

use super::types::{
    ActorOption, ChartOptions, ChartTable, Dashboard, DashboardCms, DashboardForm,
    DashboardItem, DashboardLayout, Deal, TableCell, User,
};

/// JSON pointer to the CMS actor options.
const CMS_ACTORS_POINTER: &str = "/View per Business Partner/0/options";

pub type Normalizer<T> = fn(&Value) -> Result<T, ShapeError>;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ShapeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` has an unexpected shape: {reason}")]
    Unexpected { field: &'static str, reason: String },
}

pub fn users(payload: &Value) -> Result<Vec<User>, ShapeError> {
    rows(payload, "users", user)
}

pub fn deals(payload: &Value) -> Result<Vec<Deal>, ShapeError> {
    rows(payload, "deals", deal)
}

pub fn my_deals(payload: &Value) -> Result<DashboardLayout, ShapeError> {
    let layout = required_grid(payload, "layout", scalar_text)?;
    Ok(DashboardLayout { layout })
}

pub fn dashboards(payload: &Value) -> Result<Vec<Dashboard>, ShapeError> {
    let items = payload
        .get("dashboards")
        .and_then(Value::as_array)
        .ok_or(ShapeError::MissingField("dashboards"))?;
    Ok(items
        .iter()
        .map(|item| Dashboard {
            title: text(item, "title"),
            id: text(item, "id"),
        })
        .collect())
}

pub fn dashboard_cms(payload: &Value) -> Result<DashboardCms, ShapeError> {
    Ok(DashboardCms {
        editable: flag(payload, "Editable"),
        layout: required_grid(payload, "layout", dashboard_item)?,
        actors: cms_actors(payload),
    })
}

/// Credit-line dashboards are never editable and carry no actor picker.
pub fn credit_lines_dashboard(payload: &Value) -> Result<DashboardForm, ShapeError> {
    Ok(DashboardForm {
        editable: false,
        layout: required_grid(payload, "layout", dashboard_item)?,
        actors: Vec::new(),
    })
}

pub fn chart_table(payload: &Value) -> Result<ChartTable, ShapeError> {
    let options = payload.get("options").unwrap_or(&Value::Null);
    Ok(ChartTable {
        kind: text(payload, "type"),
        title: text(payload, "title"),
        options: ChartOptions {
            class_table: text(options, "classTable"),
            class_name_cells: text(options, "classNameCells"),
            class_name_header: text(options, "classNameHeader"),
        },
        data: required_grid(payload, "data", table_cell)?,
    })
}

/// A row that is not an object yields a user with every field absent.
fn user(row: &Value) -> User {
    User {
        uticode: text(row, "uticode"),
        utinom: text(row, "utinom"),
        utiprenom: text(row, "utiprenom"),
        utiposition: text(row, "utiposition"),
        email: text(row, "email"),
        grocode: text(row, "grocode"),
    }
}

fn deal(row: &Value) -> Deal {
    Deal {
        clienttitlecode: text(row, "clienttitlecode"),
        clientname: text(row, "clientname"),
        clientfirstname: text(row, "clientfirstname"),
        firstassetmakelabel: text(row, "firstassetmakelabel"),
        firstassetmodellabel: text(row, "firstassetmodellabel"),
        firstassetcategorylabel: text(row, "firstassetcategorylabel"),
        dprnumero: text(row, "dprnumero"),
        dosid: int(row, "dosid"),
        dpfdtlimite: float(row, "dpfdtlimite"),
        dpimt: float(row, "dpimt"),
        financedvalue: float(row, "financedvalue"),
        pfiinvestissement: float(row, "pfiinvestissement"),
        actid: int(row, "actid"),
        actnom: text(row, "actnom"),
        actnom2: text(row, "actnom2"),
        actlibcourtclient: text(row, "actlibcourtclient"),
        actsiret: text(row, "actsiret"),
        actcode: text(row, "actcode"),
        dprdtcreation: float(row, "dprdtcreation"),
        dprdtmodif: float(row, "dprdtmodif"),
        jalcode: text(row, "jalcode"),
        jallibelle: text(row, "jallibelle"),
        phacode: text(row, "phacode"),
        monthly: float(row, "monthly"),
        dpmlibelle: text(row, "dpmlibelle"),
    }
}

pub fn dashboard_item(item: &Value) -> DashboardItem {
    DashboardItem {
        kind: non_empty_text(item, "type"),
        content: non_empty_text(item, "content"),
        layout_class: non_empty_text(item, "layoutClass"),
        url: non_empty_text(item, "url"),
    }
}

pub fn table_cell(cell: &Value) -> TableCell {
    TableCell {
        value: text(cell, "value"),
        isheader: flag(cell, "isheader"),
    }
}

fn cms_actors(payload: &Value) -> Vec<ActorOption> {
    payload
        .pointer(CMS_ACTORS_POINTER)
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .map(|option| ActorOption {
                    code: text(option, "code"),
                    label: text(option, "label"),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Top-level list payloads. Only the array itself is structural.
fn rows<T>(
    payload: &Value,
    field: &'static str,
    row: impl Fn(&Value) -> T,
) -> Result<Vec<T>, ShapeError> {
    let items = payload.as_array().ok_or_else(|| ShapeError::Unexpected {
        field,
        reason: "expected an array".into(),
    })?;
    Ok(items.iter().map(row).collect())
}

fn required_grid<T>(
    payload: &Value,
    field: &'static str,
    cell: impl Fn(&Value) -> T,
) -> Result<Vec<Vec<T>>, ShapeError> {
    let rows = payload
        .get(field)
        .and_then(Value::as_array)
        .ok_or(ShapeError::MissingField(field))?;
    rows.iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(&cell).collect())
                .ok_or_else(|| ShapeError::Unexpected {
                    field,
                    reason: "row is not an array".into(),
                })
        })
        .collect()
}

/// Strings pass through, numbers and booleans are rendered; anything else
/// is absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn text(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(scalar_text)
}

fn non_empty_text(item: &Value, key: &str) -> Option<String> {
    text(item, key).filter(|value| !value.is_empty())
}

/// Integers, or strings holding one.
fn int(item: &Value, key: &str) -> Option<i64> {
    match item.get(key)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn float(item: &Value, key: &str) -> Option<f64> {
    match item.get(key)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn flag(item: &Value, key: &str) -> bool {
    item.get(key).and_then(Value::as_bool).unwrap_or(false)
}
