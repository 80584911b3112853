use async_graphql::SimpleObject;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
pub struct User {
    pub uticode: Option<String>,
    pub utinom: Option<String>,
    pub utiprenom: Option<String>,
    pub utiposition: Option<String>,
    pub email: Option<String>,
    pub grocode: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
pub struct Deal {
    pub clienttitlecode: Option<String>,
    pub clientname: Option<String>,
    pub clientfirstname: Option<String>,
    pub firstassetmakelabel: Option<String>,
    pub firstassetmodellabel: Option<String>,
    pub firstassetcategorylabel: Option<String>,
    pub dprnumero: Option<String>,
    pub dosid: Option<i64>,
    pub dpfdtlimite: Option<f64>,
    pub dpimt: Option<f64>,
    pub financedvalue: Option<f64>,
    pub pfiinvestissement: Option<f64>,
    pub actid: Option<i64>,
    pub actnom: Option<String>,
    pub actnom2: Option<String>,
    pub actlibcourtclient: Option<String>,
    pub actsiret: Option<String>,
    pub actcode: Option<String>,
    pub dprdtcreation: Option<f64>,
    pub dprdtmodif: Option<f64>,
    pub jalcode: Option<String>,
    pub jallibelle: Option<String>,
    pub phacode: Option<String>,
    pub monthly: Option<f64>,
    pub dpmlibelle: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
pub struct DashboardLayout {
    pub layout: Vec<Vec<Option<String>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
pub struct Dashboard {
    pub title: Option<String>,
    pub id: Option<String>,
}

/// One cell of a dashboard grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct DashboardItem {
    #[graphql(name = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub layout_class: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
pub struct ActorOption {
    pub code: Option<String>,
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
#[graphql(name = "DashboardCMS")]
pub struct DashboardCms {
    pub editable: bool,
    pub layout: Vec<Vec<DashboardItem>>,
    pub actors: Vec<ActorOption>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
#[graphql(name = "Dashboardform")]
pub struct DashboardForm {
    pub editable: bool,
    pub layout: Vec<Vec<DashboardItem>>,
    pub actors: Vec<ActorOption>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
pub struct TableCell {
    pub value: Option<String>,
    pub isheader: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub class_table: Option<String>,
    pub class_name_cells: Option<String>,
    pub class_name_header: Option<String>,
}

/// KPI chart rendered as a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, SimpleObject)]
pub struct ChartTable {
    #[graphql(name = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub options: ChartOptions,
    pub data: Vec<Vec<TableCell>>,
}

/// Outcome of a login mutation. Logins report failure here instead of
/// raising a GraphQL error.
#[derive(Clone, Debug, Default, PartialEq, SimpleObject)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
}
