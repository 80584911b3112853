//! Upstream resource behind each read operation.

use platform_session::Actor;
use platform_upstream::Endpoint;

pub const ALL_USERS: Endpoint = Endpoint {
    operation: "allUsers",
    actor: Actor::Fo,
    path: "users",
    subject: "des utilisateurs FO",
};

pub const FO_DEALS: Endpoint = Endpoint {
    operation: "foDeals",
    actor: Actor::Fo,
    path: "deals",
    subject: "des deals FO",
};

pub const FO_MY_DEALS: Endpoint = Endpoint {
    operation: "foMyDeals",
    actor: Actor::Fo,
    path: "mydeals",
    subject: "de mes deals FO",
};

pub const FO_DASHBOARDS: Endpoint = Endpoint {
    operation: "foDashboards",
    actor: Actor::Fo,
    path: "dashboards",
    subject: "des dashboards FO",
};

pub const DASHBOARD_CMS: Endpoint = Endpoint {
    operation: "dashboardCMS",
    actor: Actor::Fo,
    path: "dashboards/CMS",
    subject: "du tableau de bord CMS",
};

pub const KPI_VL_PAYES_7_JOURS: Endpoint = Endpoint {
    operation: "kpiVLPayes7jours",
    actor: Actor::Fo,
    path: "charts/KPIVLPayes7jours",
    subject: "des données KPI payés 7 jours",
};

pub const KPI_VL_JUSTIF_A_ENVOYER: Endpoint = Endpoint {
    operation: "kpiVLJustifAEnvoyer",
    actor: Actor::Fo,
    path: "charts/KPIVLJustifAEnvoyer",
    subject: "des données KPI Justificatifs à envoyer",
};

pub const KPI_VL_JUSTIF_NON_CONFORMES: Endpoint = Endpoint {
    operation: "kpiVLJustifNonConformes",
    actor: Actor::Fo,
    path: "charts/KPIVLJustifNonConformes",
    subject: "des données KPI Justificatifs non conformes",
};

pub const KPI_VL_EN_ATTENTE_PAIEMENT: Endpoint = Endpoint {
    operation: "kpiVLEnAttentePaiement",
    actor: Actor::Fo,
    path: "charts/KPIVLEnAttentePaiement",
    subject: "des données KPI En attente de paiement",
};

pub const KPI_PROCHAINS_PAIEMENTS: Endpoint = Endpoint {
    operation: "kpiProchainsPaiements",
    actor: Actor::Bo,
    path: "charts/KPIPROCHAINSPAIEMENTS",
    subject: "des données KPI Prochains paiements",
};

pub const WS_MY_CREDIT_LINES_DASHBOARD: Endpoint = Endpoint {
    operation: "wsMyCreditLinesDashboard",
    actor: Actor::Bo,
    path: "dashboards/wsmycreditlines",
    subject: "du dashboard wsmycreditlines",
};

pub const KPI_END_FREE_PERIOD: Endpoint = Endpoint {
    operation: "kpiEndFreePeriod",
    actor: Actor::Bo,
    path: "charts/KPIENDFREEPERIOD",
    subject: "des données KPI End Free Period",
};
