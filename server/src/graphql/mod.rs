mod endpoints;
mod login;
pub mod normalize;
pub mod types;

use async_graphql::{Context, EmptySubscription, Object, Schema};
use axum::http::header::SET_COOKIE;
use platform_api::{DomainError, GatewayResult, graphql_error};
use platform_session::{Actor, RequestContext, session_cookie};
use platform_upstream::{Credentials, Endpoint, UpstreamClient, classify};
use tracing::{error, instrument};

use self::endpoints::*;
use self::normalize::{Normalizer, ShapeError};
use self::types::{
    ChartTable, Dashboard, DashboardCms, DashboardForm, DashboardLayout, Deal, LoginResponse,
    User,
};

pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Shared resolver dependencies.
#[derive(Clone, Debug)]
pub struct GatewayData {
    pub upstream: UpstreamClient,
    /// Mark session cookies `Secure`.
    pub secure_cookies: bool,
}

pub fn build_schema(data: GatewayData) -> GatewaySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(data)
        .finish()
}

/// SDL of the gateway schema; needs no upstream.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// RequireSession → GET → normalize, with every failure classified.
/// No upstream call is made when the actor session is missing.
pub async fn run_query<T>(
    upstream: &UpstreamClient,
    request: &RequestContext,
    endpoint: &Endpoint,
    normalize: Normalizer<T>,
) -> GatewayResult<T> {
    let session = request.require(endpoint.actor)?;
    let payload = upstream
        .get(session, endpoint.path)
        .await
        .map_err(|failure| classify(endpoint, &failure))?;
    normalize(&payload).map_err(|err| shape_error(endpoint, err))
}

fn shape_error(endpoint: &Endpoint, err: ShapeError) -> DomainError {
    error!(
        operation = endpoint.operation,
        actor = %endpoint.actor,
        error = %err,
        "upstream payload does not match the expected resource"
    );
    DomainError::Shape(format!(
        "Réponse invalide du serveur {} lors de la récupération {}.",
        endpoint.actor.label(),
        endpoint.subject
    ))
}

async fn query<T>(
    ctx: &Context<'_>,
    endpoint: &Endpoint,
    normalize: Normalizer<T>,
) -> async_graphql::Result<T> {
    let data = ctx.data::<GatewayData>()?;
    let anonymous = RequestContext::default();
    let request = ctx.data_opt::<RequestContext>().unwrap_or(&anonymous);
    run_query(&data.upstream, request, endpoint, normalize)
        .await
        .map_err(graphql_error)
}

async fn login_mutation(
    ctx: &Context<'_>,
    actor: Actor,
    credentials: Credentials,
) -> async_graphql::Result<LoginResponse> {
    let data = ctx.data::<GatewayData>()?;
    let response = login::login(&data.upstream, actor, &credentials).await;
    if let Some(token) = &response.token {
        let cookie = session_cookie(actor, token.clone(), data.secure_cookies);
        ctx.append_http_header(SET_COOKIE, cookie.encoded().to_string());
    }
    Ok(response)
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[instrument(name = "graphql.allUsers", skip_all)]
    async fn all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        query(ctx, &ALL_USERS, normalize::users).await
    }

    #[instrument(name = "graphql.foDeals", skip_all)]
    async fn fo_deals(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Deal>> {
        query(ctx, &FO_DEALS, normalize::deals).await
    }

    #[instrument(name = "graphql.foMyDeals", skip_all)]
    async fn fo_my_deals(&self, ctx: &Context<'_>) -> async_graphql::Result<DashboardLayout> {
        query(ctx, &FO_MY_DEALS, normalize::my_deals).await
    }

    #[instrument(name = "graphql.foDashboards", skip_all)]
    async fn fo_dashboards(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Dashboard>> {
        query(ctx, &FO_DASHBOARDS, normalize::dashboards).await
    }

    #[graphql(name = "dashboardCMS")]
    #[instrument(name = "graphql.dashboardCMS", skip_all)]
    async fn dashboard_cms(&self, ctx: &Context<'_>) -> async_graphql::Result<DashboardCms> {
        query(ctx, &DASHBOARD_CMS, normalize::dashboard_cms).await
    }

    #[graphql(name = "kpiVLPayes7jours")]
    #[instrument(name = "graphql.kpiVLPayes7jours", skip_all)]
    async fn kpi_vl_payes_7_jours(&self, ctx: &Context<'_>) -> async_graphql::Result<ChartTable> {
        query(ctx, &KPI_VL_PAYES_7_JOURS, normalize::chart_table).await
    }

    #[graphql(name = "kpiVLJustifAEnvoyer")]
    #[instrument(name = "graphql.kpiVLJustifAEnvoyer", skip_all)]
    async fn kpi_vl_justif_a_envoyer(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<ChartTable> {
        query(ctx, &KPI_VL_JUSTIF_A_ENVOYER, normalize::chart_table).await
    }

    #[graphql(name = "kpiVLJustifNonConformes")]
    #[instrument(name = "graphql.kpiVLJustifNonConformes", skip_all)]
    async fn kpi_vl_justif_non_conformes(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<ChartTable> {
        query(ctx, &KPI_VL_JUSTIF_NON_CONFORMES, normalize::chart_table).await
    }

    #[graphql(name = "kpiVLEnAttentePaiement")]
    #[instrument(name = "graphql.kpiVLEnAttentePaiement", skip_all)]
    async fn kpi_vl_en_attente_paiement(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<ChartTable> {
        query(ctx, &KPI_VL_EN_ATTENTE_PAIEMENT, normalize::chart_table).await
    }

    #[instrument(name = "graphql.kpiProchainsPaiements", skip_all)]
    async fn kpi_prochains_paiements(&self, ctx: &Context<'_>) -> async_graphql::Result<ChartTable> {
        query(ctx, &KPI_PROCHAINS_PAIEMENTS, normalize::chart_table).await
    }

    #[instrument(name = "graphql.wsMyCreditLinesDashboard", skip_all)]
    async fn ws_my_credit_lines_dashboard(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<DashboardForm> {
        query(
            ctx,
            &WS_MY_CREDIT_LINES_DASHBOARD,
            normalize::credit_lines_dashboard,
        )
        .await
    }

    #[instrument(name = "graphql.kpiEndFreePeriod", skip_all)]
    async fn kpi_end_free_period(&self, ctx: &Context<'_>) -> async_graphql::Result<ChartTable> {
        query(ctx, &KPI_END_FREE_PERIOD, normalize::chart_table).await
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[graphql(name = "loginFO")]
    #[instrument(name = "graphql.loginFO", skip_all)]
    async fn login_fo(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> async_graphql::Result<LoginResponse> {
        login_mutation(ctx, Actor::Fo, Credentials::new(username, password)).await
    }

    #[graphql(name = "loginBO")]
    #[instrument(name = "graphql.loginBO", skip_all)]
    async fn login_bo(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> async_graphql::Result<LoginResponse> {
        login_mutation(ctx, Actor::Bo, Credentials::new(username, password)).await
    }
}
