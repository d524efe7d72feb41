use {
    crate::{
        auction::{
            self,
            entities,
        },
        config::RunOptions,
        kernel::auth::Credential,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::ServerState,
    },
    anyhow::Result,
    axum::{
        async_trait,
        extract::FromRequestParts,
        handler::Handler,
        http::{
            header,
            request::Parts,
            HeaderValue,
            Method,
            StatusCode,
        },
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            on,
            MethodFilter,
        },
        Json,
        Router,
    },
    axum_extra::{
        headers::{
            authorization::Bearer,
            Authorization,
        },
        TypedHeader,
    },
    axum_prometheus::PrometheusMetricLayer,
    clap::crate_version,
    sealed_auction_api_types::{
        auction as auction_api,
        ErrorBodyResponse,
        Routable,
        Route,
    },
    std::{
        convert::Infallible,
        sync::{
            atomic::Ordering,
            Arc,
        },
    },
    tower_http::cors::CorsLayer,
    utoipa::{
        openapi::security::{
            HttpAuthScheme,
            HttpBuilder,
            SecurityScheme,
        },
        Modify,
        OpenApi,
    },
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

async fn root() -> String {
    format!("Sealed Auction Server API {}", crate_version!())
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The credential was missing or not accepted
    Unauthorized,
    /// The auction was not found
    AuctionNotFound,
    /// An auction with the same id already exists
    AuctionAlreadyExists,
    /// The auction is in progress and cannot be modified
    AuctionInProgress,
    /// The bid was rejected by the auction
    InvalidBid(String),
    /// The auction has no result yet
    ResultUnavailable(String),
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Invalid or missing credential".to_string(),
            ),
            RestError::AuctionNotFound => (
                StatusCode::NOT_FOUND,
                "Auction with the specified id was not found".to_string(),
            ),
            RestError::AuctionAlreadyExists => (
                StatusCode::CONFLICT,
                "Auction with the specified id already exists".to_string(),
            ),
            RestError::AuctionInProgress => (
                StatusCode::CONFLICT,
                "Auction is in progress and cannot be updated".to_string(),
            ),
            RestError::InvalidBid(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid bid: {}", msg))
            }
            RestError::ResultUnavailable(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Auction result unavailable: {}", msg),
            ),
        }
    }
}

impl From<entities::StoreError> for RestError {
    fn from(error: entities::StoreError) -> Self {
        match error {
            entities::StoreError::Unauthorized => RestError::Unauthorized,
            entities::StoreError::DuplicateId(_) => RestError::AuctionAlreadyExists,
            entities::StoreError::NotFound(_) => RestError::AuctionNotFound,
            entities::StoreError::AuctionInProgress(_) => RestError::AuctionInProgress,
            entities::StoreError::Construction(e) => RestError::BadParameters(e.to_string()),
            entities::StoreError::Bid(e) => RestError::InvalidBid(e.to_string()),
            entities::StoreError::Result(e) => RestError::ResultUnavailable(e.to_string()),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// The credential presented as a bearer token. A request without one carries an empty credential
/// and is rejected by any guarded operation.
pub struct Auth(pub Credential);

#[async_trait]
impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(token))) => Ok(Auth(Credential::new(token.token()))),
            Err(_) => Ok(Auth(Credential::default())),
        }
    }
}

#[derive(Default)]
pub struct WrappedRouter {
    pub router: Router<Arc<ServerState>>,
}

impl WrappedRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<H, T>(mut self, path: impl Routable, handler: H) -> Self
    where
        H: Handler<T, Arc<ServerState>>,
        T: 'static,
    {
        let properties = path.properties();
        match MethodFilter::try_from(properties.method.clone()) {
            Ok(filter) => {
                self.router = self.router.route(&properties.full_path, on(filter, handler));
            }
            Err(_) => {
                tracing::error!(
                    path = %properties.full_path,
                    method = %properties.method,
                    "Skipping route with unsupported method"
                );
            }
        }
        self
    }
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

// Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
#[derive(OpenApi)]
#[openapi(
    paths(
        auction::api::post_auction,
        auction::api::get_auctions,
        auction::api::get_auction,
        auction::api::put_auction,
        auction::api::delete_auction,
        auction::api::post_bid,
        auction::api::get_auction_result,
    ),
    components(
        schemas(
            auction_api::Auction,
            auction_api::Auctions,
            auction_api::AuctionCreate,
            auction_api::AuctionResult,
            auction_api::AuctionStatus,
            auction_api::Bid,
            auction_api::BidCreate,
            ErrorBodyResponse,
        ),
        responses(
            ErrorBodyResponse,
            auction_api::Auction,
            auction_api::Auctions,
            auction_api::AuctionResult,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Sealed Auction Server", description = "Sellers register time-boxed auctions with a reserve price. \
        Bidders bid while an auction is open and the highest bid wins once it closes, the earliest bid winning ties.")
    )
)]
pub struct ApiDoc;

pub fn get_router(metric_layer: Option<PrometheusMetricLayer<'static>>) -> Router<Arc<ServerState>> {
    let router = Router::new()
        .merge(Redoc::with_url(Route::Docs.as_ref().to_string(), ApiDoc::openapi()))
        .route(
            Route::OpenApi.as_ref(),
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(auction::api::get_routes())
        .route(Route::Root.as_ref(), get(root))
        .route(Route::Liveness.as_ref(), get(live));
    match metric_layer {
        Some(layer) => router.layer(layer),
        None => router,
    }
}

fn get_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

pub async fn start_api(
    run_options: RunOptions,
    allowed_origins: Vec<String>,
    state: Arc<ServerState>,
    metric_layer: PrometheusMetricLayer<'static>,
) -> Result<()> {
    let app: Router<()> = get_router(Some(metric_layer))
        .layer(get_cors_layer(&allowed_origins)?)
        .with_state(state);

    tracing::info!(addr = %run_options.server.listen_addr, "Starting API server...");
    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down RPC server...");
        })
        .await?;
    Ok(())
}
