use {
    super::{
        entities,
        service::{
            create_auction::CreateAuctionInput,
            delete_auction::DeleteAuctionInput,
            get_auction::GetAuctionInput,
            get_auction_result::GetAuctionResultInput,
            place_bid::PlaceBidInput,
            update_auction::UpdateAuctionInput,
        },
    },
    crate::{
        api::{
            Auth,
            RestError,
            WrappedRouter,
        },
        state::ServerState,
    },
    axum::{
        extract::{
            Path,
            Query,
            State,
        },
        Json,
        Router,
    },
    sealed_auction_api_types::{
        auction::{
            Auction,
            AuctionCreate,
            AuctionId,
            AuctionResult,
            AuctionStatus,
            Auctions,
            Bid,
            BidCreate,
            GetAuctionsQueryParams,
            Route,
        },
        ErrorBodyResponse,
    },
    std::sync::Arc,
};

/// Register a new auction.
///
/// The server assigns the auction id. Bidding opens after `start` and closes at `end`.
#[utoipa::path(post, path = "/v1/auctions", request_body = AuctionCreate,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Auction was created successfully", body = Auction),
        (status = 400, response = ErrorBodyResponse),
        (status = 401, description = "Credential was missing or invalid", body = ErrorBodyResponse),
    ),
    tag = "auction",
)]
pub async fn post_auction(
    Auth(credential): Auth,
    State(store): State<Arc<ServerState>>,
    Json(auction_create): Json<AuctionCreate>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .auction_service
        .create_auction(CreateAuctionInput {
            credential,
            start: auction_create.start,
            end: auction_create.end,
            reserve_price: auction_create.reserve_price,
        })?;
    Ok(Json(auction.into()))
}

/// List auctions by lifecycle status.
///
/// Returns active auctions unless another status is requested. Auctions are ordered by start time.
#[utoipa::path(get, path = "/v1/auctions", params(GetAuctionsQueryParams),
    responses(
        (status = 200, description = "Auctions in the requested status", body = Auctions),
        (status = 400, response = ErrorBodyResponse),
    ),
    tag = "auction",
)]
pub async fn get_auctions(
    State(store): State<Arc<ServerState>>,
    Query(query): Query<GetAuctionsQueryParams>,
) -> Result<Json<Auctions>, RestError> {
    let auctions = match query.status.unwrap_or_default() {
        AuctionStatus::Pending => store.auction_service.get_pending_auctions(),
        AuctionStatus::Active => store.auction_service.get_active_auctions(),
        AuctionStatus::Completed => store.auction_service.get_completed_auctions(),
    };
    Ok(Json(Auctions {
        items: auctions.into_iter().map(Into::into).collect(),
    }))
}

/// Query a specific auction by id.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}",
    params(("auction_id" = String, Path, description = "Auction id to query for")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "The requested auction", body = Auction),
        (status = 401, description = "Credential was missing or invalid", body = ErrorBodyResponse),
        (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
    ),
    tag = "auction",
)]
pub async fn get_auction(
    Auth(credential): Auth,
    State(store): State<Arc<ServerState>>,
    Path(auction_id): Path<AuctionId>,
) -> Result<Json<Auction>, RestError> {
    let auction = store.auction_service.get_auction(GetAuctionInput {
        credential,
        auction_id,
    })?;
    Ok(Json(auction.into()))
}

/// Replace the schedule and reserve price of an auction.
///
/// Auctions cannot be updated while bidding is open. Bids already placed are kept.
#[utoipa::path(put, path = "/v1/auctions/{auction_id}", request_body = AuctionCreate,
    params(("auction_id" = String, Path, description = "Auction id to update")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "The updated auction", body = Auction),
        (status = 400, response = ErrorBodyResponse),
        (status = 401, description = "Credential was missing or invalid", body = ErrorBodyResponse),
        (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
        (status = 409, description = "Auction is in progress", body = ErrorBodyResponse),
    ),
    tag = "auction",
)]
pub async fn put_auction(
    Auth(credential): Auth,
    State(store): State<Arc<ServerState>>,
    Path(auction_id): Path<AuctionId>,
    Json(auction_update): Json<AuctionCreate>,
) -> Result<Json<Auction>, RestError> {
    let auction = entities::Auction::try_new(
        auction_id,
        auction_update.start,
        auction_update.end,
        auction_update.reserve_price,
    )
    .map_err(entities::StoreError::from)?;
    let auction = store.auction_service.update_auction(UpdateAuctionInput {
        credential,
        auction_id,
        auction,
    })?;
    Ok(Json(auction.into()))
}

/// Remove an auction. Removing an auction that does not exist succeeds.
#[utoipa::path(delete, path = "/v1/auctions/{auction_id}",
    params(("auction_id" = String, Path, description = "Auction id to remove")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Auction was removed"),
        (status = 401, description = "Credential was missing or invalid", body = ErrorBodyResponse),
    ),
    tag = "auction",
)]
pub async fn delete_auction(
    Auth(credential): Auth,
    State(store): State<Arc<ServerState>>,
    Path(auction_id): Path<AuctionId>,
) -> Result<(), RestError> {
    store
        .auction_service
        .delete_auction(DeleteAuctionInput {
            credential,
            auction_id,
        })?;
    Ok(())
}

/// Bid on an open auction.
///
/// The bid must reach the reserve price and the auction must be in progress when the bid arrives.
#[utoipa::path(post, path = "/v1/auctions/{auction_id}/bids", request_body = BidCreate,
    params(("auction_id" = String, Path, description = "Auction id to bid on")),
    responses(
        (status = 200, description = "Bid was accepted", body = Bid),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
    ),
    tag = "auction",
)]
pub async fn post_bid(
    State(store): State<Arc<ServerState>>,
    Path(auction_id): Path<AuctionId>,
    Json(bid_create): Json<BidCreate>,
) -> Result<Json<Bid>, RestError> {
    let bid = store.auction_service.place_bid(PlaceBidInput {
        auction_id,
        bidder_id: bid_create.bidder_id,
        price: bid_create.price,
    })?;
    Ok(Json(bid.into()))
}

/// Query the winning bid of a closed auction.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}/result",
    params(("auction_id" = String, Path, description = "Auction id to query the result for")),
    responses(
        (status = 200, description = "The winning bid", body = AuctionResult),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
    ),
    tag = "auction",
)]
pub async fn get_auction_result(
    State(store): State<Arc<ServerState>>,
    Path(auction_id): Path<AuctionId>,
) -> Result<Json<AuctionResult>, RestError> {
    let winner = store
        .auction_service
        .get_auction_result(GetAuctionResultInput { auction_id })?;
    Ok(Json(AuctionResult {
        auction_id,
        bidder_id: winner.bidder_id,
        price: winner.price,
    }))
}

pub fn get_routes() -> Router<Arc<ServerState>> {
    WrappedRouter::new()
        .route(Route::PostAuction, post_auction)
        .route(Route::GetAuctions, get_auctions)
        .route(Route::GetAuction, get_auction)
        .route(Route::PutAuction, put_auction)
        .route(Route::DeleteAuction, delete_auction)
        .route(Route::PostBid, post_bid)
        .route(Route::GetAuctionResult, get_auction_result)
        .router
}

impl From<entities::Bid> for Bid {
    fn from(bid: entities::Bid) -> Self {
        Bid {
            bidder_id:    bid.bidder_id,
            price:        bid.price,
            submitted_at: bid.submitted_at,
        }
    }
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        Auction {
            id:            auction.id(),
            start:         auction.start(),
            end:           auction.end(),
            reserve_price: auction.reserve_price().clone(),
            bids:          auction.bids().iter().cloned().map(Into::into).collect(),
        }
    }
}
