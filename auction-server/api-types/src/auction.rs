use {
    crate::{
        Routable,
        RouteProperties,
    },
    bigdecimal::BigDecimal,
    serde::{
        Deserialize,
        Serialize,
    },
    serde_with::{
        serde_as,
        DisplayFromStr,
    },
    strum::AsRefStr,
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type AuctionId = Uuid;
pub type BidderId = String;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    /// The auction has not started yet.
    Pending,
    /// The auction is accepting bids.
    #[default]
    Active,
    /// The auction has ended and its result can be queried.
    Completed,
}

#[serde_as]
#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
pub struct Bid {
    /// The id of the bidding party.
    #[schema(example = "bidder-01")]
    pub bidder_id:    BidderId,
    /// The bid price as a decimal string.
    #[schema(example = "21.45", value_type = String)]
    #[serde_as(as = "DisplayFromStr")]
    pub price:        BigDecimal,
    /// The time server received the bid formatted in rfc3339.
    #[schema(example = "2024-05-23T21:26:57.329954Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

#[serde_as]
#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct Auction {
    /// The unique id of the auction.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:            AuctionId,
    /// The time bidding opens, exclusive, formatted in rfc3339.
    #[schema(example = "2024-05-23T21:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub start:         OffsetDateTime,
    /// The time bidding closes, exclusive, formatted in rfc3339.
    #[schema(example = "2024-05-24T21:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub end:           OffsetDateTime,
    /// The minimum price a bid must reach to be accepted.
    #[schema(example = "20.45", value_type = String)]
    #[serde_as(as = "DisplayFromStr")]
    pub reserve_price: BigDecimal,
    /// The bids placed on this auction in the order they were received.
    pub bids:          Vec<Bid>,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct Auctions {
    pub items: Vec<Auction>,
}

#[serde_as]
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AuctionCreate {
    /// The time bidding opens formatted in rfc3339. Must be before `end`.
    #[schema(example = "2024-05-23T21:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub start:         OffsetDateTime,
    /// The time bidding closes formatted in rfc3339.
    #[schema(example = "2024-05-24T21:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub end:           OffsetDateTime,
    /// The reserve price of the auction. Must not be negative.
    #[schema(example = "20.45", value_type = String)]
    #[serde_as(as = "DisplayFromStr")]
    pub reserve_price: BigDecimal,
}

#[serde_as]
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct BidCreate {
    /// The id of the bidding party.
    #[schema(example = "bidder-01")]
    pub bidder_id: BidderId,
    /// The bid price as a decimal string.
    #[schema(example = "21.45", value_type = String)]
    #[serde_as(as = "DisplayFromStr")]
    pub price:     BigDecimal,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
pub struct GetAuctionsQueryParams {
    /// Lifecycle status to filter auctions by. Defaults to active auctions.
    #[param(example = "active", value_type = Option<AuctionStatus>)]
    pub status: Option<AuctionStatus>,
}

#[serde_as]
#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct AuctionResult {
    /// The id of the concluded auction.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
    /// The winning bidder.
    #[schema(example = "bidder-01")]
    pub bidder_id:  BidderId,
    /// The winning price.
    #[schema(example = "21.85", value_type = String)]
    #[serde_as(as = "DisplayFromStr")]
    pub price:      BigDecimal,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "")]
    PostAuction,
    #[strum(serialize = "")]
    GetAuctions,
    #[strum(serialize = ":auction_id")]
    GetAuction,
    #[strum(serialize = ":auction_id")]
    PutAuction,
    #[strum(serialize = ":auction_id")]
    DeleteAuction,
    #[strum(serialize = ":auction_id/bids")]
    PostBid,
    #[strum(serialize = ":auction_id/result")]
    GetAuctionResult,
}

impl Routable for Route {
    fn properties(&self) -> RouteProperties {
        let full_path = format!(
            "{}{}{}",
            crate::Route::V1.as_ref(),
            crate::Route::Auction.as_ref(),
            self.as_ref()
        )
        .trim_end_matches('/')
        .to_string();
        let method = match self {
            Route::PostAuction | Route::PostBid => http::Method::POST,
            Route::GetAuctions | Route::GetAuction | Route::GetAuctionResult => http::Method::GET,
            Route::PutAuction => http::Method::PUT,
            Route::DeleteAuction => http::Method::DELETE,
        };
        RouteProperties { method, full_path }
    }
}
