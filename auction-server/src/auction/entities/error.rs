use {
    super::AuctionId,
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("auction start must be strictly before its end")]
    InvalidTimeRange,
    #[error("reserve price cannot be negative")]
    InvalidPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BidError {
    #[error("auction is closed, cannot bid")]
    AuctionClosed,
    #[error("bid price is below the reserve price")]
    BidTooLow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("auction is still in progress")]
    AuctionInProgress,
    #[error("no bids for auction, no winner")]
    NoBids,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid credential")]
    Unauthorized,
    #[error("auction {0} already exists")]
    DuplicateId(AuctionId),
    #[error("auction {0} was not found")]
    NotFound(AuctionId),
    #[error("auction {0} is in progress and cannot be updated")]
    AuctionInProgress(AuctionId),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Bid(#[from] BidError),
    #[error(transparent)]
    Result(#[from] ResultError),
}
