use {
    bigdecimal::BigDecimal,
    time::OffsetDateTime,
};

pub type BidderId = String;
pub type BidAmount = BigDecimal;

#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bidder_id:    BidderId,
    pub price:        BidAmount,
    /// Only used to break ties between bids with the same price.
    pub submitted_at: OffsetDateTime,
}

impl Bid {
    pub fn new(
        bidder_id: impl Into<BidderId>,
        price: BidAmount,
        submitted_at: OffsetDateTime,
    ) -> Self {
        Self {
            bidder_id: bidder_id.into(),
            price,
            submitted_at,
        }
    }

    /// Whether this bid beats `other` for the auction win.
    ///
    /// A higher price always wins. With equal prices the earlier submission wins, and an exact
    /// tie on both keeps `other`, so the first bid seen in a scan stays the incumbent.
    pub fn outbids(&self, other: &Bid) -> bool {
        self.price > other.price
            || (self.price == other.price && self.submitted_at < other.submitted_at)
    }
}
