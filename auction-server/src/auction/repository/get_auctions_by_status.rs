use {
    super::Repository,
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Repository {
    /// Auctions in the given lifecycle state at `now`, ordered by start time and then id.
    pub fn get_auctions_by_status(
        &self,
        status: entities::AuctionStatus,
        now: OffsetDateTime,
    ) -> Vec<entities::Auction> {
        let mut auctions: Vec<entities::Auction> = self
            .db
            .get_auctions()
            .into_iter()
            .filter(|auction| auction.status(now) == Some(status))
            .collect();
        auctions.sort_by_key(|auction| (auction.start(), auction.id()));
        auctions
    }
}
