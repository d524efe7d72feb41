use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    #[tracing::instrument(skip_all, fields(auction_id = %auction.id()))]
    pub fn add_auction(&self, auction: entities::Auction) -> Result<(), entities::StoreError> {
        self.db.add_auction(auction)
    }
}
