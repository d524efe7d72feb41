use {
    super::Repository,
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Repository {
    #[tracing::instrument(skip_all, fields(auction_id = %auction_id))]
    pub fn add_bid(
        &self,
        auction_id: entities::AuctionId,
        bid: entities::Bid,
        now: OffsetDateTime,
    ) -> Result<(), entities::StoreError> {
        self.db
            .update_auction(
                auction_id,
                Box::new(move |auction| auction.add_bid(bid, now).map_err(Into::into)),
            )
            .map(|_| ())
    }
}
