use {
    super::Repository,
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Repository {
    /// Replaces the terms of a stored auction, keeping its id and the bids it has already
    /// received. Rejected while the stored auction is in progress at `now`. Returns the updated
    /// auction.
    #[tracing::instrument(skip_all, fields(auction_id = %auction_id))]
    pub fn update_auction(
        &self,
        auction_id: entities::AuctionId,
        replacement: entities::Auction,
        now: OffsetDateTime,
    ) -> Result<entities::Auction, entities::StoreError> {
        self.db.update_auction(
            auction_id,
            Box::new(move |auction| {
                if auction.in_progress(now) {
                    return Err(entities::StoreError::AuctionInProgress(auction_id));
                }
                auction.supersede(replacement);
                Ok(())
            }),
        )
    }
}
