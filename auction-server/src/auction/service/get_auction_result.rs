use {
    super::Service,
    crate::auction::entities,
};

pub struct GetAuctionResultInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// The winning bid of an auction that is no longer in progress.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id))]
    pub fn get_auction_result(
        &self,
        input: GetAuctionResultInput,
    ) -> Result<entities::Bid, entities::StoreError> {
        let auction = self
            .repo
            .get_auction(input.auction_id)
            .ok_or(entities::StoreError::NotFound(input.auction_id))?;
        let winner = auction.get_result(self.clock.now())?;
        Ok(winner.clone())
    }
}
