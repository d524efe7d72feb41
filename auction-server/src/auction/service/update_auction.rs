use {
    super::Service,
    crate::{
        auction::entities,
        kernel::auth::Credential,
    },
};

pub struct UpdateAuctionInput {
    pub credential: Credential,
    pub auction_id: entities::AuctionId,
    /// The new terms. Its id and bids are ignored.
    pub auction:    entities::Auction,
}

impl Service {
    /// Replaces the terms of an auction that is not in progress. Bids already placed on the stored
    /// auction are kept. Returns the auction as updated.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id))]
    pub fn update_auction(
        &self,
        input: UpdateAuctionInput,
    ) -> Result<entities::Auction, entities::StoreError> {
        self.authorize(&input.credential)?;
        let auction = self
            .repo
            .update_auction(input.auction_id, input.auction, self.clock.now())?;
        tracing::info!("Auction updated");
        Ok(auction)
    }
}
