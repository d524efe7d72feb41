use {
    super::Service,
    crate::{
        auction::entities,
        kernel::auth::Credential,
    },
};

pub struct DeleteAuctionInput {
    pub credential: Credential,
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Removes the auction if it exists. Deleting an unknown id succeeds.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id))]
    pub fn delete_auction(&self, input: DeleteAuctionInput) -> Result<(), entities::StoreError> {
        self.authorize(&input.credential)?;
        if self.repo.remove_auction(input.auction_id).is_some() {
            tracing::info!("Auction deleted");
        }
        Ok(())
    }
}
