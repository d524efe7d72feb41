use {
    super::Service,
    crate::{
        auction::entities,
        kernel::auth::Credential,
    },
};

pub struct AddAuctionInput {
    pub credential: Credential,
    pub auction:    entities::Auction,
}

impl Service {
    /// Stores an auction built by the caller, id included. The HTTP surface creates auctions
    /// through `create_auction` instead, so this is only reached by embedders.
    #[allow(dead_code)]
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction.id()))]
    pub fn add_auction(&self, input: AddAuctionInput) -> Result<(), entities::StoreError> {
        self.authorize(&input.credential)?;
        self.repo.add_auction(input.auction)?;
        tracing::info!("Auction added");
        Ok(())
    }
}
