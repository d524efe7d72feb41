use {
    super::Service,
    crate::{
        auction::entities,
        kernel::auth::Credential,
    },
};

pub struct GetAuctionInput {
    pub credential: Credential,
    pub auction_id: entities::AuctionId,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id))]
    pub fn get_auction(
        &self,
        input: GetAuctionInput,
    ) -> Result<entities::Auction, entities::StoreError> {
        self.authorize(&input.credential)?;
        self.repo
            .get_auction(input.auction_id)
            .ok_or(entities::StoreError::NotFound(input.auction_id))
    }
}
