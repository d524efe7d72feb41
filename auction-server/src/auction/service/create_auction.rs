use {
    super::Service,
    crate::{
        auction::entities,
        kernel::auth::Credential,
    },
    time::OffsetDateTime,
};

pub struct CreateAuctionInput {
    pub credential:    Credential,
    pub start:         OffsetDateTime,
    pub end:           OffsetDateTime,
    pub reserve_price: entities::BidAmount,
}

impl Service {
    /// Builds an auction with a freshly generated id and stores it.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id))]
    pub fn create_auction(
        &self,
        input: CreateAuctionInput,
    ) -> Result<entities::Auction, entities::StoreError> {
        self.authorize(&input.credential)?;
        let auction = entities::Auction::try_new(
            self.id_generator.generate(),
            input.start,
            input.end,
            input.reserve_price,
        )?;
        tracing::Span::current().record("auction_id", auction.id().to_string());
        self.repo.add_auction(auction.clone())?;
        tracing::info!("Auction created");
        Ok(auction)
    }
}
