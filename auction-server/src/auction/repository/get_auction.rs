use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub fn get_auction(&self, auction_id: entities::AuctionId) -> Option<entities::Auction> {
        self.db.get_auction(auction_id)
    }
}
