use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub fn remove_auction(&self, auction_id: entities::AuctionId) -> Option<entities::Auction> {
        self.db.remove_auction(auction_id)
    }
}
