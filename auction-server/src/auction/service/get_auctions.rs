use {
    super::Service,
    crate::auction::entities,
};

pub struct GetAuctionsInput {
    pub status: entities::AuctionStatus,
}

impl Service {
    /// Auctions in the requested lifecycle state, ordered by start time and then id.
    pub fn get_auctions(&self, input: GetAuctionsInput) -> Vec<entities::Auction> {
        self.repo
            .get_auctions_by_status(input.status, self.clock.now())
    }

    pub fn get_active_auctions(&self) -> Vec<entities::Auction> {
        self.get_auctions(GetAuctionsInput {
            status: entities::AuctionStatus::Active,
        })
    }

    pub fn get_pending_auctions(&self) -> Vec<entities::Auction> {
        self.get_auctions(GetAuctionsInput {
            status: entities::AuctionStatus::Pending,
        })
    }

    pub fn get_completed_auctions(&self) -> Vec<entities::Auction> {
        self.get_auctions(GetAuctionsInput {
            status: entities::AuctionStatus::Completed,
        })
    }
}
