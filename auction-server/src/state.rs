use crate::auction::service::Service as AuctionService;

pub struct ServerState {
    pub auction_service: AuctionService,
}
