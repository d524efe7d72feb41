use {
    super::Service,
    crate::auction::entities,
    axum_prometheus::metrics,
};

pub const BIDS_TOTAL_METRIC: &str = "auction_bids_total";

pub struct PlaceBidInput {
    pub auction_id: entities::AuctionId,
    pub bidder_id:  entities::BidderId,
    pub price:      entities::BidAmount,
}

impl Service {
    /// Stamps the bid with the current time and appends it to the auction while holding the
    /// auction's write lock.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id, bidder_id = %input.bidder_id))]
    pub fn place_bid(&self, input: PlaceBidInput) -> Result<entities::Bid, entities::StoreError> {
        let now = self.clock.now();
        let bid = entities::Bid::new(input.bidder_id, input.price, now);
        let result = self.repo.add_bid(input.auction_id, bid.clone(), now);

        let label = match &result {
            Ok(()) => "accepted",
            Err(entities::StoreError::Bid(entities::BidError::BidTooLow)) => "too_low",
            Err(entities::StoreError::Bid(entities::BidError::AuctionClosed)) => "closed",
            Err(_) => "invalid",
        };
        metrics::counter!(BIDS_TOTAL_METRIC, "result" => label).increment(1);

        result?;
        tracing::info!(price = %bid.price, "Bid placed");
        Ok(bid)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::service::tests::*,
            kernel::test_utils::ManualClock,
        },
        std::{
            sync::Arc,
            thread,
        },
        time::Duration,
        uuid::Uuid,
    };

    #[test]
    fn test_place_bid() {
        let clock = Arc::new(ManualClock::new(START + Duration::HOUR));
        let service = get_service(clock.clone());
        let auction = add_auction(&service, "20.45");

        let bid = service
            .place_bid(PlaceBidInput {
                auction_id: auction.id(),
                bidder_id:  "01".to_string(),
                price:      price("21.45"),
            })
            .unwrap();
        assert_eq!(bid.submitted_at, START + Duration::HOUR);

        assert_eq!(
            service.place_bid(PlaceBidInput {
                auction_id: auction.id(),
                bidder_id:  "02".to_string(),
                price:      price("20.44"),
            }),
            Err(entities::StoreError::Bid(entities::BidError::BidTooLow))
        );

        let missing = Uuid::new_v4();
        assert_eq!(
            service.place_bid(PlaceBidInput {
                auction_id: missing,
                bidder_id:  "02".to_string(),
                price:      price("30"),
            }),
            Err(entities::StoreError::NotFound(missing))
        );

        clock.set(END);
        assert_eq!(
            service.place_bid(PlaceBidInput {
                auction_id: auction.id(),
                bidder_id:  "02".to_string(),
                price:      price("30"),
            }),
            Err(entities::StoreError::Bid(entities::BidError::AuctionClosed))
        );

        assert_eq!(service.repo.get_auction(auction.id()).unwrap().bids(), &[bid]);
    }

    #[test]
    fn test_place_bid_before_start() {
        let service = get_service(Arc::new(ManualClock::new(START)));
        let auction = add_auction(&service, "10");

        assert_eq!(
            service.place_bid(PlaceBidInput {
                auction_id: auction.id(),
                bidder_id:  "01".to_string(),
                price:      price("30"),
            }),
            Err(entities::StoreError::Bid(entities::BidError::AuctionClosed))
        );
    }

    #[test]
    fn test_concurrent_bidders() {
        const BIDDERS: usize = 32;

        let service = get_service(Arc::new(ManualClock::new(START + Duration::HOUR)));
        let auction = add_auction(&service, "10");

        thread::scope(|scope| {
            for i in 0..BIDDERS {
                let service = service.clone();
                let auction_id = auction.id();
                scope.spawn(move || {
                    service
                        .place_bid(PlaceBidInput {
                            auction_id,
                            bidder_id: format!("bidder-{i}"),
                            price: price("10"),
                        })
                        .unwrap();
                });
            }
        });

        let auction = service.repo.get_auction(auction.id()).unwrap();
        assert_eq!(auction.bids().len(), BIDDERS);
    }
}
