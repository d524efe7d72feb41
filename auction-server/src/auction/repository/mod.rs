use {
    super::entities,
    dashmap::DashMap,
};

mod add_auction;
mod add_bid;
mod get_auction;
mod get_auctions_by_status;
mod models;
mod remove_auction;
mod update_auction;

pub use models::*;

/// Process-local auction storage. Every entry sits behind its shard's reader-writer lock, so a
/// mutation of one auction never exposes a partially written record to readers.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub auctions: DashMap<entities::AuctionId, entities::Auction>,
}

#[derive(Debug)]
pub struct Repository {
    pub db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(InMemoryStore::default())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{
            sync::Arc,
            thread,
        },
        time::{
            macros::datetime,
            Duration,
            OffsetDateTime,
        },
        uuid::Uuid,
    };

    const START: OffsetDateTime = datetime!(2019-11-18 0:00 UTC);
    const END: OffsetDateTime = datetime!(2019-11-19 0:00 UTC);

    fn price(value: &str) -> entities::BidAmount {
        value.parse().unwrap()
    }

    fn get_auction(reserve_price: &str) -> entities::Auction {
        entities::Auction::try_new(Uuid::new_v4(), START, END, price(reserve_price)).unwrap()
    }

    fn get_bid(bidder_id: &str, amount: &str, submitted_at: OffsetDateTime) -> entities::Bid {
        entities::Bid::new(bidder_id, price(amount), submitted_at)
    }

    #[test]
    fn test_add_auction_rejects_duplicate_id() {
        let repo = Repository::default();
        let auction = get_auction("10");
        repo.add_auction(auction.clone()).unwrap();

        assert_eq!(
            repo.add_auction(auction.clone()),
            Err(entities::StoreError::DuplicateId(auction.id()))
        );
        assert_eq!(repo.get_auction(auction.id()), Some(auction));
    }

    #[test]
    fn test_remove_auction_is_idempotent() {
        let repo = Repository::default();
        let auction = get_auction("10");
        repo.add_auction(auction.clone()).unwrap();

        assert!(repo.remove_auction(auction.id()).is_some());
        assert!(repo.remove_auction(auction.id()).is_none());
        assert!(repo.get_auction(auction.id()).is_none());
    }

    #[test]
    fn test_get_auctions_by_status() {
        let repo = Repository::default();
        let first = get_auction("10");
        let later = entities::Auction::try_new(
            Uuid::new_v4(),
            START + Duration::hours(2),
            END,
            price("10"),
        )
        .unwrap();
        repo.add_auction(later.clone()).unwrap();
        repo.add_auction(first.clone()).unwrap();

        let now = START + Duration::hours(1);
        let active = repo.get_auctions_by_status(entities::AuctionStatus::Active, now);
        let pending = repo.get_auctions_by_status(entities::AuctionStatus::Pending, now);
        assert_eq!(active, vec![first.clone()]);
        assert_eq!(pending, vec![later.clone()]);

        let now = START + Duration::hours(3);
        let active = repo.get_auctions_by_status(entities::AuctionStatus::Active, now);
        assert_eq!(active, vec![first.clone(), later.clone()]);

        let completed = repo.get_auctions_by_status(entities::AuctionStatus::Completed, END);
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn test_update_auction_keeps_existing_bids() {
        let repo = Repository::default();
        let auction = get_auction("10");
        let during = START + Duration::hours(1);
        repo.add_auction(auction.clone()).unwrap();
        repo.add_bid(auction.id(), get_bid("01", "11", during), during)
            .unwrap();

        let mut replacement = get_auction("5");
        replacement
            .add_bid(get_bid("02", "50", during), during)
            .unwrap();

        assert_eq!(
            repo.update_auction(auction.id(), replacement.clone(), during),
            Err(entities::StoreError::AuctionInProgress(auction.id()))
        );
        assert_eq!(
            repo.get_auction(auction.id()).unwrap().reserve_price(),
            &price("10")
        );

        let returned = repo.update_auction(auction.id(), replacement, END).unwrap();
        let updated = repo.get_auction(auction.id()).unwrap();
        assert_eq!(returned, updated);
        assert_eq!(updated.id(), auction.id());
        assert_eq!(updated.reserve_price(), &price("5"));
        assert_eq!(updated.bids(), &[get_bid("01", "11", during)]);
    }

    #[test]
    fn test_update_missing_auction() {
        let repo = Repository::default();
        let auction_id = Uuid::new_v4();
        assert_eq!(
            repo.update_auction(auction_id, get_auction("10"), START),
            Err(entities::StoreError::NotFound(auction_id))
        );
        assert!(repo.get_auction(auction_id).is_none());
    }

    #[test]
    fn test_add_bid_errors() {
        let repo = Repository::default();
        let auction = get_auction("10");
        let during = START + Duration::hours(1);
        repo.add_auction(auction.clone()).unwrap();

        assert_eq!(
            repo.add_bid(auction.id(), get_bid("01", "9.99", during), during),
            Err(entities::StoreError::Bid(entities::BidError::BidTooLow))
        );
        assert_eq!(
            repo.add_bid(auction.id(), get_bid("01", "20", END), END),
            Err(entities::StoreError::Bid(entities::BidError::AuctionClosed))
        );
        let missing = Uuid::new_v4();
        assert_eq!(
            repo.add_bid(missing, get_bid("01", "20", during), during),
            Err(entities::StoreError::NotFound(missing))
        );
        assert!(repo.get_auction(auction.id()).unwrap().bids().is_empty());
    }

    #[test]
    fn test_concurrent_bids_are_not_lost() {
        const BIDDERS: usize = 64;

        let repo = Arc::new(Repository::default());
        let auction = get_auction("10");
        let during = START + Duration::hours(1);
        repo.add_auction(auction.clone()).unwrap();

        let handles: Vec<_> = (0..BIDDERS)
            .map(|i| {
                let repo = repo.clone();
                let auction_id = auction.id();
                thread::spawn(move || {
                    let bid = get_bid(&format!("bidder-{i}"), &format!("{}", 10 + i), during);
                    repo.add_bid(auction_id, bid, during)
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let auction = repo.get_auction(auction.id()).unwrap();
        assert_eq!(auction.bids().len(), BIDDERS);
        assert_eq!(
            auction.get_result(END).unwrap().bidder_id,
            format!("bidder-{}", BIDDERS - 1)
        );
    }
}
