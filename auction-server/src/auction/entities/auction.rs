use {
    super::{
        Bid,
        BidAmount,
        BidError,
        ConstructionError,
        ResultError,
    },
    bigdecimal::Signed,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type AuctionId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionStatus {
    Pending,
    Active,
    Completed,
}

/// A time-boxed auction with a reserve price.
///
/// Bidding is open strictly between `start` and `end`. Both bounds are exclusive, so at exactly
/// `start` the auction is neither pending nor in progress, and at exactly `end` it is completed.
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    id:            AuctionId,
    start:         OffsetDateTime,
    end:           OffsetDateTime,
    reserve_price: BidAmount,
    bids:          Vec<Bid>,
}

impl Auction {
    pub fn try_new(
        id: AuctionId,
        start: OffsetDateTime,
        end: OffsetDateTime,
        reserve_price: BidAmount,
    ) -> Result<Self, ConstructionError> {
        if start >= end {
            return Err(ConstructionError::InvalidTimeRange);
        }
        if reserve_price.is_negative() {
            return Err(ConstructionError::InvalidPrice);
        }
        Ok(Self {
            id,
            start,
            end,
            reserve_price,
            bids: vec![],
        })
    }

    pub fn id(&self) -> AuctionId {
        self.id
    }

    pub fn start(&self) -> OffsetDateTime {
        self.start
    }

    pub fn end(&self) -> OffsetDateTime {
        self.end
    }

    pub fn reserve_price(&self) -> &BidAmount {
        &self.reserve_price
    }

    /// Bids in the order they were accepted.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn in_progress(&self, now: OffsetDateTime) -> bool {
        self.start < now && now < self.end
    }

    pub fn status(&self, now: OffsetDateTime) -> Option<AuctionStatus> {
        if now < self.start {
            Some(AuctionStatus::Pending)
        } else if self.in_progress(now) {
            Some(AuctionStatus::Active)
        } else if now >= self.end {
            Some(AuctionStatus::Completed)
        } else {
            None
        }
    }

    /// Accepts any bid at or above the reserve price while the auction is in progress. The bid is
    /// not compared against the current highest bid.
    pub fn add_bid(&mut self, bid: Bid, now: OffsetDateTime) -> Result<(), BidError> {
        if !self.in_progress(now) {
            return Err(BidError::AuctionClosed);
        }
        if bid.price < self.reserve_price {
            return Err(BidError::BidTooLow);
        }
        self.bids.push(bid);
        Ok(())
    }

    pub fn get_result(&self, now: OffsetDateTime) -> Result<&Bid, ResultError> {
        if self.in_progress(now) {
            return Err(ResultError::AuctionInProgress);
        }
        let mut bids = self.bids.iter();
        let first = bids.next().ok_or(ResultError::NoBids)?;
        Ok(bids.fold(first, |winner, bid| {
            if bid.outbids(winner) {
                bid
            } else {
                winner
            }
        }))
    }

    /// Takes over the terms of `replacement` while keeping this auction's id and bids.
    pub fn supersede(&mut self, replacement: Auction) {
        self.start = replacement.start;
        self.end = replacement.end;
        self.reserve_price = replacement.reserve_price;
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        time::{
            macros::datetime,
            Duration,
        },
    };

    fn price(value: &str) -> BidAmount {
        value.parse().unwrap()
    }

    fn get_auction() -> Auction {
        Auction::try_new(
            Uuid::new_v4(),
            datetime!(2019-11-18 0:00 UTC),
            datetime!(2019-11-19 0:00 UTC),
            price("20.45"),
        )
        .unwrap()
    }

    #[test]
    fn test_try_new() {
        let start = datetime!(2019-11-18 0:00 UTC);
        let end = datetime!(2019-11-19 0:00 UTC);

        let auction = Auction::try_new(Uuid::new_v4(), start, end, price("20.45")).unwrap();
        assert!(auction.bids().is_empty());

        assert_eq!(
            Auction::try_new(Uuid::new_v4(), end, start, price("20.45")),
            Err(ConstructionError::InvalidTimeRange)
        );
        assert_eq!(
            Auction::try_new(Uuid::new_v4(), start, start, price("20.45")),
            Err(ConstructionError::InvalidTimeRange)
        );
        assert_eq!(
            Auction::try_new(Uuid::new_v4(), start, end, price("-20.45")),
            Err(ConstructionError::InvalidPrice)
        );
        assert!(Auction::try_new(Uuid::new_v4(), start, end, price("0")).is_ok());
    }

    #[test]
    fn test_in_progress_boundaries() {
        let auction = get_auction();
        let tick = Duration::nanoseconds(1);

        assert!(!auction.in_progress(auction.start() - tick));
        assert!(!auction.in_progress(auction.start()));
        assert!(auction.in_progress(auction.start() + tick));
        assert!(auction.in_progress(auction.end() - tick));
        assert!(!auction.in_progress(auction.end()));
        assert!(!auction.in_progress(auction.end() + tick));
    }

    #[test]
    fn test_status() {
        let auction = get_auction();
        let tick = Duration::nanoseconds(1);

        assert_eq!(
            auction.status(auction.start() - tick),
            Some(AuctionStatus::Pending)
        );
        assert_eq!(auction.status(auction.start()), None);
        assert_eq!(
            auction.status(auction.start() + tick),
            Some(AuctionStatus::Active)
        );
        assert_eq!(auction.status(auction.end()), Some(AuctionStatus::Completed));
    }

    #[test]
    fn test_add_bid() {
        let mut auction = get_auction();
        let during = auction.start() + Duration::hours(1);

        assert_eq!(
            auction.add_bid(Bid::new("01", price("30"), during), auction.start()),
            Err(BidError::AuctionClosed)
        );
        assert_eq!(
            auction.add_bid(Bid::new("01", price("30"), during), auction.end()),
            Err(BidError::AuctionClosed)
        );
        assert_eq!(
            auction.add_bid(Bid::new("01", price("20.44"), during), during),
            Err(BidError::BidTooLow)
        );
        assert!(auction.bids().is_empty());

        auction
            .add_bid(Bid::new("01", price("30"), during), during)
            .unwrap();
        assert_eq!(auction.bids().len(), 1);

        // Lower than the current highest bid but above the reserve price.
        auction
            .add_bid(Bid::new("02", price("20.45"), during), during)
            .unwrap();
        assert_eq!(auction.bids().len(), 2);
        assert_eq!(auction.bids()[1].bidder_id, "02");
    }

    #[test]
    fn test_get_result() {
        let mut auction = get_auction();
        let t0 = auction.start() + Duration::minutes(1);
        let t1 = t0 + Duration::minutes(1);
        let t2 = t1 + Duration::minutes(1);

        auction.add_bid(Bid::new("01", price("21.45"), t0), t0).unwrap();
        auction.add_bid(Bid::new("02", price("21.65"), t1), t1).unwrap();
        auction.add_bid(Bid::new("03", price("21.85"), t2), t2).unwrap();

        assert_eq!(
            auction.get_result(t2),
            Err(ResultError::AuctionInProgress)
        );
        assert_eq!(auction.get_result(auction.end()).unwrap().bidder_id, "03");
    }

    #[test]
    fn test_get_result_tie_goes_to_earliest_bid() {
        let mut auction = get_auction();
        let t0 = auction.start() + Duration::minutes(1);
        let t1 = t0 + Duration::minutes(1);

        auction.add_bid(Bid::new("A", price("20"), t0), t1).unwrap();
        auction.add_bid(Bid::new("B", price("20"), t1), t1).unwrap();
        assert_eq!(auction.get_result(auction.end()).unwrap().bidder_id, "A");

        // Submission time decides even if the earlier bid was appended later.
        let mut auction = get_auction();
        auction.add_bid(Bid::new("B", price("20"), t1), t1).unwrap();
        auction.add_bid(Bid::new("A", price("20.00"), t0), t1).unwrap();
        assert_eq!(auction.get_result(auction.end()).unwrap().bidder_id, "A");
    }

    #[test]
    fn test_get_result_exact_tie_goes_to_first_recorded_bid() {
        let mut auction = get_auction();
        let t0 = auction.start() + Duration::minutes(1);

        auction.add_bid(Bid::new("A", price("20"), t0), t0).unwrap();
        auction.add_bid(Bid::new("B", price("20"), t0), t0).unwrap();
        assert_eq!(auction.get_result(auction.end()).unwrap().bidder_id, "A");

        let mut auction = get_auction();
        auction.add_bid(Bid::new("B", price("20"), t0), t0).unwrap();
        auction.add_bid(Bid::new("A", price("20.0"), t0), t0).unwrap();
        assert_eq!(auction.get_result(auction.end()).unwrap().bidder_id, "B");
    }

    #[test]
    fn test_get_result_without_bids() {
        let auction = get_auction();
        assert_eq!(
            auction.get_result(auction.end()),
            Err(ResultError::NoBids)
        );
        assert_eq!(
            auction.get_result(auction.start()),
            Err(ResultError::NoBids)
        );
    }

    #[test]
    fn test_supersede_keeps_id_and_bids() {
        let mut auction = get_auction();
        let during = auction.start() + Duration::hours(1);
        auction
            .add_bid(Bid::new("01", price("30"), during), during)
            .unwrap();

        let replacement = Auction::try_new(
            Uuid::new_v4(),
            datetime!(2020-01-01 0:00 UTC),
            datetime!(2020-01-02 0:00 UTC),
            price("10"),
        )
        .unwrap();
        let id = auction.id();
        let bids = auction.bids().to_vec();
        auction.supersede(replacement);

        assert_eq!(auction.id(), id);
        assert_eq!(auction.bids(), bids.as_slice());
        assert_eq!(auction.start(), datetime!(2020-01-01 0:00 UTC));
        assert_eq!(auction.reserve_price(), &price("10"));
    }
}
