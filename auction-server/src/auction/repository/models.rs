use {
    super::{
        entities,
        InMemoryStore,
    },
    dashmap::mapref::entry::Entry,
    std::fmt::Debug,
};

/// A mutation applied to a stored auction while its entry is locked for writing. Returning an
/// error must leave the auction untouched.
pub type AuctionUpdate<'a> =
    Box<dyn FnOnce(&mut entities::Auction) -> Result<(), entities::StoreError> + Send + 'a>;

/// Storage backend for auctions. Readers always receive owned snapshots; all writes go through
/// the backend so it can serialize them per auction.
pub trait Database: Debug + Send + Sync + 'static {
    /// Fails with `DuplicateId` if an auction with the same id is already stored.
    fn add_auction(&self, auction: entities::Auction) -> Result<(), entities::StoreError>;
    fn get_auction(&self, auction_id: entities::AuctionId) -> Option<entities::Auction>;
    fn get_auctions(&self) -> Vec<entities::Auction>;
    fn remove_auction(&self, auction_id: entities::AuctionId) -> Option<entities::Auction>;
    /// Returns the auction as it stands once the update is applied, read before the entry is
    /// released. Fails with `NotFound` if there is no auction with the given id.
    fn update_auction(
        &self,
        auction_id: entities::AuctionId,
        update: AuctionUpdate<'_>,
    ) -> Result<entities::Auction, entities::StoreError>;
}

impl Database for InMemoryStore {
    fn add_auction(&self, auction: entities::Auction) -> Result<(), entities::StoreError> {
        match self.auctions.entry(auction.id()) {
            Entry::Occupied(entry) => Err(entities::StoreError::DuplicateId(*entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(auction);
                Ok(())
            }
        }
    }

    fn get_auction(&self, auction_id: entities::AuctionId) -> Option<entities::Auction> {
        self.auctions
            .get(&auction_id)
            .map(|auction| auction.value().clone())
    }

    fn get_auctions(&self) -> Vec<entities::Auction> {
        self.auctions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn remove_auction(&self, auction_id: entities::AuctionId) -> Option<entities::Auction> {
        self.auctions
            .remove(&auction_id)
            .map(|(_, auction)| auction)
    }

    fn update_auction(
        &self,
        auction_id: entities::AuctionId,
        update: AuctionUpdate<'_>,
    ) -> Result<entities::Auction, entities::StoreError> {
        let mut auction = self
            .auctions
            .get_mut(&auction_id)
            .ok_or(entities::StoreError::NotFound(auction_id))?;
        update(auction.value_mut())?;
        Ok(auction.value().clone())
    }
}
