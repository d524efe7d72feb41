#[cfg(test)]
use mockall::automock;
use crate::auction::entities::AuctionId;

#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> AuctionId;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> AuctionId {
        AuctionId::new_v4()
    }
}
