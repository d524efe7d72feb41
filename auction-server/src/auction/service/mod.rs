use {
    super::{
        entities,
        repository::Repository,
    },
    crate::kernel::{
        auth::{
            Authorizer,
            Credential,
        },
        clock::Clock,
        id::IdGenerator,
    },
    std::sync::Arc,
};

pub mod add_auction;
pub mod create_auction;
pub mod delete_auction;
pub mod get_auction;
pub mod get_auction_result;
pub mod get_auctions;
pub mod place_bid;
pub mod update_auction;

pub struct ServiceInner {
    repo:         Arc<Repository>,
    authorizer:   Arc<dyn Authorizer>,
    clock:        Arc<dyn Clock>,
    id_generator: Arc<dyn IdGenerator>,
}

/// The auction registry as seen by callers: lifecycle queries, credential-gated CRUD, bidding
/// and result lookup.
#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        repo: Repository,
        authorizer: Arc<dyn Authorizer>,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            repo: Arc::new(repo),
            authorizer,
            clock,
            id_generator,
        }))
    }

    fn authorize(&self, credential: &Credential) -> Result<(), entities::StoreError> {
        if self.authorizer.is_authorized(credential) {
            Ok(())
        } else {
            tracing::info!("Rejected request with an invalid credential");
            Err(entities::StoreError::Unauthorized)
        }
    }
}
