//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{MessageLedger, MessageRepository, UserDirectory, UserRepository};
use crate::domain::{ExistenceGate, MessageLedgerService, UserDirectoryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
    pub messages: Arc<dyn MessageLedger>,
    pub gate: ExistenceGate,
}

impl HttpState {
    /// Bundle the driving ports. The gate consults `users`.
    pub fn new(users: Arc<dyn UserDirectory>, messages: Arc<dyn MessageLedger>) -> Self {
        let gate = ExistenceGate::new(Arc::clone(&users));
        Self {
            users,
            messages,
            gate,
        }
    }

    /// Wire the domain services over a pair of Storage Gateway repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use postbox::inbound::http::state::HttpState;
    /// use postbox::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let _state = HttpState::from_repositories(Arc::clone(&store), store);
    /// ```
    pub fn from_repositories<U, M>(users: Arc<U>, messages: Arc<M>) -> Self
    where
        U: UserRepository + 'static,
        M: MessageRepository + 'static,
    {
        let directory: Arc<dyn UserDirectory> = Arc::new(UserDirectoryService::new(users));
        let ledger: Arc<dyn MessageLedger> =
            Arc::new(MessageLedgerService::new(messages, Arc::clone(&directory)));
        Self::new(directory, ledger)
    }
}
