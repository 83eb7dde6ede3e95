use models::store::Store;

/// Shared handler state: just the store handles, injected at startup.
#[derive(Clone)]
pub struct ServerState {
    pub store: Store,
}
