//! Application state.

use std::sync::Arc;

use gitvitals_auth::AuthClient;
use gitvitals_ml_client::MlClient;
use gitvitals_store::{
    PatientRepository, StoreClient, StudentRepository, UserRepository, VitalsRepository,
};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub ml: Arc<MlClient>,
    pub auth: Arc<AuthClient>,
    pub store: StoreClient,
}

impl AppState {
    /// Create application state from the environment.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let ml = MlClient::from_env();
        let auth = AuthClient::from_env()?;
        let store = StoreClient::from_env()?;

        Ok(Self::with_clients(config, ml, auth, store))
    }

    /// Create application state from pre-built clients. Tests point these
    /// at stub servers.
    pub fn with_clients(
        config: ApiConfig,
        ml: MlClient,
        auth: AuthClient,
        store: StoreClient,
    ) -> Self {
        Self {
            config,
            ml: Arc::new(ml),
            auth: Arc::new(auth),
            store,
        }
    }

    /// Repository over user profile rows.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.store.clone())
    }

    /// Repository over student rows.
    pub fn students(&self) -> StudentRepository {
        StudentRepository::new(self.store.clone())
    }

    /// Repository over patient rows.
    pub fn patients(&self) -> PatientRepository {
        PatientRepository::new(self.store.clone())
    }

    /// Repository over vitals readings and baselines.
    pub fn vitals(&self) -> VitalsRepository {
        VitalsRepository::new(self.store.clone())
    }
}
