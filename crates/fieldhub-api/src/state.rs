//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use fieldhub_core::config::AppConfig;
use fieldhub_database::DatabasePool;
use fieldhub_database::repositories::{
    AvailabilityRepository, ClientRepository, JobRepository, ToolRepository, UserRepository,
};
use fieldhub_service::{
    AvailabilityService, ClientService, JobService, ToolService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Services ─────────────────────────────────────────────
    /// Client service
    pub client_service: Arc<ClientService>,
    /// Job service
    pub job_service: Arc<JobService>,
    /// User service
    pub user_service: Arc<UserService>,
    /// Tool service
    pub tool_service: Arc<ToolService>,
    /// Availability service
    pub availability_service: Arc<AvailabilityService>,
}

impl AppState {
    /// Wires repositories and services over the pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let client_repo = Arc::new(ClientRepository::new(pool.clone()));
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let job_repo = Arc::new(JobRepository::new(pool.clone()));
        let tool_repo = Arc::new(ToolRepository::new(pool.clone()));
        let availability_repo = Arc::new(AvailabilityRepository::new(pool));

        Self {
            config: Arc::new(config),
            db,
            client_service: Arc::new(ClientService::new(Arc::clone(&client_repo))),
            job_service: Arc::new(JobService::new(
                job_repo,
                Arc::clone(&client_repo),
                Arc::clone(&user_repo),
            )),
            user_service: Arc::new(UserService::new(Arc::clone(&user_repo))),
            tool_service: Arc::new(ToolService::new(tool_repo)),
            availability_service: Arc::new(AvailabilityService::new(
                availability_repo,
                user_repo,
            )),
        }
    }
}
