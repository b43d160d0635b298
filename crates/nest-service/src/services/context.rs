//! Service context - dependency container for services
//!
//! Holds all repositories, the JWT service, the mailer, and the ID generator.

use std::sync::Arc;

use nest_common::auth::JwtService;
use nest_common::Mailer;
use nest_core::traits::{
    ApplicationRepository, JobRepository, ProfileRepository, UserRepository,
};
use nest_core::SnowflakeGenerator;
use nest_db::PgPool;

/// Service context containing all dependencies
///
/// The single dependency container passed to every service. It provides
/// access to repositories, the JWT service for tokens, the snowflake
/// generator for IDs, and the mailer for outbound email.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    user_repo: Arc<dyn UserRepository>,
    job_repo: Arc<dyn JobRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    application_repo: Arc<dyn ApplicationRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    mailer: Mailer,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        job_repo: Arc<dyn JobRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        application_repo: Arc<dyn ApplicationRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        mailer: Mailer,
    ) -> Self {
        Self {
            pool,
            user_repo,
            job_repo,
            profile_repo,
            application_repo,
            jwt_service,
            snowflake_generator,
            mailer,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the job repository
    pub fn job_repo(&self) -> &dyn JobRepository {
        self.job_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the application repository
    pub fn application_repo(&self) -> &dyn ApplicationRepository {
        self.application_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Get the mailer
    pub fn mailer(&self) -> &Mailer {
        &self.mailer
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> nest_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("mailer", &self.mailer)
            .finish()
    }
}
