//! Application state for cafe-cloud

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::notify::Notifier;
use crate::util::hash_password;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// AWS S3 client (uploaded assets)
    pub s3: S3Client,
    /// S3 bucket for uploaded assets
    pub assets_bucket: String,
    /// Public base URL assets are served from
    pub asset_base_url: String,
    /// JWT secret for admin authentication
    pub jwt_secret: String,
    /// Advisory webhook notifier
    pub notifier: Notifier,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let s3 = S3Client::new(&aws_config);

        let state = Self {
            pool,
            s3,
            assets_bucket: config.assets_bucket.clone(),
            asset_base_url: config.asset_base_url.trim_end_matches('/').to_string(),
            jwt_secret: config.jwt_secret.clone(),
            notifier: Notifier::new(config.webhook_url.clone()),
        };

        state.provision_admin(config).await?;

        Ok(state)
    }

    /// Provision the initial admin account from configuration.
    /// Existing accounts are left untouched.
    async fn provision_admin(&self, config: &Config) -> Result<(), BoxError> {
        let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
            tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; no admin provisioned");
            return Ok(());
        };

        let email = email.trim().to_lowercase();
        if crate::db::admins::find_by_email(&self.pool, &email)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hash = hash_password(password)?;
        crate::db::admins::create(&self.pool, &email, &hash, shared::util::now_millis()).await?;
        tracing::info!(email = %email, "Provisioned initial admin account");
        Ok(())
    }
}
