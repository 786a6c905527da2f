use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    MatchKey, MatchRecord, ProfileUpdateRequest, Session, Swipe, SwipeAction, User,
};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),
}

/// True when the database rejected an insert on a unique index
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// PostgreSQL client backing all persisted collections
///
/// Holds the connection pool for the user, session, swipe, and match
/// tables. Handlers receive it through the application state rather than
/// a process-wide global.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    // --- users ---

    /// Insert a new user record
    ///
    /// The email must already be lowercased by the caller. A collision on
    /// the unique email index surfaces as `AlreadyExists` instead of a
    /// racy check-then-insert.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, PostgresError> {
        let query = r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
        "#;

        sqlx::query_as::<_, User>(query)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PostgresError::AlreadyExists("Email already registered".to_string())
                } else {
                    e.into()
                }
            })
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, PostgresError> {
        let query = r#"SELECT * FROM users WHERE email = $1"#;

        let user = sqlx::query_as::<_, User>(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, PostgresError> {
        let query = r#"SELECT * FROM users WHERE id = $1"#;

        let user = sqlx::query_as::<_, User>(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Apply a partial profile update; absent fields keep their value
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdateRequest,
    ) -> Result<bool, PostgresError> {
        let query = r#"
            UPDATE users SET
                name = COALESCE($2, name),
                gender = COALESCE($3, gender),
                date_of_birth = COALESCE($4, date_of_birth),
                location = COALESCE($5, location),
                bio = COALESCE($6, bio),
                interests = COALESCE($7, interests),
                photos = COALESCE($8, photos),
                updated_at = NOW()
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(&update.name)
            .bind(&update.gender)
            .bind(update.date_of_birth)
            .bind(&update.location)
            .bind(&update.bio)
            .bind(&update.interests)
            .bind(&update.photos)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Scan user rows in insertion order, up to the given cap
    ///
    /// The cap applies before any exclusion filtering happens downstream.
    pub async fn list_profiles(&self, limit: i64) -> Result<Vec<User>, PostgresError> {
        let query = r#"
            SELECT * FROM users
            ORDER BY created_at ASC
            LIMIT $1
        "#;

        let users = sqlx::query_as::<_, User>(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    // --- sessions ---

    /// Store a freshly issued bearer token
    pub async fn create_session(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Session, PostgresError> {
        let query = r#"
            INSERT INTO sessions (user_id, token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING *
        "#;

        let session = sqlx::query_as::<_, Session>(query)
            .bind(user_id)
            .bind(token)
            .bind(expires_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(session)
    }

    /// Look up a live session; expired tokens are treated as absent
    pub async fn find_session(&self, token: &str) -> Result<Option<Session>, PostgresError> {
        let query = r#"
            SELECT * FROM sessions
            WHERE token = $1 AND expires_at > NOW()
        "#;

        let session = sqlx::query_as::<_, Session>(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;

        Ok(session)
    }

    // --- swipes ---

    /// Append one swipe to the ledger; duplicates for the same pair are allowed
    pub async fn insert_swipe(
        &self,
        user_id: Uuid,
        target_id: Uuid,
        action: SwipeAction,
    ) -> Result<Swipe, PostgresError> {
        let query = r#"
            INSERT INTO swipes (user_id, target_id, action)
            VALUES ($1, $2, $3)
            RETURNING *
        "#;

        let swipe = sqlx::query_as::<_, Swipe>(query)
            .bind(user_id)
            .bind(target_id)
            .bind(action)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(
            "Recorded swipe: {} -> {} ({})",
            user_id,
            target_id,
            action.as_str()
        );

        Ok(swipe)
    }

    /// Whether the ledger holds a like from `user_id` back to `target_id`
    pub async fn has_reciprocal_like(
        &self,
        user_id: Uuid,
        target_id: Uuid,
    ) -> Result<bool, PostgresError> {
        let query = r#"
            SELECT EXISTS (
                SELECT 1 FROM swipes
                WHERE user_id = $1 AND target_id = $2 AND action = $3
            )
        "#;

        let exists: bool = sqlx::query_scalar(query)
            .bind(user_id)
            .bind(target_id)
            .bind(SwipeAction::Like)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// All target ids the user has swiped on, regardless of action
    pub async fn swiped_target_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, PostgresError> {
        let query = r#"SELECT target_id FROM swipes WHERE user_id = $1"#;

        let ids: Vec<Uuid> = sqlx::query_scalar(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    // --- matches ---

    /// Atomically ensure a match row exists for the canonical pair
    ///
    /// Returns true when a new row was created, false when the pair was
    /// already matched. Concurrent identical swipes therefore cannot
    /// produce duplicate rows.
    pub async fn create_match_if_absent(&self, key: MatchKey) -> Result<bool, PostgresError> {
        let query = r#"
            INSERT INTO matches (user_a, user_b)
            VALUES ($1, $2)
            ON CONFLICT (user_a, user_b) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(key.user_a)
            .bind(key.user_b)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All match rows the user appears in, oldest first
    pub async fn matches_for_user(&self, user_id: Uuid) -> Result<Vec<MatchRecord>, PostgresError> {
        let query = r#"
            SELECT * FROM matches
            WHERE user_a = $1 OR user_b = $1
            ORDER BY created_at ASC
        "#;

        let records = sqlx::query_as::<_, MatchRecord>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    // --- diagnostics ---

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    /// Name of the connected database
    pub async fn database_name(&self) -> Result<String, PostgresError> {
        let name: String = sqlx::query_scalar("SELECT current_database()")
            .fetch_one(&self.pool)
            .await?;

        Ok(name)
    }

    /// Names of the persisted tables in the public schema
    pub async fn list_tables(&self) -> Result<Vec<String>, PostgresError> {
        let query = r#"
            SELECT tablename FROM pg_tables
            WHERE schemaname = 'public'
            ORDER BY tablename
        "#;

        let tables: Vec<String> = sqlx::query_scalar(query).fetch_all(&self.pool).await?;

        Ok(tables)
    }
}
