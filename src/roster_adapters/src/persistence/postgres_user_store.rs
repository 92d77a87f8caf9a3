use roster_core::{NewUser, Role, User, UserId, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres, Row, postgres::PgRow};
use uuid::Uuid;

use crate::hashing::compute_password_hash;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

fn parse_id(id: &UserId) -> Result<Uuid, UserStoreError> {
    Uuid::parse_str(id.as_str()).map_err(|_| UserStoreError::UserNotFound)
}

fn unexpected(e: sqlx::Error) -> UserStoreError {
    UserStoreError::UnexpectedError(e.to_string())
}

fn user_from_row(row: &PgRow) -> Result<User, sqlx::Error> {
    let id: Uuid = row.try_get("id")?;
    let password_hash: Option<String> = row.try_get("password_hash")?;
    let role: String = row.try_get("role")?;

    Ok(User::new(
        UserId::new(id.to_string()),
        row.try_get("email")?,
        row.try_get("name")?,
        password_hash.map(Secret::new),
        Role::from(role),
    ))
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let password_hash = match user.password() {
            Some(password) => Some(
                compute_password_hash(password.clone())
                    .await
                    .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?,
            ),
            None => None,
        };

        let id = Uuid::new_v4();
        let query = sqlx::query(
            r#"
                INSERT INTO users (id, email, name, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(user.email())
        .bind(user.name())
        .bind(password_hash.as_ref().map(|h| h.expose_secret().as_str()))
        .bind(Role::default().as_str());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error()
                && db_err.is_unique_violation()
            {
                return UserStoreError::Conflict;
            }
            unexpected(e)
        })?;

        Ok(UserId::new(id.to_string()))
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let id = parse_id(id)?;
        let row = sqlx::query(
            r#"
                SELECT id, email, name, password_hash, role
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        user_from_row(&row).map_err(unexpected)
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, password_hash, role
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        user_from_row(&row).map_err(unexpected)
    }

    #[tracing::instrument(name = "Delete user from PostgreSQL", skip_all)]
    async fn delete(&self, id: &UserId) -> Result<(), UserStoreError> {
        let id = parse_id(id)?;
        let result = sqlx::query(
            r#"
                DELETE FROM users
                WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}
