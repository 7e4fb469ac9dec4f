//! Repository for the `users` table.

use keystone_core::linking::LinkRef;
use keystone_core::object_id::new_object_id;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, is_active, roles, time_created";

/// Lookups and admin back-reference writes for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row. The username is stored
    /// lowercased.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, username, email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(new_object_id())
            .bind(input.username.to_lowercase())
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username. The lookup is lowercased to match storage.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username.to_lowercase())
            .fetch_optional(pool)
            .await
    }

    /// Set `roles.admin` on a user. Returns `None` if no row with `id` exists.
    pub async fn link_admin(
        pool: &PgPool,
        id: &str,
        admin: &LinkRef,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET roles = jsonb_set(roles, '{{admin}}', $2::jsonb, true)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(Json(admin))
            .fetch_optional(pool)
            .await
    }

    /// Remove `roles.admin` from a user. Idempotent.
    pub async fn unlink_admin(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET roles = roles - 'admin'
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
