//! Repository for the `admins` table.

use keystone_core::groups::{GroupMap, PermissionMap};
use keystone_core::linking::LinkRef;
use keystone_core::naming::AdminName;
use keystone_core::object_id::new_object_id;
use keystone_core::paging::offset_for;
use keystone_core::sorting::{order_by_clause, SortKey};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::admin::{Admin, CreateAdmin};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, groups, permissions, linked_user, time_created";

/// Provides CRUD operations for admins.
pub struct AdminRepo;

impl AdminRepo {
    /// Insert a new admin with a freshly generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(new_object_id())
            .bind(Json(&input.name))
            .fetch_one(pool)
            .await
    }

    /// Find an admin by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE id = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of admins in the given order, plus the total count.
    ///
    /// `page` and `limit` are expected to be clamped already.
    pub async fn paged_find(
        pool: &PgPool,
        sort: &[SortKey],
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Admin>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admins ORDER BY {} LIMIT $1 OFFSET $2",
            order_by_clause(sort)
        );
        let admins = sqlx::query_as::<_, Admin>(&query)
            .bind(limit)
            .bind(offset_for(page, limit))
            .fetch_all(pool)
            .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins")
            .fetch_one(pool)
            .await?;

        Ok((admins, total.0))
    }

    /// Replace an admin's name. Returns `None` if no row with `id` exists.
    pub async fn update_name(
        pool: &PgPool,
        id: &str,
        name: &AdminName,
    ) -> Result<Option<Admin>, sqlx::Error> {
        Self::set_field(pool, id, "name", Json(name)).await
    }

    /// Replace an admin's group memberships.
    pub async fn update_groups(
        pool: &PgPool,
        id: &str,
        groups: &GroupMap,
    ) -> Result<Option<Admin>, sqlx::Error> {
        Self::set_field(pool, id, "groups", Json(groups)).await
    }

    /// Replace an admin's permission flags.
    pub async fn update_permissions(
        pool: &PgPool,
        id: &str,
        permissions: &PermissionMap,
    ) -> Result<Option<Admin>, sqlx::Error> {
        Self::set_field(pool, id, "permissions", Json(permissions)).await
    }

    /// Point an admin at a user account.
    pub async fn link_user(
        pool: &PgPool,
        id: &str,
        user: &LinkRef,
    ) -> Result<Option<Admin>, sqlx::Error> {
        Self::set_field(pool, id, "linked_user", Json(user)).await
    }

    /// Clear an admin's user reference. Succeeds (returning the row) even
    /// when no user was linked.
    pub async fn unlink_user(pool: &PgPool, id: &str) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!(
            "UPDATE admins SET linked_user = NULL
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an admin. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `UPDATE admins SET <column> = $2 WHERE id = $1`, for the JSONB columns.
    ///
    /// `column` is always one of the literals passed by the methods above.
    async fn set_field<T>(
        pool: &PgPool,
        id: &str,
        column: &'static str,
        value: Json<T>,
    ) -> Result<Option<Admin>, sqlx::Error>
    where
        T: serde::Serialize + Send + Sync,
    {
        let query = format!(
            "UPDATE admins SET {column} = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(pool)
            .await
    }
}
