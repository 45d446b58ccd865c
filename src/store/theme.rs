//! Theme preference store.
//!
//! A single logical preference record, kept under a fixed well-known id
//! so the store would generalize to other singleton settings.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{Result, ShelfError};

/// The fixed id of the singleton preference row.
const SINGLETON_ID: i64 = 1;

/// Global UI theme preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    /// Theme name.
    pub theme: String,
    /// Gradient start color.
    pub gradient_from: String,
    /// Gradient end color.
    pub gradient_to: String,
    /// Whether the gradient is enabled.
    pub gradient_on: bool,
}

impl Default for ThemePreference {
    /// The documented default, returned when no preference was ever set.
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            gradient_from: "#23272a".to_string(),
            gradient_to: "#a5b4fc".to_string(),
            gradient_on: true,
        }
    }
}

/// Repository for the singleton theme preference.
pub struct ThemeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ThemeRepository<'a> {
    /// Create a new ThemeRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current preference, or the default when none is stored.
    pub async fn get(&self) -> Result<ThemePreference> {
        let row: Option<(String, String, String, i64)> = sqlx::query_as(
            "SELECT theme, gradient_from, gradient_to, gradient_on
             FROM theme_preferences WHERE id = ?",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(match row {
            Some((theme, gradient_from, gradient_to, gradient_on)) => ThemePreference {
                theme,
                gradient_from,
                gradient_to,
                gradient_on: gradient_on != 0,
            },
            None => ThemePreference::default(),
        })
    }

    /// Upsert the preference, replacing all fields atomically.
    pub async fn set(&self, prefs: &ThemePreference) -> Result<()> {
        sqlx::query(
            "INSERT INTO theme_preferences (id, theme, gradient_from, gradient_to, gradient_on)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                theme = excluded.theme,
                gradient_from = excluded.gradient_from,
                gradient_to = excluded.gradient_to,
                gradient_on = excluded.gradient_on",
        )
        .bind(SINGLETON_ID)
        .bind(&prefs.theme)
        .bind(&prefs.gradient_from)
        .bind(&prefs.gradient_to)
        .bind(prefs.gradient_on as i64)
        .execute(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_default_preference() {
        let prefs = ThemePreference::default();

        assert_eq!(prefs.theme, "dark");
        assert_eq!(prefs.gradient_from, "#23272a");
        assert_eq!(prefs.gradient_to, "#a5b4fc");
        assert!(prefs.gradient_on);
    }

    #[tokio::test]
    async fn test_get_unset_returns_default() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = ThemeRepository::new(db.pool());

        let prefs = repo.get().await.unwrap();

        assert_eq!(prefs, ThemePreference::default());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = ThemeRepository::new(db.pool());

        let prefs = ThemePreference {
            theme: "light".to_string(),
            gradient_from: "#ffffff".to_string(),
            gradient_to: "#000000".to_string(),
            gradient_on: false,
        };

        repo.set(&prefs).await.unwrap();

        assert_eq!(repo.get().await.unwrap(), prefs);
    }

    #[tokio::test]
    async fn test_set_replaces_all_fields() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = ThemeRepository::new(db.pool());

        let first = ThemePreference {
            theme: "light".to_string(),
            gradient_from: "#111111".to_string(),
            gradient_to: "#222222".to_string(),
            gradient_on: true,
        };
        let second = ThemePreference {
            theme: "solarized".to_string(),
            gradient_from: "#333333".to_string(),
            gradient_to: "#444444".to_string(),
            gradient_on: false,
        };

        repo.set(&first).await.unwrap();
        repo.set(&second).await.unwrap();

        assert_eq!(repo.get().await.unwrap(), second);

        // Only one row ever exists
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM theme_preferences")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_set_is_idempotent() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = ThemeRepository::new(db.pool());

        let prefs = ThemePreference::default();
        repo.set(&prefs).await.unwrap();
        repo.set(&prefs).await.unwrap();

        assert_eq!(repo.get().await.unwrap(), prefs);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(ThemePreference::default()).unwrap();

        assert_eq!(json["theme"], "dark");
        assert_eq!(json["gradient_from"], "#23272a");
        assert_eq!(json["gradient_to"], "#a5b4fc");
        assert_eq!(json["gradient_on"], true);
    }
}
