//! Game catalog operations

use std::sync::Arc;

use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::db::{QueryClient, SqlValue};
use crate::projection::{project, ProjectedRecord};

use super::errors::{StoreError, StoreResult};

/// How far back `recent_releases` looks, in years
const RECENT_RELEASE_WINDOW_YEARS: i32 = 10;

/// A game to insert
#[derive(Debug, Clone, Deserialize)]
pub struct NewGame {
    pub game_id: i64,
    pub name: String,
    pub release_year: i32,
    pub sales_price: f64,
    pub cust_rating: Option<f64>,
    pub age_rating: String,
    pub console: String,
    pub developer_id: i64,
    pub distributor_id: i64,
}

/// Catalog operations over games and genres
pub struct GameStore<C: QueryClient> {
    client: Arc<C>,
}

impl<C: QueryClient> GameStore<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Name and sales price of every game
    pub fn list_games(&self) -> StoreResult<Vec<ProjectedRecord>> {
        let set = self
            .client
            .fetch("SELECT name, sales_price FROM games", &[])?;
        Ok(project(&set.columns, set.rows)?)
    }

    /// Full record for one game
    pub fn game_details(&self, game_id: i64) -> StoreResult<ProjectedRecord> {
        let set = self.client.fetch(
            "SELECT * FROM games WHERE game_id = ?1",
            &[SqlValue::from(game_id)],
        )?;
        let mut records = project(&set.columns, set.rows)?;
        if records.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(records.remove(0))
    }

    pub fn add_game(&self, game: &NewGame) -> StoreResult<()> {
        self.client.execute(
            "INSERT INTO games (game_id, name, release_year, sales_price, cust_rating, \
             age_rating, console, developer_id, distributor_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            &[
                SqlValue::from(game.game_id),
                SqlValue::from(game.name.as_str()),
                SqlValue::from(game.release_year),
                SqlValue::from(game.sales_price),
                SqlValue::from(game.cust_rating),
                SqlValue::from(game.age_rating.as_str()),
                SqlValue::from(game.console.as_str()),
                SqlValue::from(game.developer_id),
                SqlValue::from(game.distributor_id),
            ],
        )?;
        Ok(())
    }

    /// Reprice one game; affecting no rows means the id is unknown
    pub fn update_price(&self, game_id: i64, sales_price: f64) -> StoreResult<u64> {
        let affected = self.client.execute(
            "UPDATE games SET sales_price = ?1 WHERE game_id = ?2",
            &[SqlValue::from(sales_price), SqlValue::from(game_id)],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(affected)
    }

    pub fn delete_game(&self, game_id: i64) -> StoreResult<u64> {
        let affected = self.client.execute(
            "DELETE FROM games WHERE game_id = ?1",
            &[SqlValue::from(game_id)],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(affected)
    }

    /// Names of every game by one developer
    pub fn games_by_developer(&self, developer_id: i64) -> StoreResult<Vec<ProjectedRecord>> {
        let set = self.client.fetch(
            "SELECT name FROM games WHERE developer_id = ?1",
            &[SqlValue::from(developer_id)],
        )?;
        Ok(project(&set.columns, set.rows)?)
    }

    pub fn list_genres(&self) -> StoreResult<Vec<ProjectedRecord>> {
        let set = self.client.fetch("SELECT genre_id, name FROM genres", &[])?;
        Ok(project(&set.columns, set.rows)?)
    }

    /// Names of every game tagged with one genre
    pub fn games_in_genre(&self, genre_id: i64) -> StoreResult<Vec<ProjectedRecord>> {
        let set = self.client.fetch(
            "SELECT name FROM games JOIN game_genres USING (game_id) WHERE genre_id = ?1",
            &[SqlValue::from(genre_id)],
        )?;
        Ok(project(&set.columns, set.rows)?)
    }

    /// Games released inside the recent window. The cutoff year is
    /// computed here and bound as a parameter.
    pub fn recent_releases(&self) -> StoreResult<Vec<ProjectedRecord>> {
        let cutoff = Utc::now().year() - RECENT_RELEASE_WINDOW_YEARS;
        let set = self.client.fetch(
            "SELECT name, release_year FROM games WHERE release_year >= ?1",
            &[SqlValue::from(cutoff)],
        )?;
        Ok(project(&set.columns, set.rows)?)
    }
}
