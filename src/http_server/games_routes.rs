//! Game and genre HTTP routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::QueryClient;
use crate::projection::ProjectedRecord;
use crate::store::{GameStore, NewGame};

use super::errors::ApiError;
use super::response::{CreatedResponse, ListResponse, MutationResponse, SingleResponse};

/// Body for `PUT /games/:game_id/price`
#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub sales_price: f64,
}

/// Routes over the game catalog
pub fn games_routes<C: QueryClient + 'static>(store: Arc<GameStore<C>>) -> Router {
    Router::new()
        .route("/games", get(list_games::<C>))
        .route("/games", post(add_game::<C>))
        .route("/games/recent", get(recent_releases::<C>))
        .route("/games/developer/:developer_id", get(games_by_developer::<C>))
        .route("/games/:game_id", get(game_details::<C>))
        .route("/games/:game_id", delete(delete_game::<C>))
        .route("/games/:game_id/price", put(update_price::<C>))
        .route("/genres", get(list_genres::<C>))
        .route("/genres/:genre_id/games", get(games_in_genre::<C>))
        .with_state(store)
}

async fn list_games<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
) -> Result<Json<ListResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(ListResponse::new(store.list_games()?)))
}

async fn add_game<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
    Json(game): Json<NewGame>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    store.add_game(&game)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(game.game_id))))
}

async fn game_details<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
    Path(game_id): Path<i64>,
) -> Result<Json<SingleResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(SingleResponse::new(store.game_details(game_id)?)))
}

async fn update_price<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
    Path(game_id): Path<i64>,
    Json(body): Json<UpdatePriceRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let affected = store.update_price(game_id, body.sales_price)?;
    Ok(Json(MutationResponse::new(affected)))
}

async fn delete_game<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
    Path(game_id): Path<i64>,
) -> Result<Json<MutationResponse>, ApiError> {
    let affected = store.delete_game(game_id)?;
    Ok(Json(MutationResponse::new(affected)))
}

async fn games_by_developer<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
    Path(developer_id): Path<i64>,
) -> Result<Json<ListResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(ListResponse::new(store.games_by_developer(developer_id)?)))
}

async fn list_genres<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
) -> Result<Json<ListResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(ListResponse::new(store.list_genres()?)))
}

async fn games_in_genre<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
    Path(genre_id): Path<i64>,
) -> Result<Json<ListResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(ListResponse::new(store.games_in_genre(genre_id)?)))
}

async fn recent_releases<C: QueryClient + 'static>(
    State(store): State<Arc<GameStore<C>>>,
) -> Result<Json<ListResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(ListResponse::new(store.recent_releases()?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteClient;

    #[test]
    fn test_router_builds() {
        let client = SqliteClient::open_in_memory().unwrap();
        let store = Arc::new(GameStore::new(Arc::new(client)));
        let _router = games_routes(store);
    }
}
