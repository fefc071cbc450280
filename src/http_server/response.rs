//! Response envelopes
//!
//! Success payloads are structured; mutation responses carry the
//! affected-row count and never echo the executed statement.

use serde::Serialize;

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Creation response carrying the new row id
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Mutation response carrying the affected-row count
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub affected: u64,
}

impl MutationResponse {
    pub fn new(affected: u64) -> Self {
        Self { affected }
    }
}
