//! # Domain Stores
//!
//! One uniquely named operation per endpoint. Every operation runs
//! static SQL with bound parameters through a `QueryClient` and shapes
//! the result with the projector; request data never reaches SQL text.

pub mod errors;
pub mod games;
pub mod orders;

pub use errors::{StoreError, StoreResult};
pub use games::{GameStore, NewGame};
pub use orders::{NewOnlineOrder, NewOrder, OrderStore, PlacedOnlineOrder};
