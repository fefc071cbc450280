//! Customer and order operations

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::{QueryClient, SqlValue};
use crate::projection::{project, ProjectedRecord};

use super::errors::{StoreError, StoreResult};

/// Request body for a new online order
#[derive(Debug, Clone, Deserialize)]
pub struct NewOnlineOrder {
    pub customer_id: i64,
    pub transaction_value: f64,
    /// Walk-in terminal staff account unless stated otherwise
    #[serde(default = "default_employee_id")]
    pub employee_id: i64,
    pub region: String,
    pub postal_code: String,
    pub state: String,
    pub address: String,
    pub city: String,
}

/// Request body for a new in-store order
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub transaction_value: f64,
    #[serde(default = "default_employee_id")]
    pub employee_id: i64,
}

fn default_employee_id() -> i64 {
    1
}

/// Ids minted while placing an online order
#[derive(Debug, Clone, Serialize)]
pub struct PlacedOnlineOrder {
    pub order_id: i64,
    pub online_order_id: i64,
}

/// Operations over customers, orders, and online orders
pub struct OrderStore<C: QueryClient> {
    client: Arc<C>,
}

impl<C: QueryClient> OrderStore<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn list_customers(&self) -> StoreResult<Vec<ProjectedRecord>> {
        let set = self.client.fetch("SELECT * FROM customers", &[])?;
        Ok(project(&set.columns, set.rows)?)
    }

    /// Every order of one customer, joined with the customer record
    pub fn customer_orders(&self, customer_id: i64) -> StoreResult<Vec<ProjectedRecord>> {
        let set = self.client.fetch(
            "SELECT * FROM customers JOIN orders USING (customer_id) WHERE customer_id = ?1",
            &[SqlValue::from(customer_id)],
        )?;
        Ok(project(&set.columns, set.rows)?)
    }

    /// Shipping details for one order; orders placed in store have none
    pub fn online_order_details(&self, order_id: i64) -> StoreResult<ProjectedRecord> {
        let set = self.client.fetch(
            "SELECT * FROM online_orders JOIN orders USING (order_id) WHERE order_id = ?1",
            &[SqlValue::from(order_id)],
        )?;
        let mut records = project(&set.columns, set.rows)?;
        if records.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(records.remove(0))
    }

    /// Insert the order row, then the shipping row referencing it
    pub fn place_online_order(&self, order: &NewOnlineOrder) -> StoreResult<PlacedOnlineOrder> {
        let order_id = self.client.insert(
            "INSERT INTO orders (order_date, transaction_value, employee_id, customer_id) \
             VALUES (?1, ?2, ?3, ?4)",
            &[
                SqlValue::from(Utc::now().to_rfc3339()),
                SqlValue::from(order.transaction_value),
                SqlValue::from(order.employee_id),
                SqlValue::from(order.customer_id),
            ],
        )?;
        let online_order_id = self.client.insert(
            "INSERT INTO online_orders (region, postal_code, state, address, city, order_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            &[
                SqlValue::from(order.region.as_str()),
                SqlValue::from(order.postal_code.as_str()),
                SqlValue::from(order.state.as_str()),
                SqlValue::from(order.address.as_str()),
                SqlValue::from(order.city.as_str()),
                SqlValue::from(order_id),
            ],
        )?;
        Ok(PlacedOnlineOrder {
            order_id,
            online_order_id,
        })
    }

    /// Record an in-store order for an existing customer
    pub fn place_customer_order(&self, customer_id: i64, order: &NewOrder) -> StoreResult<i64> {
        let order_id = self.client.insert(
            "INSERT INTO orders (order_date, transaction_value, employee_id, customer_id) \
             VALUES (?1, ?2, ?3, ?4)",
            &[
                SqlValue::from(Utc::now().to_rfc3339()),
                SqlValue::from(order.transaction_value),
                SqlValue::from(order.employee_id),
                SqlValue::from(customer_id),
            ],
        )?;
        Ok(order_id)
    }

    /// Delete one order, scoped to its owning customer
    pub fn delete_customer_order(&self, customer_id: i64, order_id: i64) -> StoreResult<u64> {
        let affected = self.client.execute(
            "DELETE FROM orders WHERE order_id = ?1 AND customer_id = ?2",
            &[SqlValue::from(order_id), SqlValue::from(customer_id)],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(affected)
    }

    /// Remove the shipping record of one order
    pub fn delete_online_order(&self, order_id: i64) -> StoreResult<u64> {
        let affected = self.client.execute(
            "DELETE FROM online_orders WHERE order_id = ?1",
            &[SqlValue::from(order_id)],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(affected)
    }

    /// Reassign an order to the customer holding `recipient_email`
    pub fn gift_order(&self, order_id: i64, recipient_email: &str) -> StoreResult<u64> {
        let set = self.client.fetch(
            "SELECT customer_id FROM customers WHERE email = ?1",
            &[SqlValue::from(recipient_email)],
        )?;
        let recipient = set
            .rows
            .first()
            .and_then(|row| row.first())
            .and_then(SqlValue::as_integer)
            .ok_or(StoreError::NotFound)?;

        let affected = self.client.execute(
            "UPDATE orders SET customer_id = ?1 WHERE order_id = ?2",
            &[SqlValue::from(recipient), SqlValue::from(order_id)],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(affected)
    }
}
