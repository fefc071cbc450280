//! Relational schema owned by this service
//!
//! Applied with `CREATE TABLE IF NOT EXISTS` so startup is idempotent.

/// Schema DDL, one statement per table
pub const DDL: &str = "
CREATE TABLE IF NOT EXISTS games (
    game_id        INTEGER PRIMARY KEY,
    name           TEXT NOT NULL,
    release_year   INTEGER NOT NULL,
    sales_price    REAL NOT NULL,
    cust_rating    REAL,
    age_rating     TEXT NOT NULL,
    console        TEXT NOT NULL,
    developer_id   INTEGER NOT NULL,
    distributor_id INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS genres (
    genre_id INTEGER PRIMARY KEY,
    name     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS game_genres (
    game_id  INTEGER NOT NULL REFERENCES games (game_id) ON DELETE CASCADE,
    genre_id INTEGER NOT NULL REFERENCES genres (genre_id) ON DELETE CASCADE,
    PRIMARY KEY (game_id, genre_id)
);

CREATE TABLE IF NOT EXISTS customers (
    customer_id INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS orders (
    order_id          INTEGER PRIMARY KEY,
    order_date        TEXT NOT NULL,
    transaction_value REAL NOT NULL,
    employee_id       INTEGER NOT NULL,
    customer_id       INTEGER NOT NULL REFERENCES customers (customer_id)
);

CREATE TABLE IF NOT EXISTS online_orders (
    online_order_id INTEGER PRIMARY KEY,
    region          TEXT NOT NULL,
    postal_code     TEXT NOT NULL,
    state           TEXT NOT NULL,
    address         TEXT NOT NULL,
    city            TEXT NOT NULL,
    order_id        INTEGER NOT NULL REFERENCES orders (order_id) ON DELETE CASCADE
);
";

#[cfg(test)]
mod tests {
    use crate::db::sqlite::SqliteClient;
    use crate::db::QueryClient;

    #[test]
    fn test_schema_applies_and_is_idempotent() {
        let client = SqliteClient::open_in_memory().unwrap();
        client.apply_schema().unwrap();
        client.apply_schema().unwrap();

        let set = client
            .fetch(
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                &[],
            )
            .unwrap();
        let tables: Vec<_> = set
            .rows
            .iter()
            .filter_map(|row| row[0].as_text())
            .collect();
        for table in [
            "customers",
            "game_genres",
            "games",
            "genres",
            "online_orders",
            "orders",
        ] {
            assert!(tables.contains(&table), "missing table {}", table);
        }
    }
}
