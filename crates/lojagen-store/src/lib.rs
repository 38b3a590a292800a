//! SQLite adapter for the LojaVirtual storefront schema.
//!
//! All operations take the pool handle explicitly; sqlx errors are wrapped
//! into [`lojagen_core::Error::Db`] at this boundary.

pub mod insert;
pub mod queries;
pub mod schema;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
pub use sqlx::SqlitePool;

use lojagen_core::{Error, Result};

pub use insert::{inserir_clientes, inserir_itens, inserir_pedidos, inserir_produtos};
pub use queries::{
    listar_cliente_ids, listar_codigos_barras, listar_pedido_ids, listar_produtos_ref,
};
pub use schema::ensure_schema;

/// Open (creating if missing) the SQLite file at `path`.
///
/// A single connection is enough: generation is one logical thread of
/// control, and one writer avoids SQLITE_BUSY churn.
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(db_err)
}

pub(crate) fn db_err(err: sqlx::Error) -> Error {
    Error::Db(err.to_string())
}
