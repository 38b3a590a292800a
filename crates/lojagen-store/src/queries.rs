use sqlx::SqlitePool;

use lojagen_core::{ProdutoRef, Result};

use crate::db_err;

/// All persisted customer ids, the reference pool for order ownership.
pub async fn listar_cliente_ids(pool: &SqlitePool) -> Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>("SELECT ClienteID FROM Clientes ORDER BY ClienteID")
        .fetch_all(pool)
        .await
        .map_err(db_err)
}

/// All persisted product ids with their current price.
pub async fn listar_produtos_ref(pool: &SqlitePool) -> Result<Vec<ProdutoRef>> {
    let rows =
        sqlx::query_as::<_, (i64, f64)>("SELECT ProdutoID, Preco FROM Produtos ORDER BY ProdutoID")
            .fetch_all(pool)
            .await
            .map_err(db_err)?;

    Ok(rows
        .into_iter()
        .map(|(id, preco)| ProdutoRef { id, preco })
        .collect())
}

/// All persisted order ids.
pub async fn listar_pedido_ids(pool: &SqlitePool) -> Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>("SELECT PedidoID FROM Pedidos ORDER BY PedidoID")
        .fetch_all(pool)
        .await
        .map_err(db_err)
}

/// Barcodes already persisted, used to seed the barcode issuer so
/// uniqueness holds across runs against the same storage.
pub async fn listar_codigos_barras(pool: &SqlitePool) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        "SELECT CodigoBarras FROM Produtos WHERE CodigoBarras IS NOT NULL",
    )
    .fetch_all(pool)
    .await
    .map_err(db_err)
}
