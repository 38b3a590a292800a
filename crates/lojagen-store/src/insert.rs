use sqlx::SqlitePool;

use lojagen_core::{ClienteRecord, ItemPedidoRecord, PedidoRecord, ProdutoRecord, Result};

use crate::db_err;

/// Batch-insert customer records inside one transaction.
pub async fn inserir_clientes(pool: &SqlitePool, registros: &[ClienteRecord]) -> Result<u64> {
    let mut tx = pool.begin().await.map_err(db_err)?;

    for cliente in registros {
        sqlx::query(
            r#"
            INSERT INTO Clientes (
                Nome, Sobrenome, Email, Telefone, Endereco, CEP, DataCadastro, Genero,
                DataNascimento, Status, UltimaAtualizacao, RendaAnual, Profissao, Interesses,
                EstadoCivil, TotalGastos, MetodoPagamentoPreferido, CategoriaCliente,
                PontuacaoSatisfacao, NumeroInteracoesSuporte, UltimaCompra, PreferenciasComunicacao
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&cliente.nome)
        .bind(&cliente.sobrenome)
        .bind(&cliente.email)
        .bind(&cliente.telefone)
        .bind(&cliente.endereco)
        .bind(&cliente.cep)
        .bind(cliente.data_cadastro)
        .bind(cliente.genero.map(|g| g.as_str()))
        .bind(cliente.data_nascimento)
        .bind(cliente.status.as_str())
        .bind(cliente.ultima_atualizacao)
        .bind(cliente.renda_anual)
        .bind(&cliente.profissao)
        .bind(&cliente.interesses)
        .bind(cliente.estado_civil.map(|e| e.as_str()))
        .bind(cliente.total_gastos)
        .bind(cliente.metodo_pagamento_preferido.map(|m| m.as_str()))
        .bind(cliente.categoria_cliente.as_str())
        .bind(cliente.pontuacao_satisfacao)
        .bind(cliente.numero_interacoes_suporte)
        .bind(cliente.ultima_compra)
        .bind(&cliente.preferencias_comunicacao)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
    }

    tx.commit().await.map_err(db_err)?;
    Ok(registros.len() as u64)
}

/// Batch-insert product records inside one transaction.
pub async fn inserir_produtos(pool: &SqlitePool, registros: &[ProdutoRecord]) -> Result<u64> {
    let mut tx = pool.begin().await.map_err(db_err)?;

    for produto in registros {
        sqlx::query(
            r#"
            INSERT INTO Produtos (
                Nome, Descricao, Preco, Estoque, Fornecedor, Categoria, CodigoBarras,
                DataValidade, DataCriacao, DataAtualizacao, Disponivel
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&produto.nome)
        .bind(&produto.descricao)
        .bind(produto.preco)
        .bind(produto.estoque)
        .bind(&produto.fornecedor)
        .bind(produto.categoria.map(|c| c.as_str()))
        .bind(&produto.codigo_barras)
        .bind(produto.data_validade)
        .bind(produto.data_criacao)
        .bind(produto.data_atualizacao)
        .bind(produto.disponivel)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
    }

    tx.commit().await.map_err(db_err)?;
    Ok(registros.len() as u64)
}

/// Batch-insert order shells inside one transaction.
///
/// Returns the generated `PedidoID`s in insertion order; line-item
/// generation uses these instead of re-scanning the table, so orders from
/// earlier runs never pick up new items.
pub async fn inserir_pedidos(pool: &SqlitePool, registros: &[PedidoRecord]) -> Result<Vec<i64>> {
    let mut tx = pool.begin().await.map_err(db_err)?;
    let mut ids = Vec::with_capacity(registros.len());

    for pedido in registros {
        let feito = sqlx::query(
            r#"
            INSERT INTO Pedidos (
                ClienteID, DataPedido, Status, DataEnvio, DataEntrega, MetodoPagamento, Total
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(pedido.cliente_id)
        .bind(pedido.data_pedido)
        .bind(pedido.status.as_str())
        .bind(pedido.data_envio)
        .bind(pedido.data_entrega)
        .bind(pedido.metodo_pagamento.as_str())
        .bind(pedido.total)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
        ids.push(feito.last_insert_rowid());
    }

    tx.commit().await.map_err(db_err)?;
    Ok(ids)
}

/// Batch-insert line items and back-fill each order's total, as one unit of
/// work.
pub async fn inserir_itens(
    pool: &SqlitePool,
    itens: &[ItemPedidoRecord],
    totais: &[(i64, f64)],
) -> Result<u64> {
    let mut tx = pool.begin().await.map_err(db_err)?;

    for item in itens {
        sqlx::query(
            r#"
            INSERT INTO ItensPedido (
                PedidoID, ProdutoID, Quantidade, PrecoUnitario, Desconto, TotalItem
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.pedido_id)
        .bind(item.produto_id)
        .bind(item.quantidade)
        .bind(item.preco_unitario)
        .bind(item.desconto)
        .bind(item.total_item)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
    }

    for (pedido_id, total) in totais {
        sqlx::query("UPDATE Pedidos SET Total = ? WHERE PedidoID = ?")
            .bind(total)
            .bind(pedido_id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
    }

    tx.commit().await.map_err(db_err)?;
    Ok(itens.len() as u64)
}
