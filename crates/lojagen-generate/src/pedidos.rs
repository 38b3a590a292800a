use chrono::NaiveDate;
use rand::Rng;
use rand::seq::index;
use tracing::info;

use lojagen_core::{
    Error, ItemPedidoRecord, MetodoPagamento, PedidoRecord, ProdutoRef, Result, StatusPedido,
};

use crate::dates;
use crate::locale::pick;
use crate::round2;

const MAX_ITENS_POR_PEDIDO: usize = 5;

/// Fail fast when orders are requested against an empty reference pool.
///
/// Checked before any order shell is written so a failed run leaves the
/// storage untouched.
pub fn checar_referencias(clientes: &[i64], produtos: &[ProdutoRef]) -> Result<()> {
    if clientes.is_empty() {
        return Err(Error::InsufficientReferenceData(
            "no customers persisted; generate customers first".to_string(),
        ));
    }
    if produtos.is_empty() {
        return Err(Error::InsufficientReferenceData(
            "no products persisted; orders need products for line items".to_string(),
        ));
    }
    Ok(())
}

/// Generate `qtd` order shells referencing the given customer ids.
///
/// `Total` starts at zero; it is back-filled once line items exist. A
/// delivered order always carries a ship date, so the delivery date lower
/// bound is always defined.
pub fn gerar_pedidos(
    qtd: u64,
    clientes: &[i64],
    hoje: NaiveDate,
    rng: &mut impl Rng,
) -> Result<Vec<PedidoRecord>> {
    if clientes.is_empty() {
        return Err(Error::InsufficientReferenceData(
            "no customers persisted; generate customers first".to_string(),
        ));
    }

    let mut registros = Vec::with_capacity(qtd as usize);

    for i in 0..qtd {
        if let Some(gerados) = crate::marco_progresso(i) {
            info!(gerados, total = qtd, "gerando pedidos");
        }

        let cliente_id = clientes[rng.random_range(0..clientes.len())];
        let data_pedido = dates::no_ultimo_ano(rng, hoje);
        let status = pick(StatusPedido::ALL, rng);
        let data_envio = status
            .envia()
            .then(|| dates::entre(rng, data_pedido, hoje));
        let data_entrega = match (status.entrega(), data_envio) {
            (true, Some(envio)) => Some(dates::entre(rng, envio, hoje)),
            _ => None,
        };

        registros.push(PedidoRecord {
            cliente_id,
            data_pedido,
            status,
            data_envio,
            data_entrega,
            metodo_pagamento: pick(MetodoPagamento::ALL, rng),
            total: 0.0,
        });
    }

    Ok(registros)
}

/// Line items plus the accumulated total per order, ready for back-fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ItensGerados {
    pub itens: Vec<ItemPedidoRecord>,
    /// `(PedidoID, Total)` pairs, one per order in input order.
    pub totais: Vec<(i64, f64)>,
}

/// Generate 1 to 5 distinct line items for each persisted order id.
///
/// The per-order item count is clamped to the product pool size, so a small
/// catalog degrades to fewer items instead of failing the sample.
pub fn gerar_itens(
    pedidos: &[i64],
    produtos: &[ProdutoRef],
    rng: &mut impl Rng,
) -> Result<ItensGerados> {
    if produtos.is_empty() {
        return Err(Error::InsufficientReferenceData(
            "no products persisted; orders need products for line items".to_string(),
        ));
    }

    let mut itens = Vec::new();
    let mut totais = Vec::with_capacity(pedidos.len());
    let max_itens = produtos.len().min(MAX_ITENS_POR_PEDIDO);

    for &pedido_id in pedidos {
        let quantos = rng.random_range(1..=max_itens);
        let mut total_pedido = 0.0;

        for idx in index::sample(rng, produtos.len(), quantos) {
            let produto = produtos[idx];
            let quantidade = rng.random_range(1..=10_i64);
            let desconto = round2(rng.random_range(0.0..=0.3));
            let total_item = round2(quantidade as f64 * produto.preco * (1.0 - desconto));
            total_pedido += total_item;

            itens.push(ItemPedidoRecord {
                pedido_id,
                produto_id: produto.id,
                quantidade,
                preco_unitario: produto.preco,
                desconto,
                total_item,
            });
        }

        totais.push((pedido_id, total_pedido));
    }

    Ok(ItensGerados { itens, totais })
}
