use chrono::NaiveDate;

use lojagen_core::{PresenceProfile, ProdutoRef};
use lojagen_generate::{
    EmissorCodigoBarras, gerar_clientes, gerar_itens, gerar_pedidos, gerar_produtos, phase_rng,
};

fn hoje() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
}

#[test]
fn full_run_is_reproducible_under_a_fixed_seed() {
    let perfil = PresenceProfile::default();
    let produtos_ref: Vec<ProdutoRef> = (1..=30)
        .map(|id| ProdutoRef {
            id,
            preco: 10.0 + id as f64,
        })
        .collect();
    let pedido_ids: Vec<i64> = (1..=40).collect();

    let geracao = |seed: u64| {
        let clientes = gerar_clientes(100, &perfil, hoje(), &mut phase_rng(seed, "clientes"));
        let mut emissor = EmissorCodigoBarras::default();
        let produtos =
            gerar_produtos(100, &perfil, hoje(), &mut phase_rng(seed, "produtos"), &mut emissor)
                .expect("produtos");
        let mut rng = phase_rng(seed, "pedidos");
        let pedidos = gerar_pedidos(40, &[1, 2, 3], hoje(), &mut rng).expect("pedidos");
        let itens = gerar_itens(&pedido_ids, &produtos_ref, &mut rng).expect("itens");
        (clientes, produtos, pedidos, itens)
    };

    assert_eq!(geracao(42), geracao(42));
    assert_ne!(geracao(42).0, geracao(43).0);
}

#[test]
fn phase_streams_do_not_depend_on_earlier_phases() {
    let perfil = PresenceProfile::default();

    // Products drawn directly vs. after a customer phase consumed its own
    // stream: identical, because each phase derives its RNG from the seed.
    let mut emissor = EmissorCodigoBarras::default();
    let direto =
        gerar_produtos(20, &perfil, hoje(), &mut phase_rng(7, "produtos"), &mut emissor)
            .expect("produtos");

    let _clientes = gerar_clientes(50, &perfil, hoje(), &mut phase_rng(7, "clientes"));
    let mut emissor = EmissorCodigoBarras::default();
    let depois =
        gerar_produtos(20, &perfil, hoje(), &mut phase_rng(7, "produtos"), &mut emissor)
            .expect("produtos");

    assert_eq!(direto, depois);
}
