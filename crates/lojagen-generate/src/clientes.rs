use chrono::NaiveDate;
use rand::Rng;
use rand::seq::index;
use tracing::info;

use lojagen_core::{
    CanalComunicacao, CategoriaCliente, ClienteRecord, PresenceProfile, StatusCliente,
};

use crate::dates;
use crate::locale::{self, pick};

/// Generate `qtd` customer records.
///
/// Optional attributes are drawn independently per the presence profile;
/// `DataCadastro <= UltimaAtualizacao <= hoje` holds for every record.
pub fn gerar_clientes(
    qtd: u64,
    perfil: &PresenceProfile,
    hoje: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<ClienteRecord> {
    let mut registros = Vec::with_capacity(qtd as usize);

    for i in 0..qtd {
        if let Some(gerados) = crate::marco_progresso(i) {
            info!(gerados, total = qtd, "gerando clientes");
        }

        let nome = locale::primeiro_nome(rng).to_string();
        let sobrenome = locale::sobrenome(rng).to_string();
        let email = rng
            .random_bool(perfil.email)
            .then(|| locale::email(&nome, &sobrenome, rng));
        let telefone = rng.random_bool(perfil.telefone).then(|| locale::telefone(rng));
        let endereco = rng.random_bool(perfil.endereco).then(|| locale::endereco(rng));
        let cep = rng.random_bool(perfil.cep).then(|| locale::cep(rng));

        let data_cadastro = dates::nos_ultimos_anos(rng, hoje, 5);
        let ultima_atualizacao = dates::entre(rng, data_cadastro, hoje);

        let genero = rng
            .random_bool(perfil.genero)
            .then(|| pick(lojagen_core::Genero::ALL, rng));
        let status = if rng.random_bool(perfil.status_ativo) {
            StatusCliente::Ativo
        } else {
            pick(StatusCliente::ALTERNATIVES, rng)
        };

        let renda_anual = rng
            .random_bool(perfil.renda_anual)
            .then(|| crate::round2(rng.random_range(15_000.0..=150_000.0)));
        let profissao = rng
            .random_bool(perfil.profissao)
            .then(|| locale::profissao(rng).to_string());
        let interesses = rng.random_bool(perfil.interesses).then(|| interesses(rng));
        let estado_civil = rng
            .random_bool(perfil.estado_civil)
            .then(|| pick(lojagen_core::EstadoCivil::ALL, rng));
        let total_gastos = rng
            .random_bool(perfil.total_gastos)
            .then(|| crate::round2(rng.random_range(100.0..=10_000.0)));
        let metodo_pagamento_preferido = rng
            .random_bool(perfil.metodo_pagamento)
            .then(|| pick(lojagen_core::MetodoPagamento::ALL, rng));
        let pontuacao_satisfacao = rng
            .random_bool(perfil.pontuacao_satisfacao)
            .then(|| rng.random_range(1..=5));
        let ultima_compra = rng
            .random_bool(perfil.ultima_compra)
            .then(|| dates::no_ultimo_ano(rng, hoje));

        registros.push(ClienteRecord {
            nome,
            sobrenome,
            email,
            telefone,
            endereco,
            cep,
            data_cadastro,
            genero,
            data_nascimento: dates::nascimento(rng, hoje),
            status,
            ultima_atualizacao,
            renda_anual,
            profissao,
            interesses,
            estado_civil,
            total_gastos,
            metodo_pagamento_preferido,
            categoria_cliente: pick(CategoriaCliente::ALL, rng),
            pontuacao_satisfacao,
            numero_interacoes_suporte: rng.random_range(0..=10),
            ultima_compra,
            preferencias_comunicacao: preferencias_comunicacao(rng),
        });
    }

    registros
}

/// 1 to 3 distinct channels joined with ", ".
fn preferencias_comunicacao(rng: &mut impl Rng) -> String {
    let canais = CanalComunicacao::ALL;
    let quantos = rng.random_range(1..=canais.len());
    index::sample(rng, canais.len(), quantos)
        .iter()
        .map(|i| canais[i].as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 3 distinct interest words joined with ", ".
fn interesses(rng: &mut impl Rng) -> String {
    locale::palavras_distintas(rng, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
    }

    #[test]
    fn date_chain_holds_for_every_record() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let perfil = PresenceProfile::default();
        for cliente in gerar_clientes(500, &perfil, hoje(), &mut rng) {
            assert!(cliente.data_cadastro <= cliente.ultima_atualizacao);
            assert!(cliente.ultima_atualizacao <= hoje());
            if let Some(ultima_compra) = cliente.ultima_compra {
                assert!(ultima_compra >= hoje() - Days::new(365));
                assert!(ultima_compra <= hoje());
            }
        }
    }

    #[test]
    fn required_fields_are_always_present() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let perfil = PresenceProfile::default();
        for cliente in gerar_clientes(200, &perfil, hoje(), &mut rng) {
            assert!(!cliente.nome.is_empty());
            assert!(!cliente.sobrenome.is_empty());
            assert!(!cliente.preferencias_comunicacao.is_empty());
            assert!((0..=10).contains(&cliente.numero_interacoes_suporte));
            if let Some(pontuacao) = cliente.pontuacao_satisfacao {
                assert!((1..=5).contains(&pontuacao));
            }
        }
    }

    #[test]
    fn zero_presence_profile_drops_all_optionals() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let perfil = PresenceProfile {
            email: 0.0,
            telefone: 0.0,
            endereco: 0.0,
            cep: 0.0,
            genero: 0.0,
            renda_anual: 0.0,
            profissao: 0.0,
            interesses: 0.0,
            estado_civil: 0.0,
            total_gastos: 0.0,
            metodo_pagamento: 0.0,
            pontuacao_satisfacao: 0.0,
            ultima_compra: 0.0,
            ..PresenceProfile::default()
        };
        for cliente in gerar_clientes(50, &perfil, hoje(), &mut rng) {
            assert!(cliente.email.is_none());
            assert!(cliente.telefone.is_none());
            assert!(cliente.ultima_compra.is_none());
            assert!(cliente.pontuacao_satisfacao.is_none());
        }
    }

    #[test]
    fn same_seed_reproduces_records() {
        let perfil = PresenceProfile::default();
        let mut left = ChaCha8Rng::seed_from_u64(9);
        let mut right = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(
            gerar_clientes(20, &perfil, hoje(), &mut left),
            gerar_clientes(20, &perfil, hoje(), &mut right)
        );
    }

    #[test]
    fn preferencias_are_distinct_channels() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            let prefs = preferencias_comunicacao(&mut rng);
            let canais: Vec<&str> = prefs.split(", ").collect();
            assert!((1..=3).contains(&canais.len()));
            let mut unicos = canais.clone();
            unicos.sort_unstable();
            unicos.dedup();
            assert_eq!(unicos.len(), canais.len());
        }
    }
}
