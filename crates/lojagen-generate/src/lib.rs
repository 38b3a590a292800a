//! In-memory record generators for the LojaVirtual dataset.
//!
//! Generators are pure over their inputs: given a presence profile, a
//! reference date and a seeded RNG they produce the same records, which keeps
//! the whole pipeline reproducible under a fixed `--seed`.

pub mod clientes;
pub mod dates;
pub mod locale;
pub mod pedidos;
pub mod produtos;
pub mod rng;

pub use clientes::gerar_clientes;
pub use pedidos::{ItensGerados, checar_referencias, gerar_itens, gerar_pedidos};
pub use produtos::{EmissorCodigoBarras, gerar_produtos};
pub use rng::phase_rng;

/// Round a currency value to cents.
pub fn round2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

/// 1-based count to report when `indice` is a progress milestone (every
/// 1000th record, starting with the first).
pub(crate) fn marco_progresso(indice: u64) -> Option<u64> {
    (indice % 1000 == 0).then_some(indice + 1)
}

#[cfg(test)]
mod tests {
    use super::{marco_progresso, round2};

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(10.006), 10.01);
        assert_eq!(round2(0.2999), 0.3);
        assert_eq!(round2(499.994), 499.99);
    }

    #[test]
    fn progress_milestones_report_one_based_counts() {
        assert_eq!(marco_progresso(0), Some(1));
        assert_eq!(marco_progresso(1), None);
        assert_eq!(marco_progresso(999), None);
        assert_eq!(marco_progresso(1000), Some(1001));
        assert_eq!(marco_progresso(2000), Some(2001));
    }
}
