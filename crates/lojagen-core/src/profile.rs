use serde::Deserialize;

use crate::error::{Error, Result};

/// Per-field presence probabilities for optional customer and product
/// attributes. Each optional field is drawn independently with its own
/// probability of being present.
///
/// Values live in `[0, 1]`. The defaults mirror the shipped dataset shape;
/// a partial TOML file overrides only the keys it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresenceProfile {
    pub email: f64,
    pub telefone: f64,
    pub endereco: f64,
    pub cep: f64,
    pub genero: f64,
    pub renda_anual: f64,
    pub profissao: f64,
    pub interesses: f64,
    pub estado_civil: f64,
    pub total_gastos: f64,
    pub metodo_pagamento: f64,
    pub pontuacao_satisfacao: f64,
    pub ultima_compra: f64,
    pub fornecedor: f64,
    pub categoria_produto: f64,
    pub data_validade: f64,
    /// Probability that a customer keeps the default "Ativo" status.
    pub status_ativo: f64,
}

impl Default for PresenceProfile {
    fn default() -> Self {
        Self {
            email: 0.9,
            telefone: 0.8,
            endereco: 0.9,
            cep: 0.85,
            genero: 0.8,
            renda_anual: 0.8,
            profissao: 0.9,
            interesses: 0.8,
            estado_civil: 0.9,
            total_gastos: 0.7,
            metodo_pagamento: 0.9,
            pontuacao_satisfacao: 0.8,
            ultima_compra: 0.5,
            fornecedor: 0.8,
            categoria_produto: 0.9,
            data_validade: 0.5,
            status_ativo: 0.95,
        }
    }
}

impl PresenceProfile {
    /// Parse a profile from TOML, validating every probability.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let profile: PresenceProfile =
            toml::from_str(input).map_err(|err| Error::InvalidProfile(err.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.fields() {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(Error::InvalidProfile(format!(
                    "'{field}' must be a probability in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 17] {
        [
            ("email", self.email),
            ("telefone", self.telefone),
            ("endereco", self.endereco),
            ("cep", self.cep),
            ("genero", self.genero),
            ("renda_anual", self.renda_anual),
            ("profissao", self.profissao),
            ("interesses", self.interesses),
            ("estado_civil", self.estado_civil),
            ("total_gastos", self.total_gastos),
            ("metodo_pagamento", self.metodo_pagamento),
            ("pontuacao_satisfacao", self.pontuacao_satisfacao),
            ("ultima_compra", self.ultima_compra),
            ("fornecedor", self.fornecedor),
            ("categoria_produto", self.categoria_produto),
            ("data_validade", self.data_validade),
            ("status_ativo", self.status_ativo),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_probabilities() {
        PresenceProfile::default().validate().expect("valid defaults");
    }

    #[test]
    fn partial_toml_overrides_named_keys_only() {
        let profile = PresenceProfile::from_toml_str("email = 1.0\nultima_compra = 0.0\n")
            .expect("parse profile");
        assert_eq!(profile.email, 1.0);
        assert_eq!(profile.ultima_compra, 0.0);
        assert_eq!(profile.telefone, PresenceProfile::default().telefone);
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let err = PresenceProfile::from_toml_str("email = 1.5\n").unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = PresenceProfile::from_toml_str("emial = 0.5\n").unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)));
    }
}
