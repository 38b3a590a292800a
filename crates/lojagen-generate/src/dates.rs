use chrono::{Days, Months, NaiveDate};
use rand::Rng;

/// Uniform date in `[inicio, fim]`. When the bounds cross, returns `inicio`.
pub fn entre(rng: &mut impl Rng, inicio: NaiveDate, fim: NaiveDate) -> NaiveDate {
    if inicio >= fim {
        return inicio;
    }
    let span = (fim - inicio).num_days() as u64;
    inicio + Days::new(rng.random_range(0..=span))
}

/// Uniform date within the past year, inclusive of today.
pub fn no_ultimo_ano(rng: &mut impl Rng, hoje: NaiveDate) -> NaiveDate {
    entre(rng, hoje - Days::new(365), hoje)
}

/// Uniform date within the past `anos` years, inclusive of today.
pub fn nos_ultimos_anos(rng: &mut impl Rng, hoje: NaiveDate, anos: u64) -> NaiveDate {
    entre(rng, hoje - Days::new(365 * anos), hoje)
}

/// Birth date for an adult aged 18 to 80 in calendar years.
pub fn nascimento(rng: &mut impl Rng, hoje: NaiveDate) -> NaiveDate {
    let mais_velha = hoje - Months::new(80 * 12);
    let mais_nova = hoje - Months::new(18 * 12);
    entre(rng, mais_velha, mais_nova)
}

/// Future expiry date, strictly after today and at most two years out.
pub fn validade_futura(rng: &mut impl Rng, hoje: NaiveDate) -> NaiveDate {
    entre(rng, hoje + Days::new(1), hoje + Days::new(365 * 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
    }

    #[test]
    fn entre_stays_inside_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let inicio = hoje() - Days::new(90);
        for _ in 0..500 {
            let data = entre(&mut rng, inicio, hoje());
            assert!(data >= inicio && data <= hoje());
        }
    }

    #[test]
    fn entre_with_crossed_bounds_returns_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(entre(&mut rng, hoje(), hoje() - Days::new(1)), hoje());
        assert_eq!(entre(&mut rng, hoje(), hoje()), hoje());
    }

    #[test]
    fn nascimento_is_adult_by_calendar_years() {
        // The 18-year cutoff is a calendar bound; a 365-day approximation
        // would land a few days past it across leap years.
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..20_000 {
            let data = nascimento(&mut rng, hoje());
            assert!(data <= hoje() - Months::new(18 * 12));
            assert!(data >= hoje() - Months::new(80 * 12));
        }
    }

    #[test]
    fn validade_futura_is_strictly_future() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let data = validade_futura(&mut rng, hoje());
            assert!(data > hoje());
            assert!(data <= hoje() + Days::new(730));
        }
    }
}
