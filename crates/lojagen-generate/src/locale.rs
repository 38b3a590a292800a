//! pt_BR word and name pools used to compose customer and product text.
//!
//! Pools are deliberately small; the goal is plausible-looking records, not
//! linguistic coverage.

use rand::Rng;
use rand::seq::index;

pub(crate) fn pick<T: Copy>(values: &[T], rng: &mut impl Rng) -> T {
    values[rng.random_range(0..values.len())]
}

pub fn primeiro_nome(rng: &mut impl Rng) -> &'static str {
    pick(PRIMEIROS_NOMES, rng)
}

pub fn sobrenome(rng: &mut impl Rng) -> &'static str {
    pick(SOBRENOMES, rng)
}

/// Safe email under example.com derived from the customer name.
pub fn email(nome: &str, sobrenome: &str, rng: &mut impl Rng) -> String {
    let numero = rng.random_range(1..=999);
    format!("{}.{}{numero}@example.com", slugify(nome), slugify(sobrenome))
}

/// Mobile phone in +55 DDD 9xxxx-xxxx shape.
pub fn telefone(rng: &mut impl Rng) -> String {
    let ddd = pick(DDD_CODES, rng);
    let prefixo = rng.random_range(90000..=99999_u32);
    let sufixo = rng.random_range(0..=9999_u32);
    format!("+55{ddd}{prefixo:05}{sufixo:04}")
}

pub fn endereco(rng: &mut impl Rng) -> String {
    let rua = pick(RUAS, rng);
    let numero = rng.random_range(1..=9999);
    let cidade = pick(CIDADES, rng);
    let uf = pick(UFS, rng);
    format!("{rua}, {numero}, {cidade}/{uf}")
}

pub fn cep(rng: &mut impl Rng) -> String {
    format!(
        "{:05}-{:03}",
        rng.random_range(0..=99_999_u32),
        rng.random_range(0..=999_u32)
    )
}

pub fn profissao(rng: &mut impl Rng) -> &'static str {
    pick(PROFISSOES, rng)
}

pub fn empresa(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(EMPRESAS, rng), pick(SUFIXOS_EMPRESA, rng))
}

pub fn palavra(rng: &mut impl Rng) -> &'static str {
    pick(PALAVRAS, rng)
}

/// `n` distinct words joined with ", ", used for customer interests.
pub fn palavras_distintas(rng: &mut impl Rng, n: usize) -> String {
    index::sample(rng, PALAVRAS.len(), n.min(PALAVRAS.len()))
        .iter()
        .map(|i| PALAVRAS[i])
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capitalized word, used to compose product names.
pub fn palavra_capitalizada(rng: &mut impl Rng) -> String {
    capitalize(palavra(rng))
}

/// Short sentence of `n` words ending with a period.
pub fn frase(rng: &mut impl Rng, n: usize) -> String {
    let mut palavras = Vec::with_capacity(n);
    for i in 0..n {
        let w = palavra(rng);
        palavras.push(if i == 0 { capitalize(w) } else { w.to_string() });
    }
    format!("{}.", palavras.join(" "))
}

fn capitalize(palavra: &str) -> String {
    let mut chars = palavra.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn slugify(valor: &str) -> String {
    valor
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}

const PRIMEIROS_NOMES: &[&str] = &[
    "Ana", "Bruno", "Carlos", "Daniela", "Eduardo", "Fernanda", "Gustavo", "Helena", "Igor",
    "Juliana", "Kleber", "Larissa", "Marcos", "Natalia", "Otavio", "Patricia", "Rafael", "Sofia",
    "Thiago", "Vanessa", "Wagner", "Yasmin", "Andre", "Beatriz", "Caio", "Debora", "Felipe",
    "Gabriela", "Henrique", "Isabela", "Joao", "Camila", "Leonardo", "Mariana", "Pedro", "Renata",
];

const SOBRENOMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Lima", "Costa", "Ribeiro", "Almeida", "Pereira",
    "Ferreira", "Rodrigues", "Gomes", "Martins", "Barbosa", "Rocha", "Dias", "Carvalho",
    "Nascimento", "Moreira", "Araujo", "Cardoso", "Teixeira", "Correia", "Mendes",
];

const PROFISSOES: &[&str] = &[
    "Engenheiro Civil",
    "Professora",
    "Analista de Sistemas",
    "Vendedor",
    "Medica",
    "Advogado",
    "Designer Grafico",
    "Contador",
    "Enfermeira",
    "Motorista",
    "Cozinheiro",
    "Arquiteta",
    "Eletricista",
    "Farmaceutico",
    "Jornalista",
    "Psicologa",
    "Administrador",
    "Tecnico em Informatica",
    "Fisioterapeuta",
    "Corretor de Imoveis",
];

const EMPRESAS: &[&str] = &[
    "Mercado Central",
    "Distribuidora Aurora",
    "Comercial Horizonte",
    "Industria Vale Verde",
    "Atacado Primavera",
    "Importadora Atlantica",
    "Grupo Serra Azul",
    "Cooperativa Boa Safra",
    "Armazem do Porto",
    "Fabrica Estrela",
];

const SUFIXOS_EMPRESA: &[&str] = &["Ltda", "S.A.", "ME", "EPP", "e Filhos"];

const PALAVRAS: &[&str] = &[
    "casa", "tempo", "mundo", "forma", "parte", "vida", "mesa", "campo", "valor", "ponto", "ideia",
    "plano", "fundo", "linha", "papel", "fogo", "vento", "terra", "pedra", "ferro", "vidro",
    "verde", "claro", "forte", "leve", "novo", "duplo", "macio", "doce", "rapido", "prata",
    "dourado", "marinho", "solar", "lunar", "norte", "cedro", "carvalho", "bambu", "algodao",
    "couro", "cristal", "ceramica", "madeira", "bronze", "canela", "hortela", "jasmim", "lavanda",
    "montanha", "rio", "lago", "trilha", "jardim", "estrela", "aurora", "brisa", "neblina",
];

const RUAS: &[&str] = &[
    "Rua das Flores",
    "Avenida Central",
    "Rua do Comercio",
    "Avenida Paulista",
    "Rua da Praia",
    "Travessa dos Ipes",
    "Alameda Santos",
    "Rua XV de Novembro",
    "Avenida Atlantica",
    "Rua Sete de Setembro",
];

const CIDADES: &[&str] = &[
    "Sao Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Porto Alegre",
    "Curitiba",
    "Salvador",
    "Fortaleza",
    "Recife",
    "Manaus",
    "Goiania",
    "Florianopolis",
    "Campinas",
];

const UFS: &[&str] = &[
    "SP", "RJ", "MG", "RS", "PR", "BA", "CE", "PE", "AM", "GO", "SC",
];

const DDD_CODES: &[&str] = &["11", "21", "31", "41", "51", "61", "71", "81", "91"];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn email_is_ascii_and_safe() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let email = email("João", "Araújo", &mut rng);
        assert!(email.is_ascii());
        assert!(email.ends_with("@example.com"));
        assert!(email.starts_with("joo.arajo"));
    }

    #[test]
    fn telefone_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let fone = telefone(&mut rng);
        assert!(fone.starts_with("+55"));
        assert_eq!(fone.len(), "+55".len() + 2 + 9);
    }

    #[test]
    fn cep_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cep = cep(&mut rng);
        assert_eq!(cep.len(), 9);
        assert_eq!(cep.as_bytes()[5], b'-');
    }

    #[test]
    fn frase_has_requested_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let frase = frase(&mut rng, 10);
        assert!(frase.ends_with('.'));
        assert_eq!(frase.split_whitespace().count(), 10);
        assert!(frase.chars().next().is_some_and(char::is_uppercase));
    }
}
