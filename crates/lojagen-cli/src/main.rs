use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use lojagen_core::{Error as CoreError, PresenceProfile};
use lojagen_generate::{
    EmissorCodigoBarras, checar_referencias, gerar_clientes, gerar_itens, gerar_pedidos,
    gerar_produtos, phase_rng,
};
use lojagen_store::{
    SqlitePool, connect, ensure_schema, inserir_clientes, inserir_itens, inserir_pedidos,
    inserir_produtos, listar_cliente_ids, listar_codigos_barras, listar_produtos_ref,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "lojagen",
    version,
    about = "Seeds the LojaVirtual SQLite database with synthetic storefront data"
)]
struct Cli {
    /// Number of customers to generate (0 skips the phase).
    #[arg(long, default_value_t = 1000)]
    clientes: u64,
    /// Number of products to generate (0 skips the phase).
    #[arg(long, default_value_t = 1000)]
    produtos: u64,
    /// Number of orders to generate (0 skips the phase).
    #[arg(long, default_value_t = 1000)]
    pedidos: u64,
    /// SQLite database file, created if missing.
    #[arg(long, default_value = "LojaVirtual.db")]
    db: PathBuf,
    /// Seed for deterministic generation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file overriding per-field presence probabilities.
    #[arg(long)]
    perfil: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();
    run(cli).await
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let run_id = Uuid::new_v4().to_string();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let perfil = load_profile(cli.perfil.as_deref())?;
    let hoje = chrono::Utc::now().date_naive();

    info!(
        run_id = %run_id,
        seed,
        db = %cli.db.display(),
        clientes = cli.clientes,
        produtos = cli.produtos,
        pedidos = cli.pedidos,
        "run started"
    );

    let pool = connect(&cli.db).await?;
    ensure_schema(&pool).await?;

    if cli.clientes > 0 {
        let mut rng = phase_rng(seed, "clientes");
        let registros = gerar_clientes(cli.clientes, &perfil, hoje, &mut rng);
        let inseridos = inserir_clientes(&pool, &registros).await?;
        info!(inseridos, "clientes inseridos");
    }

    if cli.produtos > 0 {
        let mut rng = phase_rng(seed, "produtos");
        let existentes = listar_codigos_barras(&pool).await?;
        let mut emissor = EmissorCodigoBarras::new(existentes);
        let registros = gerar_produtos(cli.produtos, &perfil, hoje, &mut rng, &mut emissor)?;
        let inseridos = inserir_produtos(&pool, &registros).await?;
        info!(inseridos, "produtos inseridos");
    }

    if cli.pedidos > 0 {
        gerar_fase_pedidos(&pool, cli.pedidos, seed, hoje).await?;
    }

    info!(run_id = %run_id, "all data generated successfully");
    Ok(())
}

async fn gerar_fase_pedidos(
    pool: &SqlitePool,
    qtd: u64,
    seed: u64,
    hoje: chrono::NaiveDate,
) -> Result<(), CliError> {
    let mut rng = phase_rng(seed, "pedidos");
    let clientes = listar_cliente_ids(pool).await?;
    let produtos = listar_produtos_ref(pool).await?;
    checar_referencias(&clientes, &produtos)?;

    let shells = gerar_pedidos(qtd, &clientes, hoje, &mut rng)?;
    let pedido_ids = inserir_pedidos(pool, &shells).await?;
    let gerados = gerar_itens(&pedido_ids, &produtos, &mut rng)?;
    let itens = inserir_itens(pool, &gerados.itens, &gerados.totais).await?;

    info!(pedidos = pedido_ids.len(), itens, "pedidos e itens inseridos");
    Ok(())
}

fn load_profile(path: Option<&std::path::Path>) -> Result<PresenceProfile, CliError> {
    match path {
        Some(path) => {
            let conteudo = std::fs::read_to_string(path)?;
            Ok(PresenceProfile::from_toml_str(&conteudo)?)
        }
        None => Ok(PresenceProfile::default()),
    }
}
