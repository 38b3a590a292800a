use sqlx::SqlitePool;
use tracing::info;

use lojagen_core::Result;

use crate::db_err;

/// Idempotently create the four storefront tables.
///
/// Running this twice produces no duplicate tables and touches no data; any
/// creation failure is fatal and propagates unchanged.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    for ddl in [DDL_CLIENTES, DDL_PRODUTOS, DDL_PEDIDOS, DDL_ITENS_PEDIDO] {
        sqlx::query(ddl).execute(pool).await.map_err(db_err)?;
    }
    info!("schema ensured");
    Ok(())
}

const DDL_CLIENTES: &str = r#"
CREATE TABLE IF NOT EXISTS Clientes (
    ClienteID INTEGER PRIMARY KEY AUTOINCREMENT,
    Nome TEXT NOT NULL,
    Sobrenome TEXT,
    Email TEXT,
    Telefone TEXT,
    Endereco TEXT,
    CEP TEXT,
    DataCadastro DATE DEFAULT CURRENT_DATE,
    Genero TEXT,
    DataNascimento DATE,
    Status TEXT,
    UltimaAtualizacao DATE,
    RendaAnual REAL,
    Profissao TEXT,
    Interesses TEXT,
    EstadoCivil TEXT,
    TotalGastos REAL,
    MetodoPagamentoPreferido TEXT,
    CategoriaCliente TEXT,
    PontuacaoSatisfacao INTEGER,
    NumeroInteracoesSuporte INTEGER,
    UltimaCompra DATE,
    PreferenciasComunicacao TEXT
)
"#;

const DDL_PRODUTOS: &str = r#"
CREATE TABLE IF NOT EXISTS Produtos (
    ProdutoID INTEGER PRIMARY KEY AUTOINCREMENT,
    Nome TEXT NOT NULL,
    Descricao TEXT,
    Preco REAL NOT NULL,
    Estoque INTEGER DEFAULT 0,
    Fornecedor TEXT,
    Categoria TEXT,
    CodigoBarras TEXT UNIQUE,
    DataValidade DATE,
    DataCriacao DATE DEFAULT CURRENT_DATE,
    DataAtualizacao DATE,
    Disponivel BOOLEAN DEFAULT 1
)
"#;

const DDL_PEDIDOS: &str = r#"
CREATE TABLE IF NOT EXISTS Pedidos (
    PedidoID INTEGER PRIMARY KEY AUTOINCREMENT,
    ClienteID INTEGER,
    DataPedido DATE,
    Status TEXT,
    DataEnvio DATE,
    DataEntrega DATE,
    MetodoPagamento TEXT,
    Total REAL,
    FOREIGN KEY (ClienteID) REFERENCES Clientes (ClienteID)
)
"#;

const DDL_ITENS_PEDIDO: &str = r#"
CREATE TABLE IF NOT EXISTS ItensPedido (
    ItemID INTEGER PRIMARY KEY AUTOINCREMENT,
    PedidoID INTEGER,
    ProdutoID INTEGER,
    Quantidade INTEGER,
    PrecoUnitario REAL,
    Desconto REAL,
    TotalItem REAL,
    FOREIGN KEY (PedidoID) REFERENCES Pedidos (PedidoID),
    FOREIGN KEY (ProdutoID) REFERENCES Produtos (ProdutoID)
)
"#;
