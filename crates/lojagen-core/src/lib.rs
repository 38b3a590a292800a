//! Core contracts shared across the lojagen crates.
//!
//! This crate defines the storefront record types, the fixed enumerations
//! persisted as text, the optional-field presence profile, and the shared
//! error type.

pub mod error;
pub mod model;
pub mod profile;

pub use error::{Error, Result};
pub use model::{
    CanalComunicacao, CategoriaCliente, CategoriaProduto, ClienteRecord, EstadoCivil, Genero,
    ItemPedidoRecord, MetodoPagamento, PedidoRecord, ProdutoRecord, ProdutoRef, StatusCliente,
    StatusPedido,
};
pub use profile::PresenceProfile;
