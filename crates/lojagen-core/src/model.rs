use chrono::NaiveDate;

/// Customer status stored in `Clientes.Status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCliente {
    Ativo,
    Inativo,
    Suspenso,
}

impl StatusCliente {
    pub const ALL: &'static [StatusCliente] = &[
        StatusCliente::Ativo,
        StatusCliente::Inativo,
        StatusCliente::Suspenso,
    ];

    /// Alternatives drawn when the 95% "Ativo" default does not apply.
    pub const ALTERNATIVES: &'static [StatusCliente] =
        &[StatusCliente::Inativo, StatusCliente::Suspenso];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCliente::Ativo => "Ativo",
            StatusCliente::Inativo => "Inativo",
            StatusCliente::Suspenso => "Suspenso",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genero {
    Masculino,
    Feminino,
    Outro,
}

impl Genero {
    pub const ALL: &'static [Genero] = &[Genero::Masculino, Genero::Feminino, Genero::Outro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genero::Masculino => "Masculino",
            Genero::Feminino => "Feminino",
            Genero::Outro => "Outro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoCivil {
    Solteiro,
    Casado,
    Divorciado,
    Viuvo,
}

impl EstadoCivil {
    pub const ALL: &'static [EstadoCivil] = &[
        EstadoCivil::Solteiro,
        EstadoCivil::Casado,
        EstadoCivil::Divorciado,
        EstadoCivil::Viuvo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCivil::Solteiro => "Solteiro(a)",
            EstadoCivil::Casado => "Casado(a)",
            EstadoCivil::Divorciado => "Divorciado(a)",
            EstadoCivil::Viuvo => "Viúvo(a)",
        }
    }
}

/// Payment method, shared by customer preference and order payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetodoPagamento {
    CartaoCredito,
    Boleto,
    Pix,
}

impl MetodoPagamento {
    pub const ALL: &'static [MetodoPagamento] = &[
        MetodoPagamento::CartaoCredito,
        MetodoPagamento::Boleto,
        MetodoPagamento::Pix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetodoPagamento::CartaoCredito => "Cartão de Crédito",
            MetodoPagamento::Boleto => "Boleto",
            MetodoPagamento::Pix => "Pix",
        }
    }
}

/// Customer tier, always present, assigned independent of behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriaCliente {
    Premium,
    Regular,
    Ocasional,
}

impl CategoriaCliente {
    pub const ALL: &'static [CategoriaCliente] = &[
        CategoriaCliente::Premium,
        CategoriaCliente::Regular,
        CategoriaCliente::Ocasional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoriaCliente::Premium => "Premium",
            CategoriaCliente::Regular => "Regular",
            CategoriaCliente::Ocasional => "Ocasional",
        }
    }
}

/// Communication channel for `PreferenciasComunicacao`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanalComunicacao {
    Email,
    Sms,
    Telefone,
}

impl CanalComunicacao {
    pub const ALL: &'static [CanalComunicacao] = &[
        CanalComunicacao::Email,
        CanalComunicacao::Sms,
        CanalComunicacao::Telefone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanalComunicacao::Email => "Email",
            CanalComunicacao::Sms => "SMS",
            CanalComunicacao::Telefone => "Telefone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriaProduto {
    Eletronicos,
    Alimentos,
    Vestuario,
    Moveis,
    Ferramentas,
}

impl CategoriaProduto {
    pub const ALL: &'static [CategoriaProduto] = &[
        CategoriaProduto::Eletronicos,
        CategoriaProduto::Alimentos,
        CategoriaProduto::Vestuario,
        CategoriaProduto::Moveis,
        CategoriaProduto::Ferramentas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoriaProduto::Eletronicos => "Eletrônicos",
            CategoriaProduto::Alimentos => "Alimentos",
            CategoriaProduto::Vestuario => "Vestuário",
            CategoriaProduto::Moveis => "Móveis",
            CategoriaProduto::Ferramentas => "Ferramentas",
        }
    }
}

/// Order status stored in `Pedidos.Status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPedido {
    Pendente,
    Enviado,
    Entregue,
    Cancelado,
}

impl StatusPedido {
    pub const ALL: &'static [StatusPedido] = &[
        StatusPedido::Pendente,
        StatusPedido::Enviado,
        StatusPedido::Entregue,
        StatusPedido::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPedido::Pendente => "Pendente",
            StatusPedido::Enviado => "Enviado",
            StatusPedido::Entregue => "Entregue",
            StatusPedido::Cancelado => "Cancelado",
        }
    }

    /// A ship date is set exactly for shipped and delivered orders.
    pub fn envia(&self) -> bool {
        matches!(self, StatusPedido::Enviado | StatusPedido::Entregue)
    }

    /// A delivery date is set exactly for delivered orders.
    pub fn entrega(&self) -> bool {
        matches!(self, StatusPedido::Entregue)
    }
}

/// One row destined for `Clientes`. The id is assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ClienteRecord {
    pub nome: String,
    pub sobrenome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub cep: Option<String>,
    pub data_cadastro: NaiveDate,
    pub genero: Option<Genero>,
    pub data_nascimento: NaiveDate,
    pub status: StatusCliente,
    pub ultima_atualizacao: NaiveDate,
    pub renda_anual: Option<f64>,
    pub profissao: Option<String>,
    pub interesses: Option<String>,
    pub estado_civil: Option<EstadoCivil>,
    pub total_gastos: Option<f64>,
    pub metodo_pagamento_preferido: Option<MetodoPagamento>,
    pub categoria_cliente: CategoriaCliente,
    pub pontuacao_satisfacao: Option<i64>,
    pub numero_interacoes_suporte: i64,
    pub ultima_compra: Option<NaiveDate>,
    pub preferencias_comunicacao: String,
}

/// One row destined for `Produtos`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProdutoRecord {
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    pub estoque: i64,
    pub fornecedor: Option<String>,
    pub categoria: Option<CategoriaProduto>,
    pub codigo_barras: String,
    pub data_validade: Option<NaiveDate>,
    pub data_criacao: NaiveDate,
    pub data_atualizacao: NaiveDate,
    pub disponivel: bool,
}

/// One order shell destined for `Pedidos`; `total` starts at zero and is
/// back-filled once the line items exist.
#[derive(Debug, Clone, PartialEq)]
pub struct PedidoRecord {
    pub cliente_id: i64,
    pub data_pedido: NaiveDate,
    pub status: StatusPedido,
    pub data_envio: Option<NaiveDate>,
    pub data_entrega: Option<NaiveDate>,
    pub metodo_pagamento: MetodoPagamento,
    pub total: f64,
}

/// One row destined for `ItensPedido`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPedidoRecord {
    pub pedido_id: i64,
    pub produto_id: i64,
    pub quantidade: i64,
    pub preco_unitario: f64,
    pub desconto: f64,
    pub total_item: f64,
}

/// Persisted product identity and current price, read back for line items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProdutoRef {
    pub id: i64,
    pub preco: f64,
}
