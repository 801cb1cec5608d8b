//! Built-in role catalog.
//!
//! Used when a configuration source lists no roles, so that pricing never
//! resolves every role to a zero base price.

use rust_decimal::Decimal;

use super::types::CatalogRole;

const SEED_ROLES: &[(&str, &str, &str, i64)] = &[
    ("garcom", "A&B", "Garçom", 28),
    ("steward", "A&B", "Copeiro", 24),
    ("barista", "A&B", "Barista", 30),
    ("barman", "A&B", "Bartender", 32),
    ("maitreHotel", "A&B", "Maître", 50),
    ("cozinheiro", "Cozinha", "Cozinheiro", 45),
    ("ajudanteCozinha", "Cozinha", "Ajudante de Cozinha", 32),
    ("manobrista", "Estacionamento & Valet", "Manobrista", 30),
    (
        "coordenadorEstacionamento",
        "Estacionamento & Valet",
        "Coordenador de Estacionamento",
        48,
    ),
    ("recepcionista", "Recepção & Credenciamento", "Recepcionista", 35),
    ("tecnicoSom", "Técnica & AV", "Técnico de Som", 60),
    ("tecnicoLuz", "Técnica & AV", "Técnico de Luz", 60),
    ("operadorProjecao", "Técnica & AV", "Operador de Projeção", 55),
    ("suporteTI", "Técnica & AV", "Suporte TI", 50),
    ("seguranca", "Segurança & Saúde", "Segurança", 40),
    ("brigadista", "Segurança & Saúde", "Brigadista", 42),
    ("carregador", "Logística & Transporte", "Carregador", 32),
    ("coordenadorAeB", "A&B", "Coordenador A&B", 55),
    ("interprete", "Tradução & Interpretação", "Intérprete", 120),
    ("tecnicoTraducao", "Tradução & Interpretação", "Técnico de Tradução", 70),
];

/// Returns the built-in catalog.
pub fn seed_catalog() -> Vec<CatalogRole> {
    SEED_ROLES
        .iter()
        .map(|(key, sector, label, price)| CatalogRole {
            key: key.to_string(),
            label: label.to_string(),
            sector: sector.to_string(),
            base_price: Decimal::new(*price, 0),
        })
        .collect()
}

/// Returns `roles`, or the built-in catalog when `roles` is empty.
pub fn with_seed_fallback(roles: Vec<CatalogRole>) -> Vec<CatalogRole> {
    if roles.is_empty() { seed_catalog() } else { roles }
}
