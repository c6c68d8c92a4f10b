use serde::{Deserialize, Serialize};

/// Producto del catálogo (referencia + descripción).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub unit: Option<String>,
}
