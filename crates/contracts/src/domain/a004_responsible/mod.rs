use serde::{Deserialize, Serialize};

/// Operario / responsable que firma los registros de producción.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsible {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub area: Option<String>,
}
