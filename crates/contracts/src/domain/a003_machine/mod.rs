use serde::{Deserialize, Serialize};

/// Máquina de planta. `process` names the production stage or metalworking
/// process it belongs to ("inyeccion", "pulido", "laser", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub process: String,
}

impl Machine {
    pub fn belongs_to(&self, process: &str) -> bool {
        self.process.eq_ignore_ascii_case(process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to_ignores_case() {
        let machine = Machine {
            id: "m1".into(),
            name: "Inyectora 1".into(),
            process: "Inyeccion".into(),
        };
        assert!(machine.belongs_to("inyeccion"));
        assert!(!machine.belongs_to("pulido"));
    }
}
