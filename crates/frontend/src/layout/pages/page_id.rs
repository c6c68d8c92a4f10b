use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Идентификатор страницы (например "inventario", "metals-laser").
///
/// Каждой странице соответствует контейнер `{id}-page` в DOM, если только
/// страница не перенаправлена (alias) в контейнер другой страницы.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses a URL fragment (`#inventario` or `inventario`). Empty fragments
    /// yield `None`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.trim().trim_start_matches('#').trim();
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of the container rendering this page.
    pub fn container_id(&self) -> String {
        format!("{}-page", self.0)
    }

    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_id() {
        assert_eq!(PageId::from("inventario").container_id(), "inventario-page");
    }

    #[test]
    fn test_from_fragment() {
        assert_eq!(PageId::from_fragment("#pedidos"), Some(PageId::from("pedidos")));
        assert_eq!(PageId::from_fragment("pedidos"), Some(PageId::from("pedidos")));
        assert_eq!(PageId::from_fragment("#"), None);
        assert_eq!(PageId::from_fragment(""), None);
    }
}
