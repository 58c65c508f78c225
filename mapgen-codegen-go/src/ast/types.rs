//! Go type expressions.

use std::fmt;

/// A Go type as it appears in declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `name` or `qualifier.name`.
    Named {
        qualifier: Option<String>,
        name: String,
    },
    /// Type text carried through unchanged.
    Verbatim(String),
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            qualifier: None,
            name: name.into(),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }

    pub fn pointer(self) -> Self {
        Self::Pointer(Box::new(self))
    }

    pub fn slice(self) -> Self {
        Self::Slice(Box::new(self))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named {
                qualifier: Some(q),
                name,
            } => write!(f, "{}.{}", q, name),
            Self::Named { name, .. } => write!(f, "{}", name),
            Self::Verbatim(text) => write!(f, "{}", text),
            Self::Pointer(inner) => write!(f, "*{}", inner),
            Self::Slice(inner) => write!(f, "[]{}", inner),
            Self::Map { key, value } => write!(f, "map[{}]{}", key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let thumbnails = TypeExpr::named("RestaurantThumbnail").pointer().slice();
        assert_eq!(thumbnails.to_string(), "[]*RestaurantThumbnail");

        let by_id = TypeExpr::map(
            TypeExpr::qualified("uuid", "UUID"),
            TypeExpr::named("ItemOutput").slice(),
        );
        assert_eq!(by_id.to_string(), "map[uuid.UUID][]ItemOutput");
        assert_eq!(
            TypeExpr::Verbatim("chan int".to_string()).pointer().to_string(),
            "*chan int"
        );
    }
}
