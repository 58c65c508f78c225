//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how domain field names become exported DTO members and local
/// variables, and how reserved words are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a field name to an exported member name (e.g., "phoneNumber" -> "PhoneNumber")
    pub field_to_exported: fn(&str) -> String,
    /// Transform a field name to a local variable name (e.g., "Thumbnails" -> "thumbnails")
    pub field_to_local: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "type_" in Go)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as an exported member name.
    pub fn exported_name(&self, name: &str) -> String {
        let transformed = (self.field_to_exported)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a local variable.
    pub fn local_name(&self, name: &str) -> String {
        let transformed = (self.field_to_local)(name);
        self.safe_name(&transformed)
    }
}
