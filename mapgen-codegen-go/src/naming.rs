//! Go-specific naming conventions.

use mapgen_codegen::language::NamingConvention;
use mapgen_core::{lower_first, upper_first};

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
///
/// Besides keywords, the predeclared identifiers used by generated mapping
/// code are reserved so locals never shadow them.
pub const GO_NAMING: NamingConvention = NamingConvention {
    field_to_exported: upper_first,
    field_to_local: lower_first,
    reserved_words: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var", "append", "len", "make", "new",
        "nil", "true", "false",
    ],
    escape_reserved: escape_go_reserved,
};
