//! Generated procedure names.
//!
//! Templates are filled by literal text replacement of the first
//! placeholder occurrence; no other rewriting happens, so
//! `ToOutput{suffix}` with suffix `Output` yields `ToOutputOutput`.

use mapgen_ir::NamingTemplates;

/// Placeholder replaced by the domain type name in `map_from_func`.
pub const DOMAIN_TYPE_PLACEHOLDER: &str = "{domain_type}";

/// Placeholder replaced by the DTO suffix in `map_to_func`.
pub const SUFFIX_PLACEHOLDER: &str = "{suffix}";

/// Name of the DTO → domain function for `domain_type`.
pub fn map_from_func_name(naming: &NamingTemplates, domain_type: &str) -> String {
    naming
        .map_from_func
        .replacen(DOMAIN_TYPE_PLACEHOLDER, domain_type, 1)
}

/// Name of the domain → DTO method.
pub fn map_to_func_name(naming: &NamingTemplates) -> String {
    naming
        .map_to_func
        .replacen(SUFFIX_PLACEHOLDER, &naming.dto_suffix, 1)
}
