//! Built-in cross-reference lints.

mod dto_domain_type;
mod generated_names;
mod ignored_fields;
mod init_func;
mod map_binding;
mod nesting_cycle;
mod unsupported_type;

pub use dto_domain_type::DtoDomainTypeLint;
pub use generated_names::GeneratedNamesLint;
pub use ignored_fields::IgnoredFieldsLint;
pub use init_func::InitFuncLint;
pub use map_binding::MapBindingLint;
pub use nesting_cycle::NestingCycleLint;
pub use unsupported_type::UnsupportedTypeLint;

/// Manifest location of a DTO declaration.
fn dto_location(name: &str) -> String {
    format!("domain_dto_types.{}", name)
}
