// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    DomainTypeConfig, DtoTypeConfig, InitFuncConfig, Manifest, MapgenToml, NestedBlock,
    ParseContext, is_go_keyword,
};
