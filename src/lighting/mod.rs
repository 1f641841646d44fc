//! 조명 교체(형광등 → LED) 관련 계산 모듈 모음.

pub mod form;
pub mod report;
pub mod savings;
pub mod tube_catalog;

pub use form::{FormBounds, FormDefaults, FormError, FormField};
pub use report::{PaybackDisplay, ResultReport};
pub use savings::*;
pub use tube_catalog::{Catalog, CatalogError, CatalogTables, TubePair};
