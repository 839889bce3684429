//! Translation catalog: built-in tables, message keys and the store.

mod builtin;
pub mod keys;
mod store;

pub use store::{
    CatalogError,
    TranslationStore,
    TranslationStoreBuilder,
    flatten_json,
};
