mod option_store;

pub use option_store::SqliteOptionStore;
