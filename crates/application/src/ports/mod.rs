mod whitelist_store;

pub use whitelist_store::WhitelistStore;
