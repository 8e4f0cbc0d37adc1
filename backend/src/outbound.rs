//! Driven adapters: implementations of domain ports against the outside
//! world.

pub mod docstore;

pub use docstore::HttpDocumentStore;
