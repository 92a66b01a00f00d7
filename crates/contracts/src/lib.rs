//! Shared contracts of the rug catalog: the canonical record that travels as
//! `data.json`, the ingestion schema variants and the pure view derivations
//! used by the client.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
