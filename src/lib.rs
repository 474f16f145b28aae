//! ciki-raino: Pregnancy and childcare assistant for Hausa speakers, with
//! Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
