//! Leaf types shared by the round engine, the ledger and their callers.

pub use self::{config::*, hint::*, scoring::*, seed::*};

pub(crate) mod config;
pub(crate) mod hint;
pub(crate) mod scoring;
pub(crate) mod seed;
