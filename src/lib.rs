//! Sweep stale `.lastUpdated` failure markers from a local Maven repository.
//!
//! When Maven fails to download an artifact it writes a
//! `<artifact>.lastUpdated` sentinel next to where the artifact would have
//! lived; until that sentinel times out, later builds refuse to retry the
//! download. This crate walks a repository root, deletes those sentinels,
//! and returns a [`sweeper::SweepReport`] with exact counters and a bounded
//! list of per-file errors.

pub mod classifier;
pub mod cli;
pub mod output;
pub mod sweeper;
pub mod validator;
pub mod walker;
