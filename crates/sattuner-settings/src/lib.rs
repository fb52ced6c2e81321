//! Config parsing and path resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves
//! configuration provided as strings. The CLI reads `sattuner.toml` (a
//! missing file is fine, defaults apply) and layers its flag overrides on
//! top.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::SattunerConfigV1;
pub use resolve::{Overrides, ResolvedSettings, resolve_settings};

/// Parse `sattuner.toml` (or equivalent) into a typed model.
pub fn parse_settings_toml(input: &str) -> anyhow::Result<SattunerConfigV1> {
    let cfg: SattunerConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
