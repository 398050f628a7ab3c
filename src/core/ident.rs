//! Short random identifiers
//!
//! Identifiers are collision-tolerant labels for logs and in-memory keys.
//! They are not suitable as secrets.

use crate::config::UtilsConfig;
use crate::error::Result;
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate `_` followed by nine random base-36 characters
pub fn unique_id() -> String {
    let config = UtilsConfig::default();
    generate(&config.id_prefix, config.id_length)
}

/// Generate an identifier using the configured prefix and length.
///
/// The configuration is validated first, so an empty or oversized
/// `id_length` is reported instead of producing a degenerate identifier.
pub fn unique_id_with(config: &UtilsConfig) -> Result<String> {
    config.validate()?;
    Ok(generate(&config.id_prefix, config.id_length))
}

fn generate(prefix: &str, length: usize) -> String {
    let mut rng = rand::rng();
    let mut id = String::with_capacity(prefix.len() + length);
    id.push_str(prefix);
    id.extend((0..length).map(|_| BASE36[rng.random_range(0..BASE36.len())] as char));
    id
}
