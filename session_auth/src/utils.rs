use base32::Alphabet;
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;

/// Fill `len` bytes from the system CSPRNG and encode them base-32,
/// lower-case, without padding.
///
/// Failure of the secure random source is fatal for the operation; there is
/// no fallback to a weaker generator.
pub(crate) fn gen_random_base32(len: usize) -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes).map_err(|_| UtilError::EntropyUnavailable)?;
    Ok(base32::encode(Alphabet::Rfc4648Lower { padding: false }, &bytes))
}

/// Generate a prefixed random record identifier, e.g. `usr_d2so45qberdzymbu`
pub fn gen_record_id(prefix: &str) -> Result<String, UtilError> {
    let rand = gen_random_base32(10)?;
    if prefix.is_empty() {
        Ok(rand)
    } else {
        Ok(format!("{prefix}_{rand}"))
    }
}

/// Append a pre-formatted cookie string to the response headers.
///
/// Uses `append` rather than `insert` so that a response carrying several
/// cookies keeps all of its `Set-Cookie` headers.
pub(crate) fn header_append_cookie(
    headers: &mut HeaderMap,
    cookie: String,
) -> Result<&HeaderMap, UtilError> {
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Secure random source unavailable")]
    EntropyUnavailable,

    #[error("Cookie error: {0}")]
    Cookie(String),
}
