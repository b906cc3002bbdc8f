use sha2::{Digest, Sha256};

use crate::session::errors::SessionError;
use crate::utils::gen_random_base32;

/// Number of random bytes in a session token. 160 bits encodes to 32
/// base-32 characters.
const SESSION_TOKEN_BYTES: usize = 20;

/// Generate an opaque session token from the system CSPRNG, base-32
/// lower-case without padding. The plaintext token travels only in the
/// cookie; storage sees `hash_token` of it.
pub fn generate_session_token() -> Result<String, SessionError> {
    Ok(gen_random_base32(SESSION_TOKEN_BYTES)?)
}

/// Deterministic one-way digest of a token, lower-case hex SHA-256.
///
/// The digest doubles as the session primary key, so lookup is stateless: a
/// stolen database yields no usable bearer credentials.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
