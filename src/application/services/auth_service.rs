//! Basic-auth credential verification service.

use sha2::{Digest, Sha256};

/// Verifies HTTP Basic credentials against the configured pair.
///
/// Holds the single credential pair loaded from configuration. Policy beyond
/// that (users, roles, tokens) is out of scope.
pub struct AuthService {
    username: String,
    password: String,
}

impl AuthService {
    /// Creates a new auth service for the configured credential pair.
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Returns true when both username and password match.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        // Compare digests rather than raw strings so timing does not track
        // the position of the first mismatching byte.
        let user_ok = digest_eq(username, &self.username);
        let pass_ok = digest_eq(password, &self.password);

        user_ok & pass_ok
    }
}

fn digest_eq(left: &str, right: &str) -> bool {
    Sha256::digest(left.as_bytes()) == Sha256::digest(right.as_bytes())
}
