use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::domain::entities::user::PasswordHasher;

/// argon2id-backed `PasswordHasher`.
///
/// Every hash gets a fresh OS salt, so the same password encodes
/// differently on every call. The cost parameters are tunable for
/// operators that need to rebalance hashing latency; `default()` uses
/// the library's recommended settings.
pub struct DefaultPasswordHasher {
    argon2: Argon2<'static>,
}

impl DefaultPasswordHasher {
    pub fn new(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for DefaultPasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl PasswordHasher for DefaultPasswordHasher {
    fn hash(&self, plain: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        match self.argon2.hash_password(plain.as_bytes(), &salt) {
            Ok(hash) => hash.to_string(),
            // 入力起因では到達しない。ハッシュ基盤自体の故障
            Err(err) => panic!("argon2 hash failed: {err}"),
        }
    }

    fn verify(&self, plain: &str, encoded: &str) -> bool {
        let parsed = match PasswordHash::new(encoded) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("stored password hash is not parseable: {err}");
                return false;
            }
        };
        self.argon2.verify_password(plain.as_bytes(), &parsed).is_ok()
    }

    fn search_key(&self, email: &str) -> String {
        let digest = Sha256::digest(email.as_bytes());
        format!("{digest:x}")
    }
}
