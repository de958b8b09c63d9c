use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use std::sync::OnceLock;

/// Argon2id hashing for account passwords. One engine instance is built
/// lazily and shared process-wide.
pub struct PasswordManager;

static ENGINE: OnceLock<Argon2> = OnceLock::new();

// Verified when no account matches the email, so a failed sign-in takes
// the same time whether or not the account exists.
const TIMING_FALLBACK_HASH: &str = "$argon2id$v=19$m=65536,t=3,p=4$dW5rbm93bl9zYWx0X2R1bW15$E2LvWPx3FxvDaJxEMpLLBfWbLkPXfYHrF8z9CGCX3eI";

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        ENGINE.get_or_init(|| {
            // 64 MiB memory, 3 iterations, 4 lanes, 32-byte output.
            let params = Params::new(64 * 1024, 3, 4, None)
                .expect("Invalid Argon2 parameters");

            Argon2::new(
                argon2::Algorithm::Argon2id,
                argon2::Version::V0x13,
                params,
            )
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Self::engine()
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    pub fn verify_password(
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, Error> {
        let parsed = PasswordHash::new(stored_hash)?;

        match Self::engine().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// A hash to verify against when the account does not exist.
    pub fn timing_equalization_hash() -> String {
        Self::hash_password("dummy_password_for_timing")
            .unwrap_or_else(|e| {
                log::error!("Failed to generate dummy hash: {}", e);
                TIMING_FALLBACK_HASH.to_string()
            })
    }
}
