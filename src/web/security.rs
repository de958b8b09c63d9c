use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory sliding-window rate limiter keyed by caller-chosen strings
/// (here "action:ip"). State is per-process; restarting resets all
/// windows.
pub struct RateLimiter {
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Records an attempt for `key` and returns whether it is within
    /// `max_attempts` per `window`.
    pub fn allow(
        &self,
        key: &str,
        max_attempts: usize,
        window: Duration,
    ) -> bool {
        let now = Instant::now();
        let mut attempts = self
            .attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = attempts.entry(key.to_string()).or_default();
        entry.retain(|&at| now.duration_since(at) < window);

        if entry.len() >= max_attempts {
            return false;
        }
        entry.push(now);

        // Keys whose windows have fully expired are dropped so the map
        // cannot grow without bound.
        attempts.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Password validation. The minimum matches the common hosted-auth
/// default of six characters.
pub struct PasswordValidator;

impl PasswordValidator {
    const MIN_LENGTH: usize = 6;

    pub fn validate(password: &str) -> Result<(), String> {
        if password.len() < Self::MIN_LENGTH {
            return Err(format!(
                "Password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        Ok(())
    }
}

/// Email validation
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }

    // Domain must have at least one dot
    if !domain.contains('.') {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_character_password_is_accepted() {
        assert!(PasswordValidator::validate("abc123").is_ok());
        assert!(PasswordValidator::validate("12345").is_err());
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(validate_email("amara@example.org"));
        assert!(!validate_email("amara@example"));
        assert!(!validate_email("amara"));
        assert!(!validate_email("@example.org"));
        assert!(!validate_email(""));
    }

    #[test]
    fn rate_limiter_blocks_after_max_attempts() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);

        for _ in 0..3 {
            assert!(limiter.allow("sign-in:1.2.3.4", 3, window));
        }
        assert!(!limiter.allow("sign-in:1.2.3.4", 3, window));

        // Other keys are unaffected.
        assert!(limiter.allow("sign-in:5.6.7.8", 3, window));
    }
}
