use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::validation;

// 対応タイムゾーン
pub const TIMEZONE_TOKYO: &str = "Asia/Tokyo";

// テーマカラー
pub const THEME_COLOR_DARK: &str = "dark";
pub const THEME_COLOR_LIGHT: &str = "light";

// 対応言語
pub const LANGUAGE_JA: &str = "ja";

const ALLOWED_TIMEZONES: &[&str] = &[TIMEZONE_TOKYO];
const ALLOWED_THEME_COLORS: &[&str] = &[THEME_COLOR_DARK, THEME_COLOR_LIGHT];
const ALLOWED_LANGUAGES: &[&str] = &[LANGUAGE_JA];

const EMAIL_MIN_CHARS: usize = 7;
const EMAIL_MAX_CHARS: usize = 254;
const PASSWORD_MIN_CHARS: usize = 6;
const TIMEZONE_MAX_CHARS: usize = 64;
const LANGUAGE_MAX_CHARS: usize = 5;

/// One-way credential hashing capability.
///
/// Injected into the user operations that touch credentials so entity
/// tests can swap in a cheap fake while production uses the argon2
/// implementation from `infrastructure::crypto`.
pub trait PasswordHasher: Send + Sync {
    /// Salted one-way hash of a plaintext password. An internal failure
    /// of the hashing primitive is a broken runtime dependency and
    /// panics; invalid input never reaches this point.
    fn hash(&self, plain: &str) -> String;

    /// Constant-time comparison of a candidate against a stored hash.
    fn verify(&self, plain: &str, encoded: &str) -> bool;

    /// Deterministic digest of an email address, used by the storage
    /// layer to look users up without indexing the raw address.
    fn search_key(&self, email: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub encrypted_password: String,
    pub timezone: String,
    pub theme_color: String,
    pub language: String,
    pub verified_at: Option<DateTime<Utc>>,
}

impl User {
    /// Validates every field, then hashes the password. The plaintext is
    /// never stored.
    pub fn new(
        hasher: &dyn PasswordHasher,
        id: String,
        email: String,
        password: String,
        timezone: String,
        theme_color: String,
        language: String,
    ) -> Result<Self, AppError> {
        validate_email(&email)?;
        validate_password(&password)?;
        validate_timezone(&timezone)?;
        validate_theme_color(&theme_color)?;
        validate_language(&language)?;

        let encrypted_password = hasher.hash(&password);

        Ok(Self {
            id,
            email,
            encrypted_password,
            timezone,
            theme_color,
            language,
            verified_at: None, // 登録直後は未認証
        })
    }

    /// Rehydration path for the persistence layer. The stored fields are
    /// already trusted, so nothing is revalidated or rehashed; the
    /// storage collaborator assigns `encrypted_password` itself.
    pub fn reconstruct(
        id: String,
        email: String,
        timezone: String,
        theme_color: String,
        language: String,
        verified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            email,
            encrypted_password: String::new(),
            timezone,
            theme_color,
            language,
            verified_at,
        }
    }

    /// Replaces the profile fields, all four or none.
    pub fn set(
        &mut self,
        email: String,
        timezone: String,
        theme_color: String,
        language: String,
    ) -> Result<(), AppError> {
        validate_email(&email)?;
        validate_timezone(&timezone)?;
        validate_theme_color(&theme_color)?;
        validate_language(&language)?;

        self.email = email;
        self.timezone = timezone;
        self.theme_color = theme_color;
        self.language = language;

        Ok(())
    }

    pub fn set_password(
        &mut self,
        hasher: &dyn PasswordHasher,
        password: &str,
    ) -> Result<(), AppError> {
        validate_password(password)?;

        self.encrypted_password = hasher.hash(password);

        Ok(())
    }

    /// Checks a login candidate against the stored hash. A mismatch is an
    /// authentication failure, never a validation one, and nothing is
    /// mutated either way.
    pub fn is_valid_password(
        &self,
        hasher: &dyn PasswordHasher,
        password: &str,
    ) -> Result<(), AppError> {
        if !hasher.verify(password, &self.encrypted_password) {
            return Err(AppError::authentication("password does not match"));
        }
        Ok(())
    }

    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }

    /// Stamps the verification time. Unconditional; stamping an already
    /// verified user just refreshes the timestamp.
    pub fn set_verified(&mut self) {
        self.verified_at = Some(Utc::now());
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    validation::required(email, "email is required")?;
    validation::chars_between(
        email,
        EMAIL_MIN_CHARS,
        EMAIL_MAX_CHARS,
        "email must be between 7 and 254 characters",
    )?;
    validation::email_format(email, "email format is invalid")
}

fn validate_password(password: &str) -> Result<(), AppError> {
    validation::required(password, "password is required")?;
    validation::min_chars(
        password,
        PASSWORD_MIN_CHARS,
        "password must be at least 6 characters",
    )
}

fn validate_timezone(timezone: &str) -> Result<(), AppError> {
    validation::required(timezone, "timezone is required")?;
    validation::max_chars(
        timezone,
        TIMEZONE_MAX_CHARS,
        "timezones longer than 64 characters are not supported",
    )?;
    validation::one_of(timezone, ALLOWED_TIMEZONES, "invalid timezone value")
}

fn validate_theme_color(theme_color: &str) -> Result<(), AppError> {
    validation::required(theme_color, "theme color is required")?;
    validation::one_of(
        theme_color,
        ALLOWED_THEME_COLORS,
        "theme color must be 'dark' or 'light'",
    )
}

fn validate_language(language: &str) -> Result<(), AppError> {
    validation::required(language, "language is required")?;
    validation::max_chars(
        language,
        LANGUAGE_MAX_CHARS,
        "languages longer than 5 characters are not supported",
    )?;
    validation::one_of(language, ALLOWED_LANGUAGES, "invalid language tag")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap reversible stand-in so these tests never pay for argon2.
    struct StubHasher;

    impl PasswordHasher for StubHasher {
        fn hash(&self, plain: &str) -> String {
            format!("stub${plain}")
        }

        fn verify(&self, plain: &str, encoded: &str) -> bool {
            encoded == format!("stub${plain}")
        }

        fn search_key(&self, email: &str) -> String {
            format!("key${email}")
        }
    }

    fn valid_user() -> User {
        User::new(
            &StubHasher,
            "user1".to_string(),
            "user@example.com".to_string(),
            "password123".to_string(),
            TIMEZONE_TOKYO.to_string(),
            THEME_COLOR_DARK.to_string(),
            LANGUAGE_JA.to_string(),
        )
        .expect("valid user")
    }

    #[test]
    fn test_new_user_keeps_inputs_and_starts_unverified() {
        let user = valid_user();

        assert_eq!(user.id, "user1");
        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.timezone, TIMEZONE_TOKYO);
        assert_eq!(user.theme_color, THEME_COLOR_DARK);
        assert_eq!(user.language, LANGUAGE_JA);
        assert_eq!(user.verified_at, None);
        assert!(!user.is_verified());
    }

    #[test]
    fn test_new_user_never_stores_the_plaintext() {
        let user = valid_user();

        assert_ne!(user.encrypted_password, "password123");
        assert!(user.is_valid_password(&StubHasher, "password123").is_ok());
    }

    #[test]
    fn test_new_user_validation_messages() {
        let cases: &[(&str, &str, &str, &str, &str, &str)] = &[
            ("", "password123", TIMEZONE_TOKYO, "dark", "ja", "email is required"),
            (
                "a@b.c",
                "password123",
                TIMEZONE_TOKYO,
                "dark",
                "ja",
                "email must be between 7 and 254 characters",
            ),
            (
                "not-an-email",
                "password123",
                TIMEZONE_TOKYO,
                "dark",
                "ja",
                "email format is invalid",
            ),
            (
                "user@example.com",
                "",
                TIMEZONE_TOKYO,
                "dark",
                "ja",
                "password is required",
            ),
            (
                "user@example.com",
                "12345",
                TIMEZONE_TOKYO,
                "dark",
                "ja",
                "password must be at least 6 characters",
            ),
            (
                "user@example.com",
                "password123",
                "",
                "dark",
                "ja",
                "timezone is required",
            ),
            (
                "user@example.com",
                "password123",
                "Mars/Olympus",
                "dark",
                "ja",
                "invalid timezone value",
            ),
            (
                "user@example.com",
                "password123",
                TIMEZONE_TOKYO,
                "",
                "ja",
                "theme color is required",
            ),
            (
                "user@example.com",
                "password123",
                TIMEZONE_TOKYO,
                "sepia",
                "ja",
                "theme color must be 'dark' or 'light'",
            ),
            (
                "user@example.com",
                "password123",
                TIMEZONE_TOKYO,
                "dark",
                "",
                "language is required",
            ),
            (
                "user@example.com",
                "password123",
                TIMEZONE_TOKYO,
                "dark",
                "en",
                "invalid language tag",
            ),
        ];

        for (email, password, timezone, theme, language, want) in cases {
            let err = User::new(
                &StubHasher,
                "user1".to_string(),
                email.to_string(),
                password.to_string(),
                timezone.to_string(),
                theme.to_string(),
                language.to_string(),
            )
            .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{want}");
            assert_eq!(err.to_string(), *want);
        }
    }

    #[test]
    fn test_timezone_over_64_chars_has_its_own_message() {
        let long_timezone = "a".repeat(65);
        let err = User::new(
            &StubHasher,
            "user1".to_string(),
            "user@example.com".to_string(),
            "password123".to_string(),
            long_timezone,
            THEME_COLOR_DARK.to_string(),
            LANGUAGE_JA.to_string(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "timezones longer than 64 characters are not supported"
        );
    }

    #[test]
    fn test_reconstruct_skips_validation() {
        let verified_at = Utc::now();
        // 保存済みデータはバリデーションを通さない
        let user = User::reconstruct(
            "user1".to_string(),
            "whatever".to_string(),
            "Mars/Olympus".to_string(),
            "sepia".to_string(),
            "xx".to_string(),
            Some(verified_at),
        );

        assert_eq!(user.email, "whatever");
        assert_eq!(user.encrypted_password, "");
        assert_eq!(user.verified_at, Some(verified_at));
        assert!(user.is_verified());
    }

    #[test]
    fn test_set_replaces_all_profile_fields() {
        let mut user = valid_user();

        user.set(
            "other@example.com".to_string(),
            TIMEZONE_TOKYO.to_string(),
            THEME_COLOR_LIGHT.to_string(),
            LANGUAGE_JA.to_string(),
        )
        .expect("valid update");

        assert_eq!(user.email, "other@example.com");
        assert_eq!(user.theme_color, THEME_COLOR_LIGHT);
    }

    #[test]
    fn test_set_failure_leaves_user_unchanged() {
        let mut user = valid_user();
        let before = user.clone();

        let err = user
            .set(
                "other@example.com".to_string(),
                TIMEZONE_TOKYO.to_string(),
                "sepia".to_string(),
                LANGUAGE_JA.to_string(),
            )
            .unwrap_err();

        assert_eq!(err.to_string(), "theme color must be 'dark' or 'light'");
        assert_eq!(user, before);
    }

    #[test]
    fn test_set_password_replaces_the_hash() {
        let mut user = valid_user();

        user.set_password(&StubHasher, "new-password").expect("valid password");

        assert!(user.is_valid_password(&StubHasher, "new-password").is_ok());
        assert!(user.is_valid_password(&StubHasher, "password123").is_err());
    }

    #[test]
    fn test_set_password_failure_keeps_the_old_hash() {
        let mut user = valid_user();
        let before = user.clone();

        let err = user.set_password(&StubHasher, "12345").unwrap_err();

        assert_eq!(err.to_string(), "password must be at least 6 characters");
        assert_eq!(user, before);
        assert!(user.is_valid_password(&StubHasher, "password123").is_ok());
    }

    #[test]
    fn test_is_valid_password_rejects_everything_else() {
        let user = valid_user();

        for candidate in ["wrong", "", "PASSWORD123"] {
            let err = user.is_valid_password(&StubHasher, candidate).unwrap_err();
            assert!(matches!(err, AppError::Authentication(_)), "{candidate}");
            assert_eq!(err.to_string(), "password does not match");
        }

        // 保存されたハッシュそのものも通らない
        let stored = user.encrypted_password.clone();
        assert!(user.is_valid_password(&StubHasher, &stored).is_err());
    }

    #[test]
    fn test_set_verified_is_idempotent_in_effect() {
        let mut user = valid_user();

        user.set_verified();
        assert!(user.is_verified());

        user.set_verified();
        assert!(user.is_verified());
    }
}
