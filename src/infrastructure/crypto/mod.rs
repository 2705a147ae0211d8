pub mod default_password_hasher;

pub use default_password_hasher::DefaultPasswordHasher;
