pub mod entities;
pub mod repositories;

pub use entities::{Category, Item, PasswordHasher, ReviewBox, ReviewDate, User};
