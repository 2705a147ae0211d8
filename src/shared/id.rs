use uuid::Uuid;

/// Mint a new opaque identifier.
///
/// Entities never call this themselves; id generation belongs to the
/// calling use case, which passes the id into the entity factory.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
