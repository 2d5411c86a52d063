pub mod assets;
pub mod persistence;
pub mod version;

use uuid::Uuid;

/// Prefixed unique id for new records. Random rather than sequential so ids
/// stay unique across app restarts and merged state files.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn ids_carry_prefix_and_differ() {
        let a = generate_id("order");
        let b = generate_id("order");
        assert!(a.starts_with("order-"));
        assert_ne!(a, b);
    }
}
