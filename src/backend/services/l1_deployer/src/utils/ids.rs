use chrono::Utc;

/// Deployment id with a millisecond-clock suffix. Unique within one
/// process; not a global identifier.
pub fn deployment_id() -> String {
    format!("deploy-{}", Utc::now().timestamp_millis())
}

/// URL slug derived from a subnet name: lowercased, whitespace collapsed
/// to single hyphens.
pub fn subnet_slug(subnet_name: &str) -> String {
    subnet_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(subnet_slug("My Test Subnet"), "my-test-subnet");
        assert_eq!(subnet_slug("DeFi"), "defi");
        assert_eq!(subnet_slug("  padded   name "), "padded-name");
    }

    #[test]
    fn deployment_id_has_expected_prefix() {
        assert!(deployment_id().starts_with("deploy-"));
    }
}
