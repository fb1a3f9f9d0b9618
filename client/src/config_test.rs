use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = Config::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
fn new_keeps_explicit_base_url() {
    let config = Config::new("https://rental.example.com");
    assert_eq!(config.base_url, "https://rental.example.com");
}
