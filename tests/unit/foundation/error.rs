use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TypelineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TypelineError::metrics("x")
            .to_string()
            .contains("metrics error:")
    );
    assert!(
        TypelineError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        TypelineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TypelineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
