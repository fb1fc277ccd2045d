use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WordrankError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        WordrankError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        WordrankError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WordrankError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let e = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = WordrankError::from(e);
    assert!(matches!(err, WordrankError::Serde(_)));
}
