use super::*;

#[test]
fn helper_constructors_format_messages() {
    let e = PeelError::validation("segment_count must be >= 1");
    assert_eq!(
        e.to_string(),
        "validation error: segment_count must be >= 1"
    );

    let e = PeelError::evaluation("fraction must be finite");
    assert_eq!(e.to_string(), "evaluation error: fraction must be finite");
}

#[test]
fn anyhow_errors_pass_through_transparently() {
    let inner = anyhow::anyhow!("host supplied a broken snapshot");
    let e = PeelError::from(inner);
    assert_eq!(e.to_string(), "host supplied a broken snapshot");
    assert!(matches!(e, PeelError::Other(_)));
}
