use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_ISSUES_FOUND);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_ISSUES_FOUND, EXIT_CONFIG_ERROR);
}

#[test]
fn config_errors_use_clap_exit_code() {
    // clap exits with 2 on usage errors; configuration problems share it.
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
