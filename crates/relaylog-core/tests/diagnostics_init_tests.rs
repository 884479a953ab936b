use relaylog_core::logging_facility::{init, Profile};

#[test]
fn test_init_idempotent() {
    // Multiple calls should not panic
    init(Profile::Test);
    init(Profile::Test);
    init(Profile::Production);
}
