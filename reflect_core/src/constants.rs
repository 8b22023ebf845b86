// reflect_core/src/constants.rs

/// Cap of a string on the wire, terminator included.
pub const MAX_STRING_SIZE: usize = 300;

/// Length of the fingerprint that prefixes a fingerprinted record.
pub const FINGERPRINT_SIZE: usize = 8;

pub const EDITOR_CONFIG_RON: &str = "editor_config.ron";

pub const LOG_BASENAME: &str = "reflect_editor";
