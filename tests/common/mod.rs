use std::path::PathBuf;

/// MD5 digest of the input `"example"`, the shared known vector.
pub const EXAMPLE_HEX: [u8; 16] = [
    26, 121, 164, 214, 13, 230, 113, 142, 142, 91, 50, 110, 51, 138, 229, 51,
];

/// Per-process scratch directory for persistence tests.
pub fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("identicon-{tag}-{}", std::process::id()))
}
