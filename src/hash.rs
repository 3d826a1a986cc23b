//! Input hashing: every downstream stage consumes the fixed 16-byte digest
//! produced here. MD5 is used for reproducibility with other identicon
//! implementations, not for any security property.
use md5::{Digest, Md5};

/// Digest length in bytes. Fixed by the hash primitive.
pub const DIGEST_LEN: usize = 16;

/// Hash arbitrary input bytes into the fixed-length digest.
///
/// Pure and total: any finite input, including the empty string, yields
/// exactly [`DIGEST_LEN`] deterministic bytes.
pub fn digest16(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Md5::new();
    hasher.update(input);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::{digest16, DIGEST_LEN};

    #[test]
    fn known_vector_for_example() {
        let hex = digest16(b"example");
        assert_eq!(
            hex,
            [26, 121, 164, 214, 13, 230, 113, 142, 142, 91, 50, 110, 51, 138, 229, 51]
        );
    }

    #[test]
    fn empty_input_is_allowed() {
        let hex = digest16(b"");
        assert_eq!(hex.len(), DIGEST_LEN);
        // MD5 of the empty string: d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(hex[0], 0xd4);
        assert_eq!(hex[15], 0x7e);
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(digest16(b"identicon"), digest16(b"identicon"));
        assert_ne!(digest16(b"identicon"), digest16(b"identicon "));
    }
}
