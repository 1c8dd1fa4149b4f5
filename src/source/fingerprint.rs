//! Content fingerprint for supplied value lists

use crate::cursor::Value;

/// BLAKE3 digest of a value list
pub type Fingerprint = blake3::Hash;

/// Fingerprint a list by content.
///
/// `Int(2)` and `Float(2.0)` hash differently, as do lists that differ
/// only in length.
pub fn fingerprint(values: &[Value]) -> Fingerprint {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(values.len() as u64).to_le_bytes());
    for value in values {
        match *value {
            Value::Int(i) => {
                hasher.update(&[0u8]);
                hasher.update(&i.to_le_bytes());
            }
            Value::Float(x) => {
                hasher.update(&[1u8]);
                hasher.update(&x.to_bits().to_le_bytes());
            }
        }
    }
    hasher.finalize()
}
