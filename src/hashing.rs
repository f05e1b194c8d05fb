//! Utility Sha256 Hash Function
use arrayref::array_ref;
use sha2::{Digest, Sha256};

// Define a trait for generic hashing behavior
pub trait HashingBehavior {
    fn hash<T: AsRef<[u8]>>(data: T) -> [u8; 32];
}

// Implement the trait for a struct representing a Sha256 hasher
pub struct Sha256Hasher;

impl HashingBehavior for Sha256Hasher {
    /// Hash Function using SHA-256
    fn hash<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data.as_ref());
        let result = hasher.finalize();
        *array_ref!(result, 0, 32)
    }
}

/// Free-function form of [`Sha256Hasher::hash`], for call sites that don't
/// want to name the hasher type.
pub fn hash<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    Sha256Hasher::hash(data)
}
