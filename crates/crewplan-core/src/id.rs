//! Short opaque identifiers for generated entities.

use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of every generated id.
pub const ID_LEN: usize = 9;

/// Generates a short base-36 identifier.
///
/// Ids only need to be unique within one project session; they are not stable
/// across runs and carry no security properties.
pub fn generate_id() -> String {
    let mut value = Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        id.push(ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    id
}
