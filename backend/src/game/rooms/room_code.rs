use rand::Rng;

// No O or 0
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNPQRSTUVWXYZ123456789";
pub const CODE_LENGTH: usize = 4;

pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Keep generating codes until `try_claim` accepts one, then return it.
/// `try_claim` should reserve the code atomically and report whether it did.
pub fn claim_unique_room_code<F>(mut try_claim: F) -> String
where
    F: FnMut(&str) -> bool,
{
    loop {
        let code = generate_room_code();
        if try_claim(&code) {
            return code;
        }
    }
}

/// Normalize user input to a room code. Returns None if it can't be one.
pub fn normalize_room_code(input: &str) -> Option<String> {
    let code = input.trim().to_ascii_uppercase();
    let valid = code.len() == CODE_LENGTH && code.bytes().all(|b| CHARSET.contains(&b));
    valid.then_some(code)
}
