/// Pattern metacharacter matching exactly one letter.
pub const ANY_ONE: char = '?';
/// Pattern metacharacter matching any run of letters, including none.
pub const ANY_RUN: char = '*';

pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
