/// Thematic break: three or more of the same character from [`Divider::CHARS`].
pub struct Divider;

impl Divider {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    /// Whether `line` is a divider. Characters may not be mixed and nothing
    /// else (including leading whitespace) may appear; trailing whitespace is
    /// ignored.
    pub fn opens(line: &str) -> bool {
        let t = line.trim_end();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && t.chars().count() >= Self::MIN_LEN
            && t.chars().all(|c| c == first)
    }
}
