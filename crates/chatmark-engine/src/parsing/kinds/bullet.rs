/// Bullet list item type with owned marker constants.
///
/// A bullet line is optional leading spaces/tabs, one marker, then at least
/// one space/tab before the content.
pub struct Bullet;

impl Bullet {
    pub const MARKERS: [u8; 3] = [b'*', b'-', b'+'];

    /// Length of the bullet prefix (indent, marker, separating whitespace)
    /// at the start of `s`, or `None` if `s` doesn't open a bullet.
    pub fn prefix_len(s: &str) -> Option<usize> {
        let bytes = s.as_bytes();
        let indent = bytes.iter().take_while(|b| is_blank(**b)).count();
        let marker = *bytes.get(indent)?;
        if !Self::MARKERS.contains(&marker) {
            return None;
        }
        let gap = bytes[indent + 1..].iter().take_while(|b| is_blank(**b)).count();
        if gap == 0 {
            return None;
        }
        Some(indent + 1 + gap)
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("* a", Some(2))]
    #[case("- a", Some(2))]
    #[case("+ a", Some(2))]
    #[case("   *   a", Some(7))]
    #[case("\t-\ta", Some(3))]
    #[case("* ", Some(2))]
    #[case("*a*", None)]
    #[case("**bold**", None)]
    #[case("---", None)]
    #[case("-", None)]
    #[case("a * b", None)]
    #[case("", None)]
    fn prefix_detection(#[case] line: &str, #[case] expected: Option<usize>) {
        assert_eq!(Bullet::prefix_len(line), expected);
    }
}
