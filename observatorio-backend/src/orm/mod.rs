pub mod water_bodies;

pub type Type = diesel::pg::Pg;

/// Escapes the wildcards of a `LIKE` pattern so the input only matches literally.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Pattern matching any value containing `input`.
pub fn contains(input: &str) -> String {
    concat_string::concat_string!("%", escape_like(input), "%")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("lago", "lago")]
    #[case("100%", "100\\%")]
    #[case("a_b", "a\\_b")]
    #[case("c:\\", "c:\\\\")]
    fn test_escape_like(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_like(input), expected);
    }

    #[test]
    fn test_contains() {
        assert_eq!(contains("río"), "%río%");
    }
}
