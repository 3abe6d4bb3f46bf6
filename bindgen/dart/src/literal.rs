use std::fmt::{self, Display, Write};

/// Renders Rust values as Dart literals.
pub trait DartLiteral {
    /// Displays as a single quoted Dart string literal denoting exactly this value.
    fn dart_string(&self) -> impl Display;
}

impl DartLiteral for str {
    fn dart_string(&self) -> impl Display {
        SingleQuotedDisplay(self)
    }
}

struct SingleQuotedDisplay<'inner>(&'inner str);
impl Display for SingleQuotedDisplay<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_char('\'')?;
        for character in self.0.chars() {
            match character {
                '\\' => formatter.write_str(r"\\")?,
                '\'' => formatter.write_str(r"\'")?,
                // would start an interpolation otherwise
                '$' => formatter.write_str(r"\$")?,
                '\n' => formatter.write_str(r"\n")?,
                '\r' => formatter.write_str(r"\r")?,
                '\t' => formatter.write_str(r"\t")?,
                other => formatter.write_char(other)?,
            }
        }
        formatter.write_char('\'')
    }
}

#[cfg(test)]
mod tests {
    use super::DartLiteral;

    #[test]
    fn plain_values_are_quoted_verbatim() {
        assert_eq!(
            "1:123:android:abc".dart_string().to_string(),
            "'1:123:android:abc'"
        );
        assert_eq!("".dart_string().to_string(), "''");
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(r"it's".dart_string().to_string(), r"'it\'s'");
        assert_eq!(r"a\b".dart_string().to_string(), r"'a\\b'");
        assert_eq!("${key}".dart_string().to_string(), r"'\${key}'");
        assert_eq!("a\nb\tc\r".dart_string().to_string(), r"'a\nb\tc\r'");
    }
}
