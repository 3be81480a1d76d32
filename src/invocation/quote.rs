use crate::error::LaunchError;

/// Characters `cmd.exe` interprets outside double quotes.
const CMD_METACHARS: &[char] = &['^', '%', '&', '|', '<', '>', '(', ')', '!', '"'];

/// Double-quote `path` for display, escaping embedded quotes.
#[must_use]
pub fn quote_path(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');
    for c in path.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Caret-escape an unquoted word of a `cmd /c` line.
#[must_use]
pub fn cmd_escape(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        if CMD_METACHARS.contains(&c) {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}

/// Double-quote a path for a `cmd /c` line.
///
/// Inside quotes `cmd.exe` still expands `%VAR%` and has no escape for `"`,
/// so paths containing either are refused.
///
/// # Errors
///
/// [`LaunchError::UnsafeShellArgument`] for a path containing `%` or `"`.
pub fn cmd_quote_path(path: &str) -> Result<String, LaunchError> {
    if path.contains(['%', '"']) {
        return Err(LaunchError::UnsafeShellArgument {
            arg: path.to_string(),
        });
    }
    Ok(format!("\"{path}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_path() {
        assert_eq!(quote_path("/p"), "\"/p\"");
    }

    #[test]
    fn test_quote_path_with_spaces_and_quotes() {
        assert_eq!(
            quote_path(r#"C:\My "Best" Project"#),
            r#""C:\My \"Best\" Project""#
        );
    }

    #[test]
    fn test_cmd_escape_carets_every_metachar() {
        assert_eq!(cmd_escape("idea"), "idea");
        assert_eq!(cmd_escape("a&b|c"), "a^&b^|c");
        assert_eq!(cmd_escape("%PATH%"), "^%PATH^%");
        assert_eq!(cmd_escape("x^(y)<z>!"), "x^^^(y^)^<z^>^!");
    }

    #[test]
    fn test_cmd_quote_path_keeps_ampersand_inside_quotes() {
        assert_eq!(
            cmd_quote_path(r"C:\work\a&b (copy).rs").unwrap(),
            r#""C:\work\a&b (copy).rs""#
        );
    }

    #[test]
    fn test_cmd_quote_path_refuses_percent_and_quote() {
        for path in [r"C:\work\100%PATH%done", r#"C:\work\"quoted""#] {
            let err = cmd_quote_path(path).unwrap_err();
            assert!(
                matches!(err, LaunchError::UnsafeShellArgument { ref arg } if arg == path),
                "{err:?}"
            );
        }
    }
}
