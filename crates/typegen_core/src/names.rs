//! Fully-qualified declaration names.
//!
//! A fully-qualified name has the shape `module.Identifier`. The module part may itself contain dots
//! (`github.com/acme/api.Request`); only the text after the last `.` is the bare identifier.

/// Split a fully-qualified name into `(module, identifier)`.
///
/// A name without any `.` has an empty module part.
pub fn split_qualified(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}

/// Return the bare (unqualified) identifier of a fully-qualified name.
pub fn bare_name(name: &str) -> &str {
    split_qualified(name).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_qualified("pkg.Request"), ("pkg", "Request"));
    }

    #[test]
    fn test_split_uses_last_dot() {
        assert_eq!(
            split_qualified("github.com/acme/api.Request"),
            ("github.com/acme/api", "Request")
        );
    }

    #[test]
    fn test_split_unqualified() {
        assert_eq!(split_qualified("Request"), ("", "Request"));
        assert_eq!(bare_name(""), "");
    }
}
