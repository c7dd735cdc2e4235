//! Splitting bare import specifiers into package name and sub-path.

/// A bare specifier such as `bootstrap`, `@scope/grid` or
/// `test-npm-subpath/assets/styles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSpecifier<'a> {
    pub name: &'a str,
    pub subpath: Option<&'a str>,
}

impl<'a> PackageSpecifier<'a> {
    /// `None` for relative, absolute, or empty specifiers.
    pub fn parse(specifier: &'a str) -> Option<Self> {
        if specifier.is_empty()
            || specifier.starts_with('.')
            || specifier.starts_with('/')
            || specifier.starts_with('\\')
        {
            return None;
        }

        let split_at = if specifier.starts_with('@') {
            let scope_end = specifier.find('/')?;
            let rest = &specifier[scope_end + 1..];
            if rest.is_empty() || rest.starts_with('/') {
                return None;
            }
            rest.find('/').map(|i| scope_end + 1 + i)
        } else {
            specifier.find('/')
        };

        let (name, subpath) = match split_at {
            Some(i) => (&specifier[..i], Some(&specifier[i + 1..])),
            None => (specifier, None),
        };

        Some(Self {
            name,
            subpath: subpath.filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let spec = PackageSpecifier::parse("test-npm-main-scss").unwrap();
        assert_eq!(spec.name, "test-npm-main-scss");
        assert_eq!(spec.subpath, None);
    }

    #[test]
    fn test_name_with_subpath() {
        let spec = PackageSpecifier::parse("test-npm-subpath/assets/styles").unwrap();
        assert_eq!(spec.name, "test-npm-subpath");
        assert_eq!(spec.subpath, Some("assets/styles"));

        let trailing = PackageSpecifier::parse("bootstrap/").unwrap();
        assert_eq!(trailing.name, "bootstrap");
        assert_eq!(trailing.subpath, None);
    }

    #[test]
    fn test_scoped_names() {
        let spec = PackageSpecifier::parse("@acme/grid").unwrap();
        assert_eq!(spec.name, "@acme/grid");
        assert_eq!(spec.subpath, None);

        let sub = PackageSpecifier::parse("@acme/grid/scss/mixins").unwrap();
        assert_eq!(sub.name, "@acme/grid");
        assert_eq!(sub.subpath, Some("scss/mixins"));

        assert_eq!(PackageSpecifier::parse("@acme"), None);
        assert_eq!(PackageSpecifier::parse("@acme/"), None);
    }

    #[test]
    fn test_non_bare_specifiers() {
        assert_eq!(PackageSpecifier::parse(""), None);
        assert_eq!(PackageSpecifier::parse("./colors"), None);
        assert_eq!(PackageSpecifier::parse("../colors"), None);
        assert_eq!(PackageSpecifier::parse("/abs/colors"), None);
    }
}
