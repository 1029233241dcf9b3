//! Reduces a dependency specifier such as `requests[socks] (>=2.0) ; python_version < "3.8"`
//! to the bare package name.

use crate::domain::model::PackageName;

/// Characters that end the name part of a specifier.
const NAME_TERMINATORS: [char; 9] = ['<', '>', '=', '!', '~', '^', '(', '[', ' '];

/// Returns `None` when nothing is left of the name, e.g. for `"; extra == 'x'"`.
pub fn extract_name(specifier: &str) -> Option<PackageName> {
    let requirement = match specifier.split_once(';') {
        Some((before_marker, _)) => before_marker,
        None => specifier,
    };
    let requirement = requirement.trim();

    let name = match requirement.find(NAME_TERMINATORS) {
        Some(end) => &requirement[..end],
        None => requirement,
    };

    PackageName::new(name)
}

/// Extracts names in order, skipping specifiers that carry no name.
pub fn extract_names<'a, I>(specifiers: I) -> Vec<PackageName>
where
    I: IntoIterator<Item = &'a str>,
{
    specifiers.into_iter().filter_map(extract_name).collect()
}
