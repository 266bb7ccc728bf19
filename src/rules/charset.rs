use indexmap::IndexSet;

/// Characters the sync service rejects anywhere in a name.
pub const RESTRICTED_CHARS: [char; 9] = ['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Non-alphanumeric characters that sync safely.
///
/// ASCII letters and digits are always allowed; the accented letters are the
/// historical whitelist.
pub const EXTRA_ALLOWED_CHARS: &str = " .,+-_'&()[]{}!#@;óüáéàçè";

/// Restricted characters present in `name`, in [`RESTRICTED_CHARS`] order.
///
/// Each character is reported once no matter how often it occurs.
#[must_use]
pub fn restricted_chars(name: &str) -> IndexSet<char> {
    RESTRICTED_CHARS
        .iter()
        .copied()
        .filter(|c| name.contains(*c))
        .collect()
}

#[must_use]
pub fn is_permitted(c: char) -> bool {
    c.is_ascii_alphanumeric() || EXTRA_ALLOWED_CHARS.contains(c)
}

/// Characters of `name` outside the allow-list, in order of first appearance.
#[must_use]
pub fn non_permitted_chars(name: &str) -> IndexSet<char> {
    name.chars().filter(|c| !is_permitted(*c)).collect()
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;
