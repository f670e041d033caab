use std::sync::LazyLock;

use regex::Regex;

/// Characters that are not allowed in a path segment on common filesystems.
static BLACKLIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\[/*"?\]>\\<:|]"#).expect("valid regex"));

/// Format the new name of an inject PDF: a three-digit, zero-padded number,
/// a space, the subject and `.pdf`, with illegal characters removed.
///
/// The result is not truncated and may still collide with an existing file.
///
/// ```
/// # use autoinjector::target_filename;
/// assert_eq!(target_filename(7, "Firewall Rules"), "007 Firewall Rules.pdf");
/// assert_eq!(target_filename(12, "A/B:C"), "012 ABC.pdf");
/// assert_eq!(target_filename(1234, "Audit"), "1234 Audit.pdf");
/// ```
pub fn target_filename(number: u64, subject: &str) -> String {
    sanitize_filename(&format!("{number:03} {subject}.pdf"))
}

/// Delete every `[ ] / * " ? > \ < : |` from `name`. Nothing is put in their
/// place.
pub fn sanitize_filename(name: &str) -> String {
    BLACKLIST_RE.replace_all(name, "").into_owned()
}
