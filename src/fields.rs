//! Field extraction from inject text.
//!
//! Each field is a named rule: a literal label followed by whitespace and a
//! capture. Rules run over the whole text blob and keep the first match only.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::{naming, InjectError, Result};

const NUMBER_LABEL: &str = "Inject Number";
const SUBJECT_LABEL: &str = "Subject";

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Inject Number:\s+([0-9]+)").expect("valid regex"));
static SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Subject:\s+(.+)").expect("valid regex"));
static COMPETITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Competition:\s+(.+)").expect("valid regex"));
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Duration:\s+(?P<amount>[0-9]+)\s+(?P<unit>.+)").expect("valid regex")
});
static FROM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"From:\s+(.+)").expect("valid regex"));
static TO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"To:\s+(.+)").expect("valid regex"));

/// How long the team has to complete an inject, e.g. `30 minutes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duration {
    pub amount: u64,
    pub unit: String,
}

/// Everything recognised in an inject's text. Every field is optional here;
/// [`InjectFields::require`] decides what the rename actually needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectFields {
    /// The `Inject Number:` value, when it is present and fits in a `u64`.
    pub number: Option<u64>,
    pub subject: Option<String>,
    pub competition: Option<String>,
    pub duration: Option<Duration>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// The digits as written, kept so an overflowing number can be reported.
    number_digits: Option<String>,
}

/// The two fields the new filename is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    pub number: u64,
    pub subject: String,
}

impl RequiredFields {
    /// The sanitized filename for this inject, see [`crate::target_filename`].
    pub fn filename(&self) -> String {
        naming::target_filename(self.number, &self.subject)
    }
}

impl InjectFields {
    /// Run every rule against `text`.
    ///
    /// ```
    /// # use autoinjector::InjectFields;
    /// let fields = InjectFields::parse("Inject Number: 7\nSubject: Firewall Rules\n");
    /// assert_eq!(fields.number, Some(7));
    /// assert_eq!(fields.subject.as_deref(), Some("Firewall Rules"));
    /// assert!(fields.from.is_none());
    /// ```
    pub fn parse(text: &str) -> Self {
        let number_digits = first_capture(&NUMBER_RE, text);
        let duration = DURATION_RE.captures(text).and_then(|caps| {
            Some(Duration {
                amount: caps["amount"].parse().ok()?,
                unit: strip_cr(&caps["unit"]).to_owned(),
            })
        });

        Self {
            number: number_digits.as_deref().and_then(|d| d.parse().ok()),
            subject: first_capture(&SUBJECT_RE, text),
            competition: first_capture(&COMPETITION_RE, text),
            duration,
            from: first_capture(&FROM_RE, text),
            to: first_capture(&TO_RE, text),
            number_digits,
        }
    }

    /// Read and parse the text file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Return the number and subject, or one error listing every required
    /// label that is missing. `source` names the PDF in the error.
    pub fn require(&self, source: &Path) -> Result<RequiredFields> {
        let mut missing = Vec::new();
        if self.number_digits.is_none() {
            missing.push(NUMBER_LABEL);
        }
        if self.subject.is_none() {
            missing.push(SUBJECT_LABEL);
        }
        if !missing.is_empty() {
            return Err(InjectError::MissingFields {
                path: source.to_path_buf(),
                fields: missing,
            });
        }

        let (Some(number), Some(subject)) = (self.number, self.subject.clone()) else {
            return Err(InjectError::InvalidNumber {
                path: source.to_path_buf(),
                value: self.number_digits.clone().unwrap_or_default(),
            });
        };

        Ok(RequiredFields { number, subject })
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_cr(m.as_str()).to_owned())
}

// `.` stops at `\n` but not at `\r`
fn strip_cr(value: &str) -> &str {
    value.strip_suffix('\r').unwrap_or(value)
}
