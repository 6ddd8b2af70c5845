//! Waitlist signups kept in browser key-value storage
//!
//! Entries are appended to a JSON array stored under [`WAITLIST_STORAGE_KEY`].
//! The list is never reordered, deduplicated or pruned.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage key holding the JSON array of entries
pub const WAITLIST_STORAGE_KEY: &str = "hydroblt_waitlist";

/// Inline message shown next to the email field
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";

/// Errors produced while validating or persisting a signup
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("Please enter a valid email.")]
    InvalidEmail,
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("stored waitlist is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// One waitlist signup record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub name: String,
    pub email: String,
    /// ISO-8601 creation time
    #[serde(rename = "ts")]
    pub timestamp: String,
}

impl WaitlistEntry {
    /// Build an entry from raw form values; name and email are trimmed
    pub fn new(name: &str, email: &str, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            timestamp: timestamp.into(),
        }
    }
}

/// Check an address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`
///
/// Neither side of the `@` may contain whitespace or another `@`, and the
/// domain needs a dot with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_js_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The character class matched by `\s` in a JavaScript regex
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included, U+0085 is not.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Validate the raw email field value
pub fn validate_email(value: &str) -> Result<(), WaitlistError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(WaitlistError::InvalidEmail)
    }
}

/// Minimal string key-value store (browser `localStorage` in production)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WaitlistError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), WaitlistError>;
}

/// Append-only waitlist on top of a key-value store
pub struct Waitlist<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> Waitlist<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: WAITLIST_STORAGE_KEY,
        }
    }

    /// Stored records exactly as written, in insertion order
    ///
    /// A missing key is an empty list. Anything other than a JSON array is
    /// `Corrupt`; the array's elements are not inspected.
    pub fn records(&self) -> Result<Vec<Value>, WaitlistError> {
        match self.store.get_item(self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Stored records parsed as entries; fails on any record that is not one
    pub fn entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        self.records()?
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(WaitlistError::from))
            .collect()
    }

    /// Append one entry and return the new list length
    ///
    /// Existing records are written back untouched, whatever their shape.
    /// A stored value that is not an array is reported, not overwritten.
    pub fn append(&self, entry: WaitlistEntry) -> Result<usize, WaitlistError> {
        let mut records = self.records()?;
        records.push(serde_json::to_value(&entry)?);
        let raw = serde_json::to_string(&records)?;
        self.store.set_item(self.key, &raw)?;
        Ok(records.len())
    }
}

/// Result of a form submission
#[derive(Debug)]
pub enum Submission {
    /// Email failed validation; nothing was stored
    Rejected(WaitlistError),
    /// Signup accepted. `persist_error` carries a swallowed storage failure.
    Joined {
        entry: WaitlistEntry,
        persist_error: Option<WaitlistError>,
    },
}

impl Submission {
    pub fn is_joined(&self) -> bool {
        matches!(self, Submission::Joined { .. })
    }
}

/// Validate the form values and append the entry
///
/// Storage failures never block the signup: the entry is reported as joined
/// and the failure handed back for logging.
pub fn submit<S: KeyValueStore>(
    waitlist: &Waitlist<S>,
    name: &str,
    email: &str,
    timestamp: impl Into<String>,
) -> Submission {
    if let Err(err) = validate_email(email) {
        return Submission::Rejected(err);
    }

    let entry = WaitlistEntry::new(name, email, timestamp);
    let persist_error = waitlist.append(entry.clone()).err();
    Submission::Joined {
        entry,
        persist_error,
    }
}

/// In-memory store used by tests
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    pub(crate) fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for &MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WaitlistError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WaitlistError> {
        if self.fail_writes {
            return Err(WaitlistError::Storage("quota exceeded".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2026-10-18T09:30:00.000Z";

    #[test]
    fn test_valid_emails() {
        for email in [
            "a@b.co",
            "jane.doe@example.com",
            "x+tag@sub.domain.org",
            "user@a.b.c",
            // U+0085 is not in the JS `\s` class
            "a\u{0085}b@example.com",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "foo",
            "foo@",
            "@example.com",
            "foo@example",
            "foo@.com",
            "foo@example.",
            "foo@@example.com",
            "foo@bar@example.com",
            "foo bar@example.com",
            " foo@example.com",
            "foo@example.com\n",
            "foo\u{FEFF}@example.com",
            "foo@exa\u{00A0}mple.com",
            "foo@example.com\u{3000}",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_email_error_message() {
        let err = validate_email("foo").unwrap_err();
        assert!(matches!(err, WaitlistError::InvalidEmail));
        assert_eq!(err.to_string(), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn test_entry_trims_fields() {
        let entry = WaitlistEntry::new("  Jo  ", "jo@example.com", TS);
        assert_eq!(entry.name, "Jo");
        assert_eq!(entry.email, "jo@example.com");
        assert_eq!(entry.timestamp, TS);
    }

    #[test]
    fn test_entry_serializes_timestamp_as_ts() {
        let entry = WaitlistEntry::new("Jo", "jo@example.com", TS);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["name"], "Jo");
        assert_eq!(json["email"], "jo@example.com");
        assert_eq!(json["ts"], TS);
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_entries_empty_when_key_missing() {
        let store = MemoryStore::default();
        let waitlist = Waitlist::new(&store);
        assert!(waitlist.entries().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let store = MemoryStore::default();
        let waitlist = Waitlist::new(&store);

        assert_eq!(
            waitlist
                .append(WaitlistEntry::new("A", "a@example.com", TS))
                .unwrap(),
            1
        );
        assert_eq!(
            waitlist
                .append(WaitlistEntry::new("B", "b@example.com", TS))
                .unwrap(),
            2
        );
        // Duplicates are kept
        assert_eq!(
            waitlist
                .append(WaitlistEntry::new("A", "a@example.com", TS))
                .unwrap(),
            3
        );

        let emails: Vec<_> = waitlist
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.email)
            .collect();
        assert_eq!(emails, ["a@example.com", "b@example.com", "a@example.com"]);
    }

    #[test]
    fn test_append_keeps_existing_entries() {
        let existing = r#"[{"name":"Old","email":"old@example.com","ts":"2025-01-01T00:00:00.000Z"}]"#;
        let store = MemoryStore::with_item(WAITLIST_STORAGE_KEY, existing);
        let waitlist = Waitlist::new(&store);

        waitlist
            .append(WaitlistEntry::new("New", "new@example.com", TS))
            .unwrap();

        let entries = waitlist.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Old");
        assert_eq!(entries[1].name, "New");
    }

    #[test]
    fn test_append_keeps_unknown_fields() {
        let existing = r#"[{"name":"Old","email":"old@example.com","ts":"2025-01-01T00:00:00.000Z","source":"popup"}]"#;
        let store = MemoryStore::with_item(WAITLIST_STORAGE_KEY, existing);
        let waitlist = Waitlist::new(&store);

        waitlist
            .append(WaitlistEntry::new("New", "new@example.com", TS))
            .unwrap();

        let raw = store.raw(WAITLIST_STORAGE_KEY).unwrap();
        let json: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["source"], "popup");
        assert_eq!(json[0]["ts"], "2025-01-01T00:00:00.000Z");
        assert_eq!(json[1]["name"], "New");
    }

    #[test]
    fn test_append_after_record_without_timestamp() {
        let existing = r#"[{"name":"Old","email":"old@example.com"}]"#;
        let store = MemoryStore::with_item(WAITLIST_STORAGE_KEY, existing);
        let waitlist = Waitlist::new(&store);

        let submission = submit(&waitlist, "New", "new@example.com", TS);

        match submission {
            Submission::Joined { persist_error, .. } => assert!(persist_error.is_none()),
            Submission::Rejected(err) => panic!("unexpected rejection: {err}"),
        }
        let records = waitlist.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            serde_json::json!({"name": "Old", "email": "old@example.com"})
        );
        assert_eq!(records[1]["email"], "new@example.com");
        assert_eq!(records[1]["ts"], TS);
    }

    #[test]
    fn test_non_array_store_is_corrupt() {
        let store = MemoryStore::with_item(WAITLIST_STORAGE_KEY, r#"{"name":"Old"}"#);
        let waitlist = Waitlist::new(&store);

        let result = waitlist.append(WaitlistEntry::new("A", "a@example.com", TS));

        assert!(matches!(result, Err(WaitlistError::Corrupt(_))));
        assert_eq!(
            store.raw(WAITLIST_STORAGE_KEY).as_deref(),
            Some(r#"{"name":"Old"}"#)
        );
    }

    #[test]
    fn test_corrupt_store_is_not_overwritten() {
        let store = MemoryStore::with_item(WAITLIST_STORAGE_KEY, "{not json");
        let waitlist = Waitlist::new(&store);

        let result = waitlist.append(WaitlistEntry::new("A", "a@example.com", TS));

        assert!(matches!(result, Err(WaitlistError::Corrupt(_))));
        assert_eq!(
            store.raw(WAITLIST_STORAGE_KEY).as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_submit_rejects_invalid_email() {
        let store = MemoryStore::default();
        let waitlist = Waitlist::new(&store);

        let submission = submit(&waitlist, "Jo", "foo", TS);

        assert!(matches!(
            submission,
            Submission::Rejected(WaitlistError::InvalidEmail)
        ));
        assert!(store.raw(WAITLIST_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_submit_swallows_storage_failure() {
        let store = MemoryStore {
            fail_writes: true,
            ..Default::default()
        };
        let waitlist = Waitlist::new(&store);

        let submission = submit(&waitlist, "Jo", "jo@example.com", TS);

        assert!(submission.is_joined());
        match submission {
            Submission::Joined { persist_error, .. } => {
                assert!(matches!(persist_error, Some(WaitlistError::Storage(_))));
            }
            Submission::Rejected(_) => unreachable!(),
        }
        assert!(store.raw(WAITLIST_STORAGE_KEY).is_none());
    }
}
