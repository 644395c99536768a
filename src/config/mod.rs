//! API-key resolution: explicit argument, environment variable, then
//! well-known key files, in that order.

use std::path::PathBuf;

use crate::client::MandrillError;
use crate::domain::ApiKey;

/// Environment variable consulted when no explicit key is given.
pub const ENV_API_KEY: &str = "MANDRILL_APIKEY";

#[derive(Debug, Clone)]
pub(crate) enum KeySource {
    /// Key passed directly by the caller.
    Explicit(String),
    /// Environment variable holding the key.
    Env(String),
    /// File whose trimmed contents are the key.
    File(PathBuf),
}

impl KeySource {
    /// The key this source currently yields, if any.
    ///
    /// A missing variable/file and an empty or whitespace-only candidate both
    /// yield `None`, so resolution falls through to the next source.
    fn lookup(&self) -> Option<String> {
        let raw = match self {
            Self::Explicit(value) => Some(value.clone()),
            Self::Env(var) => std::env::var(var).ok(),
            Self::File(path) => std::fs::read_to_string(path).ok(),
        }?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    }
}

/// Default resolution order: explicit argument, `MANDRILL_APIKEY`, then
/// `~/.mandrill.key` and `/etc/mandrill.key`.
pub(crate) fn default_sources(explicit: Option<String>) -> Vec<KeySource> {
    let mut sources = Vec::new();
    if let Some(key) = explicit {
        sources.push(KeySource::Explicit(key));
    }
    sources.push(KeySource::Env(ENV_API_KEY.to_owned()));
    if let Some(home) = dirs::home_dir() {
        sources.push(KeySource::File(home.join(".mandrill.key")));
    }
    sources.push(KeySource::File(PathBuf::from("/etc/mandrill.key")));
    sources
}

/// First source that yields a non-empty trimmed key wins.
pub(crate) fn resolve_api_key(sources: &[KeySource]) -> Result<ApiKey, MandrillError> {
    for source in sources {
        if let Some(key) = source.lookup() {
            return Ok(ApiKey::new(key)?);
        }
    }
    Err(MandrillError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn temp_key_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mandrill-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn explicit_key_wins_over_later_sources() {
        let path = temp_key_file("explicit-wins", "file-key");
        let sources = vec![
            KeySource::Explicit("explicit-key".to_owned()),
            KeySource::File(path.clone()),
        ];
        let key = resolve_api_key(&sources).unwrap();
        assert_eq!(key.as_str(), "explicit-key");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_explicit_key_falls_through() {
        let path = temp_key_file("empty-explicit", "file-key");
        let sources = vec![
            KeySource::Explicit("   ".to_owned()),
            KeySource::File(path.clone()),
        ];
        let key = resolve_api_key(&sources).unwrap();
        assert_eq!(key.as_str(), "file-key");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn file_contents_are_trimmed() {
        let path = temp_key_file("trimmed", "  xyz\n");
        let sources = vec![KeySource::File(path.clone())];
        let key = resolve_api_key(&sources).unwrap();
        assert_eq!(key.as_str(), "xyz");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_file_falls_through_to_next_file() {
        let empty = temp_key_file("empty-first", "\n  \n");
        let full = temp_key_file("full-second", "second");
        let sources = vec![KeySource::File(empty.clone()), KeySource::File(full.clone())];
        let key = resolve_api_key(&sources).unwrap();
        assert_eq!(key.as_str(), "second");
        fs::remove_file(empty).unwrap();
        fs::remove_file(full).unwrap();
    }

    #[test]
    fn no_usable_source_is_a_configuration_error() {
        let sources = vec![
            KeySource::Env("MANDRILL_APIKEY_DEFINITELY_UNSET_FOR_TESTS".to_owned()),
            KeySource::File(PathBuf::from("/nonexistent/mandrill.key")),
        ];
        let err = resolve_api_key(&sources).unwrap_err();
        assert!(matches!(err, MandrillError::MissingApiKey));
    }
}
