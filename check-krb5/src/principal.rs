//! Kerberos principal name handling.
//!
//! Principals take the form `primary[/instance...][@REALM]`. Parsing is
//! purely syntactic: component and realm non-emptiness, a single `@`, and
//! no embedded whitespace. Realm resolution against `krb5.conf` defaults
//! is left to the Kerberos tooling itself.

use crate::errors::ConfigError;
use std::fmt;

/// A parsed Kerberos principal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    components: Vec<String>,
    realm: Option<String>,
}

impl Principal {
    /// Parse a principal from its textual form.
    ///
    /// `field` names the flag the text came from ("client" or "service")
    /// so that configuration errors identify their origin.
    pub fn parse(field: &'static str, text: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &'static str| ConfigError::InvalidPrincipal {
            field,
            value: text.to_string(),
            reason,
        };

        if text.is_empty() {
            return Err(invalid("principal is empty"));
        }
        if text.chars().any(char::is_whitespace) {
            return Err(invalid("principal contains whitespace"));
        }

        let (name, realm) = match text.split_once('@') {
            Some((name, realm)) => {
                if realm.is_empty() {
                    return Err(invalid("realm is empty"));
                }
                if realm.contains('@') {
                    return Err(invalid("more than one '@'"));
                }
                (name, Some(realm.to_string()))
            }
            None => (text, None),
        };

        let components: Vec<String> = name.split('/').map(str::to_string).collect();
        if components.iter().any(String::is_empty) {
            return Err(invalid("empty name component"));
        }

        Ok(Self { components, realm })
    }

    /// The first (primary) name component.
    pub fn primary(&self) -> &str {
        &self.components[0]
    }

    /// The realm, if one was given explicitly.
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))?;
        if let Some(realm) = &self.realm {
            write!(f, "@{}", realm)?;
        }
        Ok(())
    }
}
