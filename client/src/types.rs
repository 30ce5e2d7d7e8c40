//! Domain vocabulary shared by every groupald operation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Attributes of an sgroup or subject: attribute name → single value.
///
/// Ordered so that serialized forms are deterministic.
pub type Attrs = BTreeMap<String, String>;

/// Kind of membership/right relation attached to an sgroup.
///
/// `Member` is plain membership; the other kinds grant increasing
/// administrative rights on the sgroup itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mright {
    Member,
    Reader,
    Updater,
    Admin,
}

/// Modification verb applied to a membership/right relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mod {
    Add,
    Delete,
    Replace,
}

impl Mright {
    /// The wire form expected by the service in query/body parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Reader => "reader",
            Self::Updater => "updater",
            Self::Admin => "admin",
        }
    }

    pub fn list() -> [Self; 4] {
        [Self::Member, Self::Reader, Self::Updater, Self::Admin]
    }
}

impl Mod {
    /// The wire form expected by the service in body parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for Mright {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mright {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Self::Member),
            "reader" => Ok(Self::Reader),
            "updater" => Ok(Self::Updater),
            "admin" => Ok(Self::Admin),
            other => Err(format!("invalid mright {other:?}")),
        }
    }
}

impl FromStr for Mod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "delete" => Ok(Self::Delete),
            "replace" => Ok(Self::Replace),
            other => Err(format!("invalid mod {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mright_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Mright::Member).unwrap(), r#""member""#);
        assert_eq!(serde_json::to_string(&Mright::Admin).unwrap(), r#""admin""#);
        let parsed: Mright = serde_json::from_str(r#""updater""#).unwrap();
        assert_eq!(parsed, Mright::Updater);
    }

    #[test]
    fn test_mod_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Mod::Replace).unwrap(), r#""replace""#);
        let parsed: Mod = serde_json::from_str(r#""add""#).unwrap();
        assert_eq!(parsed, Mod::Add);
    }

    #[test]
    fn test_from_str_round_trips() {
        for mright in Mright::list() {
            assert_eq!(mright.as_str().parse::<Mright>().unwrap(), mright);
        }
        for m in [Mod::Add, Mod::Delete, Mod::Replace] {
            assert_eq!(m.as_str().parse::<Mod>().unwrap(), m);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_and_case() {
        assert!("owner".parse::<Mright>().is_err());
        assert!("Member".parse::<Mright>().is_err());
        assert!("remove".parse::<Mod>().is_err());
    }
}
