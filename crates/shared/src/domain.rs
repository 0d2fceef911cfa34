use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(MemberId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    /// Case-insensitive substring match over name, email and role.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        MemberField::ALL
            .iter()
            .any(|field| self.field(*field).to_lowercase().contains(needle))
    }

    pub fn apply(&mut self, patch: &MemberPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = &patch.role {
            self.role = role.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberField {
    Name,
    Email,
    Role,
}

impl MemberField {
    pub const ALL: [MemberField; 3] = [MemberField::Name, MemberField::Email, MemberField::Role];

    pub fn as_str(self) -> &'static str {
        match self {
            MemberField::Name => "name",
            MemberField::Email => "email",
            MemberField::Role => "role",
        }
    }
}

impl fmt::Display for MemberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown member field '{0}' (expected name, email or role)")]
pub struct UnknownField(pub String);

impl FromStr for MemberField {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(MemberField::Name),
            "email" => Ok(MemberField::Email),
            "role" => Ok(MemberField::Role),
            _ => Err(UnknownField(raw.to_string())),
        }
    }
}

/// Staged overrides for one row. `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl MemberPatch {
    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        let slot = match field {
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
            MemberField::Role => &mut self.role,
        };
        *slot = Some(value.into());
    }

    pub fn get(&self, field: MemberField) -> Option<&str> {
        match field {
            MemberField::Name => self.name.as_deref(),
            MemberField::Email => self.email.as_deref(),
            MemberField::Role => self.role.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            id: MemberId::from("7"),
            name: "Aaron Miles".to_string(),
            email: "aaron@mailinator.com".to_string(),
            role: "member".to_string(),
        }
    }

    #[test]
    fn parses_fields_case_insensitively() {
        assert_eq!("Name".parse::<MemberField>(), Ok(MemberField::Name));
        assert_eq!(" EMAIL ".parse::<MemberField>(), Ok(MemberField::Email));
        assert_eq!("role".parse::<MemberField>(), Ok(MemberField::Role));
        assert!("phone".parse::<MemberField>().is_err());
    }

    #[test]
    fn patch_only_overrides_staged_fields() {
        let mut target = member();
        let mut patch = MemberPatch::default();
        patch.set(MemberField::Name, "X");
        target.apply(&patch);

        assert_eq!(target.name, "X");
        assert_eq!(target.email, "aaron@mailinator.com");
        assert_eq!(target.role, "member");
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let target = member();
        assert!(target.matches_lowercase("aaron"));
        assert!(target.matches_lowercase("mailinator"));
        assert!(target.matches_lowercase("memb"));
        assert!(!target.matches_lowercase("admin"));
    }

    #[test]
    fn member_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&MemberId::from("12")).expect("serialize");
        assert_eq!(json, "\"12\"");
    }
}
