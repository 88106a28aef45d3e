use serde::{Deserialize, Serialize};

/// Signed-in role. An anonymous visitor has no role at all (`Option<Role>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Affiliate,
    Admin,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Affiliate, Self::Admin];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Affiliate => "affiliate",
            Self::Admin => "admin",
        }
    }

    /// Single-letter avatar shown in the dashboard header.
    #[must_use]
    pub const fn avatar(self) -> char {
        match self {
            Self::Affiliate => 'U',
            Self::Admin => 'A',
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatars_differ_by_role() {
        assert_eq!(Role::Admin.avatar(), 'A');
        assert_eq!(Role::Affiliate.avatar(), 'U');
    }

    #[test]
    fn role_serializes_as_snake_case() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let parsed: Role = serde_json::from_str("\"affiliate\"").unwrap();
        assert_eq!(parsed, Role::Affiliate);
    }
}
