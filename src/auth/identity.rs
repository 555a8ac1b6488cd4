use serde::Serialize;

/// Role claim carried by the authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Organization,
    Volunteer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Organization => "organization",
            Role::Volunteer => "volunteer",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "organization" => Some(Role::Organization),
            "volunteer" => Some(Role::Volunteer),
            _ => None,
        }
    }
}

/// Authenticated principal. The identity layer (session verification) is an
/// external collaborator; handlers resolve this value once and pass it to
/// operations as an explicit argument.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Opaque external-subject id issued by the identity provider.
    pub subject: String,
    pub role: Role,
}
