use serde::{Deserialize, Serialize};

/// A person eligible to be assigned tasks. The avatar is an opaque image
/// resource reference the board never interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub avatar: String,
}

impl TeamMember {
    pub fn new(name: &str, avatar: &str) -> Self {
        Self {
            name: name.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

/// The fixed roster, loaded once at startup and treated as read-only
/// everywhere else.
pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new("Sarah Chen", "1.png"),
        TeamMember::new("Mike Johnson", "2.png"),
        TeamMember::new("Alex Kumar", "3.png"),
        TeamMember::new("Emma Wilson", "4.png"),
        TeamMember::new("James Lee", "5.png"),
    ]
}
