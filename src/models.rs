//! Frontend Models
//!
//! Data structures matching the server's JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Priority tier of a todo item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low = 0,
    #[default]
    Medium = 1,
    High = 2,
}

impl Priority {
    /// Tiers in rendering order (high to low)
    pub const DISPLAY_ORDER: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Index into per-tier storage
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Priority::Low),
            1 => Some(Priority::Medium),
            2 => Some(Priority::High),
            _ => None,
        }
    }

    /// Lenient decoding: anything that is not 0, 1 or 2 is medium
    fn from_json(value: &Value) -> Self {
        value
            .as_f64()
            .filter(|v| v.fract() == 0.0)
            .and_then(|v| Self::from_level(v as i64))
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Priority::Low => "tier tier-low",
            Priority::Medium => "tier tier-medium",
            Priority::High => "tier tier-high",
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Priority, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(Priority::from_json).unwrap_or_default())
}

/// Non-negative integer order; anything else is 0
fn lenient_order<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
        .unwrap_or(0))
}

/// `null` decodes as an empty list
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Label shown for an owner or author
pub fn owner_label(username: &str, user_id: u32) -> String {
    if username.is_empty() {
        format!("User {}", user_id)
    } else {
        username.to_string()
    }
}

/// Logged-in user (from /api/current-user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Todo item (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(default)]
    pub user_id: u32,
    #[serde(default)]
    pub username: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_order")]
    pub order: u32,
}

impl Item {
    /// Owner badge text, only for admins looking at someone else's item
    pub fn owner_badge(&self, viewer: &CurrentUser) -> Option<String> {
        if viewer.is_admin && self.user_id != viewer.id {
            Some(owner_label(&self.username, self.user_id))
        } else {
            None
        }
    }
}

/// Blog comment (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    #[serde(default)]
    pub blog_id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub username: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Blog post (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub username: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
}
