//! Transfer shapes at the API boundary. Nothing here is persisted locally;
//! these structs exist to coerce client input before it is forwarded.

use serde::{Deserialize, Serialize};

fn default_level() -> i32 {
    50
}

fn default_category() -> String {
    "frontend".to_string()
}

/// Full payload for creating a project. Every field the upstream row carries
/// is either required or filled with a default before forwarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
}

/// Partial update for a project. Absent fields are absent at the type level
/// and are skipped on serialization, so the outbound patch contains exactly
/// the fields the caller supplied and can never null out upstream values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCreate {
    pub name: String,
    /// Self-assessed 0-100; no bounds are enforced here or upstream.
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Write-only from this system's perspective: stored upstream, never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
