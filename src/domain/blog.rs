//! Blog content domain types
//!
//! Posts and categories as served by the collaborator's blog endpoints. The
//! marketing site only ever sees `platform`-visibility content; the client
//! enforces that on every call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    pub slug: String,

    pub excerpt: String,

    /// Full body; only present on single-post fetches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    pub category: BlogCategoryRef,

    pub author: BlogAuthor,

    pub published_at: DateTime<Utc>,

    #[serde(default)]
    pub view_count: u64,

    #[serde(default)]
    pub helpful_count: u64,

    #[serde(default)]
    pub not_helpful_count: u64,

    /// Estimated reading time in minutes
    #[serde(default)]
    pub reading_time: u32,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

/// Category reference embedded in a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// Post author; the public API exposes the display name only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogAuthor {
    pub name: String,
}

/// A blog category with its post count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub post_count: u64,
}
