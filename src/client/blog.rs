//! Blog content endpoints
//!
//! Read-side blog surface for the marketing site. Every call pins
//! `visibility=platform`: the marketing site must never see tenant-scoped
//! content regardless of what a caller passes.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::domain::{BlogCategory, BlogPost};
use crate::errors::Result;

/// Visibility scope forced onto every blog request
pub const PLATFORM_VISIBILITY: &str = "platform";

/// Listing/search parameters; unset fields are omitted from the query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub audience: Option<String>,
    pub tags: Option<String>,
}

impl BlogQuery {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("visibility", PLATFORM_VISIBILITY.to_string())];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(audience) = &self.audience {
            pairs.push(("audience", audience.clone()));
        }
        if let Some(tags) = &self.tags {
            pairs.push(("tags", tags.clone()));
        }
        pairs
    }
}

#[derive(Debug, Deserialize)]
struct PostsData {
    posts: Vec<BlogPost>,
}

#[derive(Debug, Deserialize)]
struct PostData {
    post: BlogPost,
}

#[derive(Debug, Deserialize)]
struct CategoriesData {
    categories: Vec<BlogCategory>,
}

/// Feedback payload for a post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedbackRequest {
    helpful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    user_type: String,
}

impl ApiClient {
    /// Fetch published posts
    pub async fn blog_posts(&self, query: &BlogQuery) -> Result<Vec<BlogPost>> {
        let response = self.get("/blog/posts").query(&query.to_query()).send().await?;
        let data: PostsData = self.handle_envelope(response).await?.1;
        Ok(data.posts)
    }

    /// Fetch a single post by slug
    pub async fn blog_post_by_slug(&self, slug: &str, audience: &str) -> Result<BlogPost> {
        let response = self
            .get(&format!("/blog/posts/{}", slug))
            .query(&[("visibility", PLATFORM_VISIBILITY), ("audience", audience)])
            .send()
            .await?;
        let data: PostData = self.handle_envelope(response).await?.1;
        Ok(data.post)
    }

    /// Fetch categories visible to the marketing site
    pub async fn blog_categories(&self) -> Result<Vec<BlogCategory>> {
        let response = self
            .get("/blog/categories")
            .query(&[("visibility", PLATFORM_VISIBILITY)])
            .send()
            .await?;
        let data: CategoriesData = self.handle_envelope(response).await?.1;
        Ok(data.categories)
    }

    /// Full-text search over published posts
    pub async fn blog_search(&self, term: &str, query: &BlogQuery) -> Result<Vec<BlogPost>> {
        let mut pairs = vec![("q", term.to_string())];
        pairs.extend(query.to_query());
        let response = self.get("/blog/search").query(&pairs).send().await?;
        let data: PostsData = self.handle_envelope(response).await?.1;
        Ok(data.posts)
    }

    /// Fetch the most-viewed posts
    pub async fn blog_popular_posts(&self, limit: u32, audience: &str) -> Result<Vec<BlogPost>> {
        self.blog_ranked_posts("/blog/popular", limit, audience).await
    }

    /// Fetch the most recently published posts
    pub async fn blog_recent_posts(&self, limit: u32, audience: &str) -> Result<Vec<BlogPost>> {
        self.blog_ranked_posts("/blog/recent", limit, audience).await
    }

    async fn blog_ranked_posts(
        &self,
        path: &str,
        limit: u32,
        audience: &str,
    ) -> Result<Vec<BlogPost>> {
        let response = self
            .get(path)
            .query(&[
                ("limit", limit.to_string().as_str()),
                ("visibility", PLATFORM_VISIBILITY),
                ("audience", audience),
            ])
            .send()
            .await?;
        let data: PostsData = self.handle_envelope(response).await?.1;
        Ok(data.posts)
    }

    /// Record helpful/not-helpful feedback for a post. Anonymous unless a
    /// user id is supplied.
    pub async fn blog_record_feedback(
        &self,
        slug: &str,
        helpful: bool,
        user_id: Option<String>,
    ) -> Result<()> {
        let user_type =
            if user_id.is_some() { "visitor".to_string() } else { "anonymous".to_string() };
        let body = FeedbackRequest { helpful, user_id, user_type };
        self.post_ack(&format!("/blog/posts/{}/feedback", slug), &body).await
    }
}
