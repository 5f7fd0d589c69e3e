//! Blog Endpoints
//!
//! Bindings for `/api/blogs*` and comments.

use serde::Serialize;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{Blog, Comment};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostArgs<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub is_private: bool,
}

#[derive(Serialize)]
struct CommentArgs<'a> {
    content: &'a str,
}

impl HttpApi {
    pub async fn list_blogs(&self) -> ApiResult<Vec<Blog>> {
        let blogs: Option<Vec<Blog>> = self.get("/api/blogs").await?;
        Ok(blogs.unwrap_or_default())
    }

    pub async fn list_user_blogs(&self, user_id: u32) -> ApiResult<Vec<Blog>> {
        let blogs: Option<Vec<Blog>> = self.get(&format!("/api/blogs/user/{}", user_id)).await?;
        Ok(blogs.unwrap_or_default())
    }

    pub async fn get_blog(&self, id: u32) -> ApiResult<Blog> {
        self.get(&format!("/api/blogs/{}", id)).await
    }

    pub async fn create_blog(&self, args: &PostArgs<'_>) -> ApiResult<Blog> {
        self.post("/api/blogs", args).await
    }

    pub async fn update_blog(&self, id: u32, args: &PostArgs<'_>) -> ApiResult<Blog> {
        self.put(&format!("/api/blogs/{}", id), args).await
    }

    pub async fn delete_blog(&self, id: u32) -> ApiResult<()> {
        self.call("DELETE", &format!("/api/blogs/{}", id)).await
    }

    pub async fn add_comment(&self, blog_id: u32, content: &str) -> ApiResult<Comment> {
        self.post(&format!("/api/blogs/comments/{}", blog_id), &CommentArgs { content }).await
    }

    pub async fn delete_comment(&self, blog_id: u32, comment_id: u32) -> ApiResult<()> {
        self.call("DELETE", &format!("/api/blogs/comments/{}/{}", blog_id, comment_id)).await
    }
}
