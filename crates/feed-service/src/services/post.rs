//! Feed post service
//!
//! Listing, creation and deletion of posts. Reaction state is not
//! computed here; callers hand posts to [`ReactionService`] for that.
//!
//! [`ReactionService`]: super::reaction::ReactionService

use tracing::{info, instrument};
use validator::Validate;

use feed_core::{EntityId, Post};

use crate::dto::requests::CreatePostRequest;
use crate::dto::responses::{ListPayload, PostPayload};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the main feed, newest first as the server orders it
    #[instrument(skip(self))]
    pub async fn feed(&self) -> ServiceResult<Vec<Post>> {
        let value = self.ctx.gateway().get("posts/").await?;
        let payload: ListPayload<PostPayload> = serde_json::from_value(value)?;
        Ok(payload.into_items().into_iter().map(Post::from).collect())
    }

    /// Load the posts of a single author
    #[instrument(skip(self))]
    pub async fn by_author(&self, author: EntityId) -> ServiceResult<Vec<Post>> {
        let value = self
            .ctx
            .gateway()
            .get(&format!("posts/?author={author}"))
            .await?;
        let payload: ListPayload<PostPayload> = serde_json::from_value(value)?;
        Ok(payload.into_items().into_iter().map(Post::from).collect())
    }

    /// Fetch a single post
    #[instrument(skip(self))]
    pub async fn get(&self, id: EntityId) -> ServiceResult<Post> {
        let value = self.ctx.gateway().get(&format!("posts/{id}/")).await?;
        let payload: PostPayload = serde_json::from_value(value)?;
        Ok(Post::from(payload))
    }

    /// Create a post and return the server's copy of it
    ///
    /// Blank bodies are rejected locally without any network call.
    #[instrument(skip(self, content))]
    pub async fn create(&self, content: &str) -> ServiceResult<Post> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ServiceError::validation("post body must not be empty"));
        }

        let request = CreatePostRequest {
            content: content.to_string(),
        };
        request.validate()?;

        let value = self
            .ctx
            .gateway()
            .post("posts/", &serde_json::to_value(&request)?)
            .await?;
        let payload: PostPayload = serde_json::from_value(value)?;
        let post = Post::from(payload);

        info!(post_id = %post.id, "post created");
        Ok(post)
    }

    /// Delete a post
    #[instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> ServiceResult<()> {
        self.ctx.gateway().delete(&format!("posts/{id}/")).await?;
        info!(post_id = %id, "post deleted");
        Ok(())
    }
}
