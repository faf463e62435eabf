//! Comment thread service
//!
//! Loads and mutates a post's reply forest. Every mutation reloads the
//! full thread instead of splicing locally, so client structure can never
//! diverge from server-assigned ordering and ids.

use tracing::{info, instrument};
use validator::Validate;

use feed_core::{Comment, EntityId};

use crate::dto::requests::CreateCommentRequest;
use crate::dto::responses::{CommentPayload, ListPayload};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the full comment listing for a post
    ///
    /// Handles both a bare array and a paginated `{results: [...]}`
    /// envelope. Nodes arrive with `replies` already nested.
    #[instrument(skip(self))]
    pub async fn load(&self, post: EntityId) -> ServiceResult<Vec<Comment>> {
        let value = self
            .ctx
            .gateway()
            .get(&format!("comments/?post={post}"))
            .await?;
        let payload: ListPayload<CommentPayload> = serde_json::from_value(value)?;
        Ok(payload
            .into_items()
            .into_iter()
            .map(Comment::from)
            .collect())
    }

    /// Create a comment (root when `parent` is None) and reload the thread
    ///
    /// Blank bodies are rejected locally without any network call.
    #[instrument(skip(self, body))]
    pub async fn add(
        &self,
        post: EntityId,
        parent: Option<EntityId>,
        body: &str,
    ) -> ServiceResult<Vec<Comment>> {
        let content = body.trim();
        if content.is_empty() {
            return Err(ServiceError::validation("comment body must not be empty"));
        }

        let request = CreateCommentRequest {
            post: post.into_inner(),
            parent: parent.map(EntityId::into_inner),
            content: content.to_string(),
        };
        request.validate()?;

        self.ctx
            .gateway()
            .post("comments/", &serde_json::to_value(&request)?)
            .await?;

        info!(post = %post, parent = ?parent, "comment created");
        self.load(post).await
    }

    /// Delete a comment and reload the thread
    ///
    /// Exposed unconditionally; the server is the authority on whether
    /// the viewer may delete this node (author or moderator).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: EntityId, post: EntityId) -> ServiceResult<Vec<Comment>> {
        self.ctx
            .gateway()
            .delete(&format!("comments/{id}/"))
            .await?;

        info!(comment = %id, post = %post, "comment deleted");
        self.load(post).await
    }

    /// Local hint: would the server let the viewer delete this comment?
    ///
    /// True for the comment's author and for moderators. Only a hint for
    /// showing/hiding the action; rejection authority stays server-side.
    pub fn can_delete(&self, comment: &Comment) -> bool {
        match self.ctx.viewer() {
            Some(viewer) => viewer.id == comment.author.id || viewer.role.is_moderator(),
            None => false,
        }
    }
}
