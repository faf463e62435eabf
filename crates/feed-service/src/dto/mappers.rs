//! Payload to entity mappers

use feed_core::{Comment, EntityId, Post, PostImage, ReactionRecord, UserRef, UserRole};

use super::responses::{CommentPayload, PostImagePayload, PostPayload, ReactionPayload, UserPayload};

impl From<UserPayload> for UserRef {
    fn from(user: UserPayload) -> Self {
        Self {
            id: EntityId::new(user.id),
            username: user.username,
            role: user.role.as_deref().map(UserRole::from_raw).unwrap_or_default(),
            avatar: user.avatar,
        }
    }
}

impl From<ReactionPayload> for ReactionRecord {
    fn from(reaction: ReactionPayload) -> Self {
        Self {
            holder: EntityId::new(reaction.user.id()),
            code: reaction.code,
        }
    }
}

impl From<PostImagePayload> for PostImage {
    fn from(image: PostImagePayload) -> Self {
        Self {
            id: EntityId::new(image.id),
            image: image.image,
        }
    }
}

impl From<PostPayload> for Post {
    fn from(post: PostPayload) -> Self {
        Self {
            id: EntityId::new(post.id),
            updated_at: post.updated_at.unwrap_or(post.created_at),
            created_at: post.created_at,
            author: post.author.into(),
            content: post.content,
            images: post.images.into_iter().map(PostImage::from).collect(),
            reactions: post
                .reactions
                .into_iter()
                .map(ReactionRecord::from)
                .collect(),
            reaction_counts: post.reaction_counts,
            my_reaction: post.my_reaction,
            me_id: post.me_id.map(EntityId::new),
        }
    }
}

impl From<CommentPayload> for Comment {
    fn from(comment: CommentPayload) -> Self {
        Self {
            id: EntityId::new(comment.id),
            post: EntityId::new(comment.post),
            author: comment.author.into(),
            parent: comment.parent.map(EntityId::new),
            content: comment.content,
            created_at: comment.created_at,
            replies: comment.replies.into_iter().map(Comment::from).collect(),
        }
    }
}
