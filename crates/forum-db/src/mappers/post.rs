//! Post entity <-> model mapper

use forum_core::entities::Post;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            num_likes: model.num_likes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
