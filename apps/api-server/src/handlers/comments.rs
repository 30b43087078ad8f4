//! Nested comment listing and comment creation handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use quill_core::pagination::LimitOffset;
use quill_shared::dto::{CommentListQuery, CommentResponse, CreateCommentRequest};
use quill_shared::{FieldError, OffsetPage};

use crate::middleware::error::{AppError, AppResult, validation_failed};
use crate::state::AppState;

/// GET /posts/{id}/comments
pub async fn list_for_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<CommentListQuery>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let params = query.into_inner().parse()?;
    let window = LimitOffset::from_params(params.limit, params.offset)?;

    if !state.posts.exists(post_id).await? {
        return Err(AppError::NotFound(format!(
            "post with id {} not found",
            post_id
        )));
    }

    let page = state.comments.list_for_post(post_id, &window).await?;
    let results: Vec<CommentResponse> = page.items.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(OffsetPage::new(page.total, &window, results)))
}

/// POST /comments
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    request.validate().map_err(|e| validation_failed(&e))?;

    // The target post must exist before anything is written.
    if !state.posts.exists(request.post).await? {
        return Err(AppError::Validation(vec![FieldError::new(
            "post",
            format!("post with id {} does not exist", request.post),
        )]));
    }

    let comment = state.comments.create(request.into_new_comment()).await?;
    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}
