//! Post listing, retrieval and archive-date handlers.

use actix_web::{HttpResponse, web};

use quill_core::archive::month_starts;
use quill_core::pagination::PageRequest;
use quill_core::ports::PostFilter;
use quill_core::representation::{PostAction, PostShape};
use quill_shared::Page;
use quill_shared::dto::{PostListQuery, PostRepresentation};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner().parse()?;
    let page = PageRequest::from_params(params.page, params.page_size)?;
    let filter = PostFilter {
        category: params.category,
        tag: params.tag,
        created_after: params.created_after,
        created_before: params.created_before,
    };

    // Shape is resolved from the operation alone, before serialization.
    let shape = PostShape::for_action(PostAction::List);

    let listed = state.posts.list(&filter, &page).await?;
    let results: Vec<PostRepresentation> = listed
        .items
        .iter()
        .map(|post| PostRepresentation::build(shape, post, state.renderer.as_ref()))
        .collect();

    Ok(HttpResponse::Ok().json(Page::new(page.meta(listed.total), results)))
}

/// GET /posts/{id}
pub async fn retrieve(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let shape = PostShape::for_action(PostAction::Retrieve);

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", id)))?;

    let representation = PostRepresentation::build(shape, &post, state.renderer.as_ref());
    Ok(HttpResponse::Ok().json(representation))
}

/// GET /posts/archive/dates
///
/// Neither paginated nor filtered, unlike the listing endpoint.
pub async fn archive_dates(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let months = state.posts.created_months().await?;
    Ok(HttpResponse::Ok().json(month_starts(months)))
}
