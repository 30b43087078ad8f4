//! PostgreSQL repository implementations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DbConn, EntityTrait, JoinType, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, sea_query::Expr,
};

use quill_core::domain::{Comment, NewComment, Post};
use quill_core::error::RepoError;
use quill_core::pagination::{LimitOffset, PageRequest};
use quill_core::ports::{CommentPage, CommentRepository, PostFilter, PostPage, PostRepository};

use super::entity::{category, comment, post, post_tag, tag, user};

/// PostgreSQL post repository. The pool is shared behind an `Arc` because
/// `DatabaseConnection` loses its `Clone` impl when sea-orm's `mock` feature
/// is unified into the build.
pub struct PostgresPostRepository {
    db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

/// PostgreSQL comment repository.
pub struct PostgresCommentRepository {
    db: Arc<DbConn>,
}

impl PostgresCommentRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// Assemble a domain post from its rows.
fn assemble(
    model: post::Model,
    category: category::Model,
    author: user::Model,
    tags: Vec<tag::Model>,
) -> Post {
    Post {
        id: model.id,
        title: model.title,
        body: model.body,
        created_time: model.created_time.into(),
        modified_time: model.modified_time.into(),
        excerpt: model.excerpt,
        views: model.views,
        category: category.into(),
        author: author.into(),
        tags: tags.into_iter().map(Into::into).collect(),
    }
}

fn filtered_posts(filter: &PostFilter) -> sea_orm::Select<post::Entity> {
    let mut query = post::Entity::find().order_by_desc(post::Column::CreatedTime);

    if let Some(category) = filter.category {
        query = query.filter(post::Column::CategoryId.eq(category));
    }
    if let Some(tag) = filter.tag {
        query = query
            .join(JoinType::InnerJoin, post::Relation::PostTag.def())
            .filter(post_tag::Column::TagId.eq(tag));
    }
    if let Some(after) = filter.created_after {
        query = query.filter(post::Column::CreatedTime.gte(after));
    }
    if let Some(before) = filter.created_before {
        // Inclusive date bound: everything before the following midnight.
        let upper = before.succ_opt().unwrap_or(before);
        query = query.filter(post::Column::CreatedTime.lt(upper));
    }

    query
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, filter: &PostFilter, page: &PageRequest) -> Result<PostPage, RepoError> {
        tracing::debug!(?filter, page = page.page(), "Listing posts");

        let paginator = filtered_posts(filter).paginate(self.db.as_ref(), page.page_size());
        let total = paginator.num_items().await.map_err(query_err)?;
        let models = paginator
            .fetch_page(page.page_index())
            .await
            .map_err(query_err)?;

        if models.is_empty() {
            return Ok(PostPage {
                items: Vec::new(),
                total,
            });
        }

        // Batch-load the embedded categories and authors for this page.
        let category_ids: Vec<i64> = models.iter().map(|m| m.category_id).collect();
        let author_ids: Vec<i64> = models.iter().map(|m| m.author_id).collect();

        let categories: HashMap<i64, category::Model> = category::Entity::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let authors: HashMap<i64, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(author_ids))
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut items = Vec::with_capacity(models.len());
        for model in models {
            let category = categories.get(&model.category_id).cloned().ok_or_else(|| {
                RepoError::Query(format!("category {} missing for post {}", model.category_id, model.id))
            })?;
            let author = authors.get(&model.author_id).cloned().ok_or_else(|| {
                RepoError::Query(format!("author {} missing for post {}", model.author_id, model.id))
            })?;
            items.push(assemble(model, category, author, Vec::new()));
        }

        Ok(PostPage { items, total })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = id, "Finding post by id");

        let Some(model) = post::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let category = category::Entity::find_by_id(model.category_id)
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?
            .ok_or_else(|| {
                RepoError::Query(format!("category {} missing for post {}", model.category_id, id))
            })?;
        let author = user::Entity::find_by_id(model.author_id)
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?
            .ok_or_else(|| {
                RepoError::Query(format!("author {} missing for post {}", model.author_id, id))
            })?;
        let tags = model
            .find_related(tag::Entity)
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(Some(assemble(model, category, author, tags)))
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        let count = post::Entity::find_by_id(id)
            .count(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(count > 0)
    }

    async fn created_months(&self) -> Result<Vec<NaiveDate>, RepoError> {
        // The store collapses rows to distinct months, so the result set is
        // bounded by the number of months with posts, not the post count.
        let month = Expr::cust(r#"CAST(DATE_TRUNC('month', "created_time") AS DATE)"#);
        let months: Vec<NaiveDate> = post::Entity::find()
            .select_only()
            .column_as(month.clone(), "month")
            .distinct()
            .order_by_desc(month)
            .into_tuple()
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(months)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_for_post(
        &self,
        post_id: i64,
        window: &LimitOffset,
    ) -> Result<CommentPage, RepoError> {
        tracing::debug!(post_id, "Listing comments");

        let scoped = comment::Entity::find().filter(comment::Column::PostId.eq(post_id));
        let total = scoped.clone().count(self.db.as_ref()).await.map_err(query_err)?;
        let models = scoped
            .order_by_desc(comment::Column::CreatedTime)
            .limit(window.limit())
            .offset(window.offset())
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(CommentPage {
            items: models.into_iter().map(Into::into).collect(),
            total,
        })
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        tracing::debug!(post_id = new_comment.post_id, "Creating comment");

        let active = comment::ActiveModel {
            id: NotSet,
            post_id: Set(new_comment.post_id),
            name: Set(new_comment.name),
            email: Set(new_comment.email),
            url: Set(new_comment.url),
            content: Set(new_comment.content),
            created_time: Set(Utc::now().into()),
        };

        let model = active.insert(self.db.as_ref()).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("foreign key") {
                RepoError::Constraint("Referenced post does not exist".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }
}
