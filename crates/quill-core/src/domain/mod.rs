//! Domain entities - the core business objects.

mod category;
mod comment;
mod post;
mod tag;
mod user;

pub use category::Category;
pub use comment::{Comment, NewComment};
pub use post::Post;
pub use tag::Tag;
pub use user::User;
