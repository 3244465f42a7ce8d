pub mod comment;
pub mod post;

// 重新导出常用类型
pub use comment::{Comment, CommentSnapshot, Reply};
pub use post::{Feed, Post};
