pub mod comment;
pub mod post;

// 重新导出常用类型
pub use comment::CommentService;
pub use post::PostService;
