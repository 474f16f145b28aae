//! Application use cases. Orchestrate domain logic over the ports.

pub mod article_service;
pub mod chat_service;
pub mod prefs_service;
pub mod tracker_service;

pub use article_service::ArticleService;
pub use chat_service::ChatService;
pub use prefs_service::PrefsService;
pub use tracker_service::TrackerService;
