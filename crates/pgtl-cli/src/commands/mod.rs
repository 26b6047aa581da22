pub mod dispatch;
pub mod lifespans;
pub mod schema;
pub mod timeline;
