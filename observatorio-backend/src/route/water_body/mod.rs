pub mod by_kind;
pub mod create;
pub mod get;
pub mod list;
pub mod search;
