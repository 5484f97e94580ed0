pub mod api_error;
pub mod collection;
pub mod envelope;
pub mod export;
pub mod form;
pub mod list;
pub mod money;
pub mod notification;
pub mod validation;
