pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod fetcher;
pub mod http;
pub mod icons;
pub mod mutation;
pub mod notification;
pub mod online;
pub mod page_frame;
pub mod page_standard;
