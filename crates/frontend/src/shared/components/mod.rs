pub mod form_field;
pub mod notification_bar;
pub mod pagination_controls;
pub mod product_type_filter;
pub mod stat_card;
