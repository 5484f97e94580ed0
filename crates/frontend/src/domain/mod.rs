pub mod a001_store;
pub mod a002_product;
pub mod a003_inventory;
pub mod a004_stock_item;
pub mod a005_sale;
