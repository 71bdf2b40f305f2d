pub mod batch_search;
pub mod filter_bar;
pub mod filter_tags;
pub mod history_table;
pub mod pagination_controls;
