pub mod csv_parser;
pub mod filter;
pub mod json_source;
pub mod row_store;
