pub mod catalog_read;
pub mod csv_write;
