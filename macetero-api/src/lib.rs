pub mod fecha;
pub mod models;
pub mod restful;
