pub mod db;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used items
pub use db::connection::DbConnection;
pub use db::record::RecordStore;
pub use models::record::MoneyRecord;
pub use ui::app::App;
