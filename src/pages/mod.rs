pub mod upload_history;
