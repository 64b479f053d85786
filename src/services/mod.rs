pub mod history_service;
pub mod price_service;
