// Services module
pub mod page_service;
pub mod toggle_service;

pub use page_service::PageService;
pub use toggle_service::LanguageToggler;
