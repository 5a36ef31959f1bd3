pub mod debouncer;
pub mod search_service;
