pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod entity_details;
pub mod entity_form;
pub mod entity_list;
pub mod http;
pub mod icons;
pub mod list_state;
pub mod page_frame;
pub mod page_standard;
pub mod resource;
pub mod response_handler;
