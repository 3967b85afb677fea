pub mod breadcrumb;
pub mod details_list;
pub mod form_builder;
pub mod message_box;
pub mod page_header;
pub mod pagination_controls;
pub mod table;
