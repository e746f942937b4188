pub mod confirmation_modal;
pub mod date_field;
pub mod empty_state;
pub mod page_header;
pub mod progress_card;
pub mod status_badge;
pub mod status_icon;
pub mod table_checkbox;
pub mod table_header_checkbox;
