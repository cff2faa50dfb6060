pub mod file_picker;
pub mod history_table;
pub mod insight_report_view;
pub mod login_form;
pub mod navigation_bar;
pub mod register_form;
pub mod stats_cards;
pub mod toast_stack;
pub mod users_table;
