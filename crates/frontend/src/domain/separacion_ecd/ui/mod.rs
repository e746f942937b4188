mod actions_bar;
mod donut_chart;
mod filter_section;
mod legend_modal;
mod page;
mod process_table;
mod process_table_row;
mod summary_modal;

pub use page::SeparacionEcdPage;
