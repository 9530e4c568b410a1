pub mod html_report;
pub mod mysql_row_source;
pub mod openai_client;
pub mod terminal_presenter;

pub use html_report::HtmlReport;
pub use mysql_row_source::MySqlRowSource;
pub use openai_client::{HttpModelClient, HttpModelClientFactory};
pub use terminal_presenter::TerminalPresenter;
