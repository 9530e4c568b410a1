mod model_client;
mod presenter;
mod row_source;

pub use model_client::{ModelClient, ModelClientFactory};
pub use presenter::Presenter;
pub use row_source::RowSource;
