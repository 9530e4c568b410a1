mod fake_model_client;
mod fake_row_source;
mod recording_presenter;

pub use fake_model_client::{FakeModelClient, FakeModelClientFactory};
pub use fake_row_source::FakeRowSource;
pub use recording_presenter::RecordingPresenter;
