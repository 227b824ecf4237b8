pub mod domain;
pub mod error;
pub mod event;
pub mod history;
pub mod sample;
pub mod threshold;
pub mod widget;

pub use domain::Domain;
pub use error::{DialError, Result};
pub use event::{ChannelUpdate, Message};
pub use history::HistoryBuffer;
pub use sample::{ChannelValue, RawValue, Sample, Statistics, Unit};
pub use threshold::{Paint, Severity, ThresholdResolver, ThresholdSpec};
pub use widget::DialWidget;
