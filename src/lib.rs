//! FOPO Assessment core: questionnaire state, progress tracking, validation,
//! scoring, and the webhook submission pipeline.
//!
//! Presentation sits behind the [`view::FormView`] trait; logic only ever
//! reads immutable [`assessment::FormSnapshot`] values. The [`console`]
//! module ships a terminal adapter; any other front-end plugs in the same
//! way.

pub mod assessment;
pub mod config;
pub mod console;
pub mod submission;
pub mod view;

pub use assessment::{AdditionalData, FormSnapshot, ProgressReport};
pub use assessment::scoring::{FopoLevel, ScoreSummary};
pub use config::AppConfig;
pub use submission::{ResultCache, SubmissionPayload, SubmitError, WebhookClient};
pub use view::{FormView, NullFormView};
