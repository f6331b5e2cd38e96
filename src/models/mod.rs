pub mod card;
pub mod overview;
pub mod scoring;
pub mod selection;
pub mod study_session;
pub mod study_stats;
pub mod tally;

pub use card::{Card, CardId, CardStatus};
pub use overview::CollectionOverview;
pub use selection::BatchSize;
pub use study_session::{SessionPhase, StudySession};
pub use study_stats::{LastSession, StudyStats};
pub use tally::{SessionSummary, SessionTally, format_duration};
