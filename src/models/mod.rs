//! Typed response records
//!
//! One record type per response shape. Nullable fields are `Option`;
//! timestamps are epoch seconds as the API sends them.

mod chat;
mod freelance_jobs;
mod jobs;
mod reviews;
mod sessions;
mod users;

pub use chat::{ChatMessage, ChatUser, MessageRequest};
pub use freelance_jobs::{FreelanceJob, FreelanceParticipant, FreelanceReview};
pub use jobs::{
    Category, JobDetail, JobDetails, JobInterestRequest, JobInterestResponse, JobInterestUser,
    JobDetailUser, JobListItem, JobUser, RequestType,
};
pub use reviews::{Review, ReviewWriter};
pub use sessions::{
    MentorReview, SessionDetail, SessionListItem, SessionMentee, SessionReview, SessionUser,
};
pub use users::CurrentUser;
