pub mod invitation;
pub mod outcome;
pub mod record;

pub use invitation::{InvitationRequest, UserInvitation, parse_tags};
pub use outcome::InvitationOutcome;
pub use record::{CandidateUser, REQUIRED_FIELDS, RosterRow, RowRejection, validate_row};
