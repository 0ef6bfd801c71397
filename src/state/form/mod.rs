//! Form domain layer
//!
//! Field definitions, step validation, attachment handling, and the
//! three-step application form state machine.

mod attachment;
mod field;
mod machine;
mod validate;

pub use attachment::{
    decode, encode, format_file_size, EncodeError, EncodedResume, ResumeFile, SelectError,
    MAX_RESUME_BYTES, RESUME_MIME,
};
pub use field::{ChoiceOption, FieldId, FieldValues};
pub use machine::{ApplicationForm, Step, SubmissionStatus};
pub use validate::validate_step;
