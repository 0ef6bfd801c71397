//! Step validation for the application form
//!
//! Pure functions: a blank or malformed field is a reported error, never a
//! panic, and repeated calls over the same input return the same list.

use super::field::{FieldId, FieldValues};
use super::machine::Step;

/// Validate one step of the form, returning one human-readable error per
/// violated rule in fixed field order. Empty iff the step is valid.
pub fn validate_step(step: Step, fields: &FieldValues) -> Vec<String> {
    let mut errors = Vec::new();

    match step {
        Step::Basics => {
            require(fields, FieldId::FullName, "Full Name is required", &mut errors);
            require(fields, FieldId::Email, "Email Address is required", &mut errors);
            require(fields, FieldId::Phone, "Phone Number is required", &mut errors);
            require(
                fields,
                FieldId::CurrentCourse,
                "Current Course & Branch is required",
                &mut errors,
            );
            require(
                fields,
                FieldId::CurrentYear,
                "Current Year of Study is required",
                &mut errors,
            );

            let email = fields.get(FieldId::Email).trim();
            if !email.is_empty() && !is_valid_email(email) {
                errors.push("Please enter a valid email address".to_string());
            }

            let phone = fields.get(FieldId::Phone).trim();
            if !phone.is_empty() && !is_valid_phone(phone) {
                errors.push("Please enter a valid phone number".to_string());
            }
        }
        Step::Motivation => {
            require(
                fields,
                FieldId::StudyAbroadPlans,
                "Study abroad plans selection is required",
                &mut errors,
            );
            require(
                fields,
                FieldId::Excitement,
                "Excitement and motivation response is required",
                &mut errors,
            );
            require(
                fields,
                FieldId::PersonalQualities,
                "Personal qualities response is required",
                &mut errors,
            );
            require(
                fields,
                FieldId::CollegeActivities,
                "College activities response is required",
                &mut errors,
            );
            require(
                fields,
                FieldId::ExpectedGains,
                "Expected gains response is required",
                &mut errors,
            );
            require(
                fields,
                FieldId::PromotionStrategy,
                "Promotion strategy response is required",
                &mut errors,
            );
        }
        Step::Commitment => {
            require(
                fields,
                FieldId::Availability,
                "Availability commitment is required",
                &mut errors,
            );
        }
    }

    errors
}

fn require(fields: &FieldValues, id: FieldId, message: &str, errors: &mut Vec<String>) {
    if fields.get(id).trim().is_empty() {
        errors.push(message.to_string());
    }
}

/// `local@domain.tld`: exactly one `@`, no whitespace, and a dot in the
/// domain with non-empty parts on both sides
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            if local.is_empty() {
                return false;
            }
            match domain.rsplit_once('.') {
                Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                None => false,
            }
        }
        _ => false,
    }
}

/// Optional leading `+`, then at least 10 characters drawn from digits,
/// spaces, hyphens and parentheses
fn is_valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    rest.chars().count() >= 10
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')')
}
