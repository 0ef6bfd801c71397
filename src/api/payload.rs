//! Wire payload for the write endpoint
//!
//! Every application field is an explicit struct member so the JSON body can
//! never silently gain or lose a key.

use crate::state::{EncodedResume, FieldValues};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/apply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub current_course: String,
    pub current_year: String,
    pub study_abroad_plans: String,
    pub excitement: String,
    pub personal_qualities: String,
    pub college_activities: String,
    pub expected_gains: String,
    pub promotion_strategy: String,
    pub availability: String,
    /// Base64 text of the resume, present only when a file was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
    /// Original resume file name, present only alongside `resume_file`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
}

impl ApplicationPayload {
    pub fn new(fields: &FieldValues, resume: Option<&EncodedResume>) -> Self {
        Self {
            full_name: fields.full_name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            linkedin: fields.linkedin.clone(),
            current_course: fields.current_course.clone(),
            current_year: fields.current_year.clone(),
            study_abroad_plans: fields.study_abroad_plans.clone(),
            excitement: fields.excitement.clone(),
            personal_qualities: fields.personal_qualities.clone(),
            college_activities: fields.college_activities.clone(),
            expected_gains: fields.expected_gains.clone(),
            promotion_strategy: fields.promotion_strategy.clone(),
            availability: fields.availability.clone(),
            resume_file: resume.map(|r| r.content.clone()),
            resume_file_name: resume.map(|r| r.file_name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;
    use pretty_assertions::assert_eq;

    fn sample_fields() -> FieldValues {
        FieldValues {
            full_name: "Asha Rao".to_string(),
            email: "asha@x.com".to_string(),
            phone: "+91 9876543210".to_string(),
            linkedin: String::new(),
            current_course: "B.Tech CSE".to_string(),
            current_year: "final".to_string(),
            study_abroad_plans: "yes-masters".to_string(),
            excitement: "9".to_string(),
            personal_qualities: "grit".to_string(),
            college_activities: "club lead".to_string(),
            expected_gains: "network".to_string(),
            promotion_strategy: "events".to_string(),
            availability: "yes".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case_wire_names() {
        let payload = ApplicationPayload::new(&sample_fields(), None);
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        for id in FieldId::ALL {
            assert!(
                object.contains_key(id.wire_name()),
                "payload is missing {}",
                id.wire_name()
            );
        }
        assert_eq!(json["fullName"], "Asha Rao");
        assert_eq!(json["studyAbroadPlans"], "yes-masters");
    }

    #[test]
    fn test_resume_fields_absent_without_attachment() {
        let payload = ApplicationPayload::new(&sample_fields(), None);
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("resumeFile"));
        assert!(!object.contains_key("resumeFileName"));
        // The thirteen application fields and nothing else
        assert_eq!(object.len(), FieldId::ALL.len());
    }

    #[test]
    fn test_resume_fields_present_with_attachment() {
        let resume = EncodedResume {
            content: "JVBERi0xLjQ=".to_string(),
            file_name: "asha_resume.pdf".to_string(),
        };
        let payload = ApplicationPayload::new(&sample_fields(), Some(&resume));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["resumeFile"], "JVBERi0xLjQ=");
        assert_eq!(json["resumeFileName"], "asha_resume.pdf");
    }

    #[test]
    fn test_empty_linkedin_is_still_sent() {
        let payload = ApplicationPayload::new(&sample_fields(), None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["linkedin"], "");
    }
}
