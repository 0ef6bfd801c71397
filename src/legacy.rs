//! Interop constants of the retired spreadsheet/email automation
//!
//! The recruiting team's old Apps Script ingested the same applications into
//! a spreadsheet and a dated Drive folder. Anything that still reads that
//! sheet or folder tree depends on its column order and naming pattern, so
//! both are preserved here; the live spreadsheet and mail calls are not.

use crate::api::ApplicationPayload;
use chrono::{DateTime, Datelike, Utc};

/// Header row of the legacy spreadsheet, in column order
#[allow(dead_code)]
pub const SHEET_HEADERS: [&str; 19] = [
    "Timestamp",
    "Full Name",
    "Email",
    "Phone",
    "LinkedIn",
    "Current Course",
    "Current Year",
    "Study Abroad Plans",
    "Excitement Level",
    "Personal Qualities",
    "College Activities",
    "Expected Gains",
    "Promotion Strategy",
    "Availability",
    "Resume File Name",
    "Resume Drive URL",
    "Resume File ID",
    "File Size (bytes)",
    "Application Status",
];

/// Resume file reference as the legacy sheet recorded it
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeRef {
    pub file_name: String,
    pub url: String,
    pub id: String,
    pub size: u64,
}

/// One spreadsheet row for an application, matching `SHEET_HEADERS`
#[allow(dead_code)]
pub fn sheet_row(
    payload: &ApplicationPayload,
    at: DateTime<Utc>,
    resume: Option<&ResumeRef>,
) -> Vec<String> {
    vec![
        at.to_rfc3339(),
        payload.full_name.clone(),
        payload.email.clone(),
        payload.phone.clone(),
        payload.linkedin.clone(),
        payload.current_course.clone(),
        payload.current_year.clone(),
        payload.study_abroad_plans.clone(),
        payload.excitement.clone(),
        payload.personal_qualities.clone(),
        payload.college_activities.clone(),
        payload.expected_gains.clone(),
        payload.promotion_strategy.clone(),
        payload.availability.clone(),
        resume.map(|r| r.file_name.clone()).unwrap_or_default(),
        resume.map(|r| r.url.clone()).unwrap_or_default(),
        resume.map(|r| r.id.clone()).unwrap_or_default(),
        resume.map(|r| r.size.to_string()).unwrap_or_default(),
        "New".to_string(),
    ]
}

/// Applicant names become file-name-safe by mapping every character outside
/// `[A-Za-z0-9]` to an underscore
pub fn sanitize_applicant_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Drive path of an uploaded resume:
/// `<folder_root>/<MonthName Year>/<SanitizedName>_Resume_<yyyyMMdd_HHmmss>.pdf`
pub fn resume_archive_path(folder_root: &str, applicant_name: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}/{}/{}",
        folder_root,
        month_folder(at),
        resume_file_name(applicant_name, at)
    )
}

/// Monthly subfolder, e.g. `August 2026`
pub fn month_folder(at: DateTime<Utc>) -> String {
    format!("{} {}", month_name(at.month()), at.year())
}

/// Unique resume file name, e.g. `Asha_Rao_Resume_20260826_141500.pdf`
pub fn resume_file_name(applicant_name: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}_Resume_{}.pdf",
        sanitize_applicant_name(applicant_name),
        at.format("%Y%m%d_%H%M%S")
    )
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
