//! Field identifiers, labels, and value storage for the application form

/// One option of a choice field (radio group / select in the web form)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value sent over the wire
    pub value: &'static str,
    /// Human-readable label shown in the UI
    pub label: &'static str,
}

/// Identifier for every field of the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Linkedin,
    CurrentCourse,
    CurrentYear,
    StudyAbroadPlans,
    Excitement,
    PersonalQualities,
    CollegeActivities,
    ExpectedGains,
    PromotionStrategy,
    Availability,
}

impl FieldId {
    /// All fields in wire order (the order of the persisted record and the
    /// legacy spreadsheet columns)
    pub const ALL: [FieldId; 13] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Linkedin,
        FieldId::CurrentCourse,
        FieldId::CurrentYear,
        FieldId::StudyAbroadPlans,
        FieldId::Excitement,
        FieldId::PersonalQualities,
        FieldId::CollegeActivities,
        FieldId::ExpectedGains,
        FieldId::PromotionStrategy,
        FieldId::Availability,
    ];

    /// JSON key used by the write endpoint
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Linkedin => "linkedin",
            FieldId::CurrentCourse => "currentCourse",
            FieldId::CurrentYear => "currentYear",
            FieldId::StudyAbroadPlans => "studyAbroadPlans",
            FieldId::Excitement => "excitement",
            FieldId::PersonalQualities => "personalQualities",
            FieldId::CollegeActivities => "collegeActivities",
            FieldId::ExpectedGains => "expectedGains",
            FieldId::PromotionStrategy => "promotionStrategy",
            FieldId::Availability => "availability",
        }
    }

    /// Label shown next to the field in the UI
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::Phone => "Phone Number",
            FieldId::Linkedin => "LinkedIn Profile (optional)",
            FieldId::CurrentCourse => "Current Course & Branch",
            FieldId::CurrentYear => "Current Year of Study",
            FieldId::StudyAbroadPlans => "Are you planning to study abroad?",
            FieldId::Excitement => "Excitement & motivation (1-10, and why)",
            FieldId::PersonalQualities => "Personal qualities & potential blockers",
            FieldId::CollegeActivities => "College activities & initiatives",
            FieldId::ExpectedGains => "What do you hope to gain?",
            FieldId::PromotionStrategy => "How would you promote us on campus?",
            FieldId::Availability => "Can you commit 5-7 hours per week?",
        }
    }

    /// Every field except the LinkedIn profile must be filled in
    pub fn is_required(self) -> bool {
        !matches!(self, FieldId::Linkedin)
    }

    /// Long-answer fields rendered as multi-line inputs
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            FieldId::Excitement
                | FieldId::PersonalQualities
                | FieldId::CollegeActivities
                | FieldId::ExpectedGains
                | FieldId::PromotionStrategy
        )
    }

    /// Fixed options for choice fields, `None` for free-text fields
    pub fn options(self) -> Option<&'static [ChoiceOption]> {
        match self {
            FieldId::CurrentYear => Some(&[
                ChoiceOption {
                    value: "pre-final",
                    label: "Pre-Final Year",
                },
                ChoiceOption {
                    value: "final",
                    label: "Final Year",
                },
            ]),
            FieldId::StudyAbroadPlans => Some(&[
                ChoiceOption {
                    value: "yes-masters",
                    label: "Yes - for Master's",
                },
                ChoiceOption {
                    value: "maybe-not-sure",
                    label: "Maybe / Not sure yet",
                },
                ChoiceOption {
                    value: "no",
                    label: "No",
                },
            ]),
            FieldId::Availability => Some(&[
                ChoiceOption {
                    value: "yes",
                    label: "Yes, I can commit 5-7 hours per week",
                },
                ChoiceOption {
                    value: "no",
                    label: "No, I cannot commit this much time",
                },
            ]),
            _ => None,
        }
    }
}

/// Values of all application fields, one string per field
///
/// An explicit struct rather than a string map so a missing or misspelled
/// field is a compile error, not a silently absent JSON key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
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
}

impl FieldValues {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Linkedin => &self.linkedin,
            FieldId::CurrentCourse => &self.current_course,
            FieldId::CurrentYear => &self.current_year,
            FieldId::StudyAbroadPlans => &self.study_abroad_plans,
            FieldId::Excitement => &self.excitement,
            FieldId::PersonalQualities => &self.personal_qualities,
            FieldId::CollegeActivities => &self.college_activities,
            FieldId::ExpectedGains => &self.expected_gains,
            FieldId::PromotionStrategy => &self.promotion_strategy,
            FieldId::Availability => &self.availability,
        }
    }

    pub fn set(&mut self, id: FieldId, value: String) {
        *self.get_mut(id) = value;
    }

    pub fn get_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Linkedin => &mut self.linkedin,
            FieldId::CurrentCourse => &mut self.current_course,
            FieldId::CurrentYear => &mut self.current_year,
            FieldId::StudyAbroadPlans => &mut self.study_abroad_plans,
            FieldId::Excitement => &mut self.excitement,
            FieldId::PersonalQualities => &mut self.personal_qualities,
            FieldId::CollegeActivities => &mut self.college_activities,
            FieldId::ExpectedGains => &mut self.expected_gains,
            FieldId::PromotionStrategy => &mut self.promotion_strategy,
            FieldId::Availability => &mut self.availability,
        }
    }

    /// Display label for the current value of a choice field, falling back
    /// to the raw value for free text
    pub fn display_value(&self, id: FieldId) -> &str {
        let value = self.get(id);
        if let Some(options) = id.options() {
            if let Some(option) = options.iter().find(|o| o.value == value) {
                return option.label;
            }
        }
        value
    }
}
