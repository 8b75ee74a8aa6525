use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueRange {
    Below1M,
    From1MTo3M,
    From3MTo7M,
    From7MTo15M,
    From15MTo20M,
    Above20M,
}

impl RevenueRange {
    pub const ALL: [RevenueRange; 6] = [
        RevenueRange::Below1M,
        RevenueRange::From1MTo3M,
        RevenueRange::From3MTo7M,
        RevenueRange::From7MTo15M,
        RevenueRange::From15MTo20M,
        RevenueRange::Above20M,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RevenueRange::Below1M => "Below $1M",
            RevenueRange::From1MTo3M => "$1M to $3M",
            RevenueRange::From3MTo7M => "$3M to $7M",
            RevenueRange::From7MTo15M => "$7M to $15M",
            RevenueRange::From15MTo20M => "$15M to $20M",
            RevenueRange::Above20M => "Above $20M",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSize {
    UpTo10,
    From11To30,
    From31To75,
    From76To150,
    Above150,
}

impl TeamSize {
    pub const ALL: [TeamSize; 5] = [
        TeamSize::UpTo10,
        TeamSize::From11To30,
        TeamSize::From31To75,
        TeamSize::From76To150,
        TeamSize::Above150,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TeamSize::UpTo10 => "1 to 10",
            TeamSize::From11To30 => "11 to 30",
            TeamSize::From31To75 => "31 to 75",
            TeamSize::From76To150 => "76 to 150",
            TeamSize::Above150 => "150 and above",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    #[default]
    Email,
    PhoneCall,
    VideoCall,
    WhatsApp,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 4] = [
        ContactMethod::Email,
        ContactMethod::PhoneCall,
        ContactMethod::VideoCall,
        ContactMethod::WhatsApp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::PhoneCall => "Phone call",
            ContactMethod::VideoCall => "Video call",
            ContactMethod::WhatsApp => "WhatsApp",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.label() == label)
    }
}

/// Identifies one input of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Company,
    Revenue,
    TeamSize,
    ToolStack,
    ContactMethod,
    Phone,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Full Name, Business Email, and Company Name are required.")]
    MissingRequired,
}

/// Lead details typed into the intake modal. Lives only while the modal is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntakeForm {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub revenue: Option<RevenueRange>,
    pub team_size: Option<TeamSize>,
    pub tool_stack: String,
    pub contact_method: ContactMethod,
    pub phone: String,
}

impl IntakeForm {
    /// Applies a raw input value. Select values that match no option clear
    /// the bracket; an unknown contact method falls back to email.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Revenue => self.revenue = RevenueRange::from_label(&value),
            Field::TeamSize => self.team_size = TeamSize::from_label(&value),
            Field::ToolStack => self.tool_stack = value,
            Field::ContactMethod => {
                self.contact_method = ContactMethod::from_label(&value).unwrap_or_default()
            }
            Field::Phone => self.phone = value,
        }
    }

    /// Current value of a field as shown in its input.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Revenue => self.revenue.map(RevenueRange::label).unwrap_or(""),
            Field::TeamSize => self.team_size.map(TeamSize::label).unwrap_or(""),
            Field::ToolStack => &self.tool_stack,
            Field::ContactMethod => self.contact_method.label(),
            Field::Phone => &self.phone,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.full_name, &self.email, &self.company];
        if required.iter().any(|value| value.is_empty()) {
            return Err(ValidationError::MissingRequired);
        }
        Ok(())
    }

    pub fn to_submission(&self, submitted_at: DateTime<Utc>) -> IntakeSubmission {
        IntakeSubmission {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            revenue: self.value(Field::Revenue).to_string(),
            team_size: self.value(Field::TeamSize).to_string(),
            tool_stack: self.tool_stack.clone(),
            contact_method: self.contact_method.label().to_string(),
            phone: self.phone.clone(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// JSON body posted to the form collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub revenue: String,
    pub team_size: String,
    pub tool_stack: String,
    pub contact_method: String,
    pub phone: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn filled() -> IntakeForm {
        let mut form = IntakeForm::default();
        form.set(Field::FullName, "Ada Okafor".to_string());
        form.set(Field::Email, "ada@northwind.co".to_string());
        form.set(Field::Company, "Northwind".to_string());
        form
    }

    #[test]
    fn new_form_is_empty_with_email_contact() {
        let form = IntakeForm::default();
        assert!(form.full_name.is_empty());
        assert!(form.revenue.is_none());
        assert!(form.team_size.is_none());
        assert_eq!(form.contact_method, ContactMethod::Email);
        assert_eq!(form.value(Field::ContactMethod), "Email");
    }

    #[test]
    fn each_required_field_is_enforced() {
        assert_eq!(filled().validate(), Ok(()));

        for field in [Field::FullName, Field::Email, Field::Company] {
            let mut form = filled();
            form.set(field, String::new());
            assert_eq!(form.validate(), Err(ValidationError::MissingRequired));
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = filled();
        form.set(Field::FullName, " ".to_string());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn optional_fields_do_not_block() {
        let mut form = filled();
        form.set(Field::Phone, String::new());
        form.set(Field::ToolStack, String::new());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn select_values_map_to_brackets() {
        let mut form = filled();
        form.set(Field::Revenue, "$7M to $15M".to_string());
        form.set(Field::TeamSize, "150 and above".to_string());
        form.set(Field::ContactMethod, "WhatsApp".to_string());
        assert_eq!(form.revenue, Some(RevenueRange::From7MTo15M));
        assert_eq!(form.team_size, Some(TeamSize::Above150));
        assert_eq!(form.contact_method, ContactMethod::WhatsApp);

        form.set(Field::Revenue, String::new());
        form.set(Field::ContactMethod, "Carrier pigeon".to_string());
        assert_eq!(form.revenue, None);
        assert_eq!(form.contact_method, ContactMethod::Email);
    }

    #[test]
    fn labels_identify_their_variant() {
        for range in RevenueRange::ALL {
            assert_eq!(RevenueRange::from_label(range.label()), Some(range));
        }
        for size in TeamSize::ALL {
            assert_eq!(TeamSize::from_label(size.label()), Some(size));
        }
        for method in ContactMethod::ALL {
            assert_eq!(ContactMethod::from_label(method.label()), Some(method));
        }
        assert_eq!(TeamSize::from_label("a lot"), None);
    }

    #[test]
    fn submission_uses_wire_keys_and_iso_timestamp() {
        let mut form = filled();
        form.set(Field::Revenue, "$1M to $3M".to_string());
        form.set(Field::ToolStack, "HubSpot, Slack".to_string());
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap();

        let body = serde_json::to_value(form.to_submission(at)).unwrap();

        assert_eq!(
            body,
            json!({
                "fullName": "Ada Okafor",
                "email": "ada@northwind.co",
                "company": "Northwind",
                "revenue": "$1M to $3M",
                "teamSize": "",
                "toolStack": "HubSpot, Slack",
                "contactMethod": "Email",
                "phone": "",
                "timestamp": "2026-03-04T09:30:00.000Z"
            })
        );
    }
}
