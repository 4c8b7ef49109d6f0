//! Customer record assembled from the input form.
//!
//! Column order and category labels must match the encoding used when the
//! classifier was trained, including the trailing space in `"Negative "`.

use serde::{Deserialize, Serialize};

/// Record columns in trained order.
pub const COLUMNS: [&str; 11] = [
    "Age",
    "Gender",
    "Marital Status",
    "Occupation",
    "Monthly Income",
    "Educational Qualifications",
    "Family size",
    "latitude",
    "longitude",
    "Pin code",
    "Feedback",
];

/// Gender as offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::PreferNotToSay];

    /// Label as it appeared in the training data.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Marital status as offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 3] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::PreferNotToSay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Occupation as offered by the form.
///
/// `Self Employeed` and `House wife` keep the spelling of the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupation {
    Student,
    Employee,
    #[serde(rename = "Self Employeed")]
    SelfEmployed,
    #[serde(rename = "House wife")]
    HouseWife,
}

impl Occupation {
    pub const ALL: [Occupation; 4] = [
        Occupation::Student,
        Occupation::Employee,
        Occupation::SelfEmployed,
        Occupation::HouseWife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Occupation::Student => "Student",
            Occupation::Employee => "Employee",
            Occupation::SelfEmployed => "Self Employeed",
            Occupation::HouseWife => "House wife",
        }
    }
}

/// Monthly income bracket.
///
/// Encoded as an ordinal 0-4 before assembly, matching the training
/// preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthlyIncome {
    #[serde(rename = "No Income")]
    NoIncome,
    #[serde(rename = "Below Rs.10000")]
    BelowRs10000,
    #[serde(rename = "10001 to 25000")]
    Rs10001To25000,
    #[serde(rename = "25001 to 50000")]
    Rs25001To50000,
    #[serde(rename = "More than 50000")]
    MoreThan50000,
}

impl MonthlyIncome {
    pub const ALL: [MonthlyIncome; 5] = [
        MonthlyIncome::NoIncome,
        MonthlyIncome::BelowRs10000,
        MonthlyIncome::Rs10001To25000,
        MonthlyIncome::Rs25001To50000,
        MonthlyIncome::MoreThan50000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MonthlyIncome::NoIncome => "No Income",
            MonthlyIncome::BelowRs10000 => "Below Rs.10000",
            MonthlyIncome::Rs10001To25000 => "10001 to 25000",
            MonthlyIncome::Rs25001To50000 => "25001 to 50000",
            MonthlyIncome::MoreThan50000 => "More than 50000",
        }
    }

    /// Ordinal code used in the `Monthly Income` column.
    pub fn ordinal(&self) -> i64 {
        match self {
            MonthlyIncome::NoIncome => 0,
            MonthlyIncome::BelowRs10000 => 1,
            MonthlyIncome::Rs10001To25000 => 2,
            MonthlyIncome::Rs25001To50000 => 3,
            MonthlyIncome::MoreThan50000 => 4,
        }
    }
}

/// Educational qualification.
///
/// Encoded as an ordinal 0-3 before assembly, matching the training
/// preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    School,
    Graduate,
    #[serde(rename = "Post Graduate")]
    PostGraduate,
    #[serde(rename = "Ph.D")]
    PhD,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::School,
        Education::Graduate,
        Education::PostGraduate,
        Education::PhD,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Education::School => "School",
            Education::Graduate => "Graduate",
            Education::PostGraduate => "Post Graduate",
            Education::PhD => "Ph.D",
        }
    }

    /// Ordinal code used in the `Educational Qualifications` column.
    pub fn ordinal(&self) -> i64 {
        match self {
            Education::School => 0,
            Education::Graduate => 1,
            Education::PostGraduate => 2,
            Education::PhD => 3,
        }
    }
}

/// Feedback the customer previously left.
///
/// The trained one-hot vocabulary contains `"Negative "` with a trailing
/// space (a defect in the training CSV). The label must stay byte-exact or
/// the transform stage rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Positive,
    #[serde(rename = "Negative ")]
    Negative,
}

impl Feedback {
    pub const ALL: [Feedback; 2] = [Feedback::Positive, Feedback::Negative];

    pub fn label(&self) -> &'static str {
        match self {
            Feedback::Positive => "Positive",
            Feedback::Negative => "Negative ",
        }
    }
}

/// One cell of the assembled row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

/// A single customer to score, one per form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Age in years (form range 18-60)
    #[serde(rename = "Age")]
    pub age: i32,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    #[serde(rename = "Marital Status")]
    pub marital_status: MaritalStatus,

    #[serde(rename = "Occupation")]
    pub occupation: Occupation,

    #[serde(rename = "Monthly Income")]
    pub monthly_income: MonthlyIncome,

    #[serde(rename = "Educational Qualifications")]
    pub education: Education,

    /// Household size (form range 1-10)
    #[serde(rename = "Family size")]
    pub family_size: i32,

    #[serde(rename = "latitude")]
    pub latitude: f64,

    #[serde(rename = "longitude")]
    pub longitude: f64,

    /// Postal code, kept as text to match the trained categorical column
    #[serde(rename = "Pin code")]
    pub pin_code: String,

    #[serde(rename = "Feedback")]
    pub feedback: Feedback,
}

impl CustomerRecord {
    /// Row cells as (column name, value) pairs in trained column order.
    ///
    /// Income and education are emitted as their ordinal codes.
    pub fn columns(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("Age", FieldValue::Number(f64::from(self.age))),
            ("Gender", FieldValue::Text(self.gender.label().to_string())),
            (
                "Marital Status",
                FieldValue::Text(self.marital_status.label().to_string()),
            ),
            (
                "Occupation",
                FieldValue::Text(self.occupation.label().to_string()),
            ),
            (
                "Monthly Income",
                FieldValue::Number(self.monthly_income.ordinal() as f64),
            ),
            (
                "Educational Qualifications",
                FieldValue::Number(self.education.ordinal() as f64),
            ),
            ("Family size", FieldValue::Number(f64::from(self.family_size))),
            ("latitude", FieldValue::Number(self.latitude)),
            ("longitude", FieldValue::Number(self.longitude)),
            ("Pin code", FieldValue::Text(self.pin_code.clone())),
            ("Feedback", FieldValue::Text(self.feedback.label().to_string())),
        ]
    }
}

impl Default for CustomerRecord {
    /// Form defaults: the values each prompt starts from.
    fn default() -> Self {
        Self {
            age: 25,
            gender: Gender::Male,
            marital_status: MaritalStatus::Single,
            occupation: Occupation::Student,
            monthly_income: MonthlyIncome::NoIncome,
            education: Education::School,
            family_size: 3,
            latitude: 12.97,
            longitude: 77.59,
            pin_code: "560001".to_string(),
            feedback: Feedback::Positive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_has_eleven_columns_in_trained_order() {
        let record = CustomerRecord::default();
        let columns = record.columns();

        assert_eq!(columns.len(), 11);
        let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, COLUMNS);
    }

    #[test]
    fn test_income_mapping_is_total() {
        let expected = [
            (MonthlyIncome::NoIncome, 0),
            (MonthlyIncome::BelowRs10000, 1),
            (MonthlyIncome::Rs10001To25000, 2),
            (MonthlyIncome::Rs25001To50000, 3),
            (MonthlyIncome::MoreThan50000, 4),
        ];

        assert_eq!(MonthlyIncome::ALL.len(), expected.len());
        for (income, code) in expected {
            assert_eq!(income.ordinal(), code);
        }
    }

    #[test]
    fn test_education_mapping_is_total() {
        let expected = [
            (Education::School, 0),
            (Education::Graduate, 1),
            (Education::PostGraduate, 2),
            (Education::PhD, 3),
        ];

        assert_eq!(Education::ALL.len(), expected.len());
        for (education, code) in expected {
            assert_eq!(education.ordinal(), code);
        }
    }

    #[test]
    fn test_negative_feedback_keeps_trailing_space() {
        assert_eq!(Feedback::Negative.label(), "Negative ");
        assert_eq!(Feedback::Negative.label().as_bytes().last(), Some(&b' '));
    }

    #[test]
    fn test_occupation_labels_match_training_spelling() {
        assert_eq!(Occupation::SelfEmployed.label(), "Self Employeed");
        assert_eq!(Occupation::HouseWife.label(), "House wife");
    }

    #[test]
    fn test_ordinal_columns_carry_codes_not_labels() {
        let record = CustomerRecord {
            monthly_income: MonthlyIncome::MoreThan50000,
            education: Education::PhD,
            ..CustomerRecord::default()
        };
        let columns = record.columns();

        assert_eq!(columns[4].1, FieldValue::Number(4.0));
        assert_eq!(columns[5].1, FieldValue::Number(3.0));
    }

    #[test]
    fn test_record_serialization() {
        let record = CustomerRecord::default();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Negative \"") || json.contains("\"Positive\""));

        let deserialized: CustomerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.age, deserialized.age);
        assert_eq!(record.gender, deserialized.gender);
        assert_eq!(record.pin_code, deserialized.pin_code);
    }
}
