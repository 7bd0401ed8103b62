use crate::error::{ApiResult, ParseBirthdaySnafu};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use sqlx::FromRow;

pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Order in which create payloads are checked for missing fields.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "student_number",
    "first_name",
    "middle_name",
    "last_name",
    "gender",
    "birthday",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub student_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: i32,
    pub birthday: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct StudentForm {
    pub student_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: i32,
    pub birthday: String,
}

#[derive(Debug)]
pub struct NewStudent {
    pub student_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: i32,
    pub birthday: NaiveDate,
}

impl StudentForm {
    pub fn into_new(self) -> ApiResult<NewStudent> {
        let birthday = NaiveDate::parse_from_str(&self.birthday, BIRTHDAY_FORMAT)
            .context(ParseBirthdaySnafu)?;

        Ok(NewStudent {
            student_number: self.student_number,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            gender: self.gender,
            birthday,
        })
    }
}

/// Partial update: only fields present in the body overwrite stored values.
#[derive(Debug, Default, Deserialize)]
pub struct StudentPatch {
    pub student_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<i32>,
    pub birthday: Option<String>,
}

impl StudentPatch {
    pub fn apply(self, student: &mut Student) -> ApiResult<()> {
        if let Some(student_number) = self.student_number {
            student.student_number = student_number;
        }
        if let Some(first_name) = self.first_name {
            student.first_name = first_name;
        }
        if let Some(middle_name) = self.middle_name {
            student.middle_name = middle_name;
        }
        if let Some(last_name) = self.last_name {
            student.last_name = last_name;
        }
        if let Some(gender) = self.gender {
            student.gender = gender;
        }
        if let Some(birthday) = self.birthday {
            student.birthday =
                NaiveDate::parse_from_str(&birthday, BIRTHDAY_FORMAT).context(ParseBirthdaySnafu)?;
        }

        Ok(())
    }
}
