//! GitHub Jobs postings
//!
//! The jobs endpoints render `created_at` in the verbose
//! `Thu Jan 02 03:04:05 UTC 2020` form, which is why the date chain
//! carries a third format.

use serde::{Deserialize, Serialize};

use crate::dates::{lenient_date, DateValue};
use crate::enums::wire_enum;

wire_enum! {
    /// Employment type of a posting
    pub enum JobType as "job type" {
        FullTime => "Full Time",
        PartTime => "Part Time",
        Contract => "Contract",
        Internship => "Internship",
    }
}

/// Represents a job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Posting ID
    pub id: String,

    /// Employment type
    #[serde(rename = "type")]
    pub job_type: JobType,

    /// Job title
    pub title: String,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub company_url: Option<String>,

    #[serde(default)]
    pub company_logo: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Description (HTML)
    #[serde(default)]
    pub description: Option<String>,

    /// Application instructions (HTML)
    #[serde(default)]
    pub how_to_apply: Option<String>,

    /// Posting URL
    #[serde(default)]
    pub url: Option<String>,

    /// Posting time
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_job_with_verbose_date() {
        let job: Job = serde_json::from_value(json!({
            "id": "0a0b1c2d",
            "type": "Full Time",
            "title": "Rust Engineer",
            "created_at": "Thu Jan 02 03:04:05 UTC 2020"
        }))
        .unwrap();

        assert_eq!(job.job_type, JobType::FullTime);
        let expected = NaiveDate::from_ymd_opt(2020, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(job.created_at, Some(expected));
    }

    #[test]
    fn test_job_type_is_case_sensitive() {
        let result = serde_json::from_value::<Job>(json!({
            "id": "x",
            "type": "full time",
            "title": "Rust Engineer"
        }));
        assert!(result.is_err());
    }
}
