use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Process {
    pub id: i32,
    pub status: String,
    pub job_offer: Option<String>,
    pub opened_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub management_id: Option<i32>,
}

/// Process lifecycle states as stored in `process.status`. Stored values are
/// not canonicalized, so comparisons ignore ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Active,
    Closed,
}

impl ProcessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Active => "activo",
            ProcessStatus::Closed => "cerrado",
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        raw.eq_ignore_ascii_case(self.as_str())
    }
}

/// Company scoping applied uniformly to every dashboard query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    pub company_id: Option<i32>,
}

impl CompanyFilter {
    pub fn all() -> Self {
        Self { company_id: None }
    }

    pub fn company(company_id: i32) -> Self {
        Self {
            company_id: Some(company_id),
        }
    }

    /// Parses the raw `companyId` query value. Absent or blank means no filter.
    pub fn parse(raw: Option<&str>) -> std::result::Result<Self, String> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::all()),
            Some(value) => value
                .parse::<i32>()
                .map(Self::company)
                .map_err(|_| format!("companyId must be an integer, got '{}'", value)),
        }
    }

    /// `company_id` is the company of the record's management, if it has one.
    pub fn matches(&self, company_id: Option<i32>) -> bool {
        match self.company_id {
            None => true,
            Some(wanted) => company_id == Some(wanted),
        }
    }
}

/// Criteria for a process count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCount {
    pub status: ProcessStatus,
    pub require_closed_at: bool,
    pub closed_since: Option<DateTime<Utc>>,
    pub filter: CompanyFilter,
}

impl ProcessCount {
    pub fn with_status(status: ProcessStatus, filter: CompanyFilter) -> Self {
        Self {
            status,
            require_closed_at: false,
            closed_since: None,
            filter,
        }
    }

    pub fn closed_at_set(mut self) -> Self {
        self.require_closed_at = true;
        self
    }

    pub fn closed_since(mut self, since: DateTime<Utc>) -> Self {
        self.closed_since = Some(since);
        self
    }
}
