use serde::Serialize;

/// Records that can be looked up and deleted by id.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeCategory {
    General,
    Emergency,
    Vaccination,
    Career,
}

impl NoticeCategory {
    pub const ALL: [NoticeCategory; 4] = [
        NoticeCategory::General,
        NoticeCategory::Emergency,
        NoticeCategory::Vaccination,
        NoticeCategory::Career,
    ];

    pub fn code(self) -> &'static str {
        match self {
            NoticeCategory::General => "General",
            NoticeCategory::Emergency => "Emergency",
            NoticeCategory::Vaccination => "Vaccination",
            NoticeCategory::Career => "Career",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoticeCategory::General => "साधारण",
            NoticeCategory::Emergency => "आपतकालीन",
            NoticeCategory::Vaccination => "खोप",
            NoticeCategory::Career => "वृत्ति",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            NoticeCategory::General => "badge-blue",
            NoticeCategory::Emergency => "badge-red",
            NoticeCategory::Vaccination => "badge-green",
            NoticeCategory::Career => "badge-purple",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DownloadCategory {
    Form,
    Guideline,
    Report,
    Other,
}

impl DownloadCategory {
    pub const ALL: [DownloadCategory; 4] = [
        DownloadCategory::Form,
        DownloadCategory::Guideline,
        DownloadCategory::Report,
        DownloadCategory::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DownloadCategory::Form => "Form",
            DownloadCategory::Guideline => "Guideline",
            DownloadCategory::Report => "Report",
            DownloadCategory::Other => "Other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DownloadCategory::Form => "फारम",
            DownloadCategory::Guideline => "निर्देशिका",
            DownloadCategory::Report => "प्रतिवेदन",
            DownloadCategory::Other => "अन्य",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffCategory {
    Chief,
    #[default]
    Staff,
    Committee,
    Former,
}

impl StaffCategory {
    pub const ALL: [StaffCategory; 4] = [
        StaffCategory::Staff,
        StaffCategory::Chief,
        StaffCategory::Committee,
        StaffCategory::Former,
    ];

    pub fn code(self) -> &'static str {
        match self {
            StaffCategory::Chief => "CHIEF",
            StaffCategory::Staff => "STAFF",
            StaffCategory::Committee => "COMMITTEE",
            StaffCategory::Former => "FORMER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StaffCategory::Chief => "प्रमुखहरू (Chiefs/MS)",
            StaffCategory::Staff => "हाल कार्यरत कर्मचारी (Current Staff)",
            StaffCategory::Committee => "व्यवस्थापन समिति (Management Committee)",
            StaffCategory::Former => "पूर्व कर्मचारी (Former Staff)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

/// Home-page sidebar slot. At most one staff record holds each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeaturedRole {
    Chairperson,
    Chief,
    InfoOfficer,
}

impl FeaturedRole {
    pub const ALL: [FeaturedRole; 3] = [
        FeaturedRole::Chairperson,
        FeaturedRole::Chief,
        FeaturedRole::InfoOfficer,
    ];

    pub fn code(self) -> &'static str {
        match self {
            FeaturedRole::Chairperson => "CHAIRPERSON",
            FeaturedRole::Chief => "CHIEF",
            FeaturedRole::InfoOfficer => "INFO_OFFICER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeaturedRole::Chairperson => "अध्यक्ष",
            FeaturedRole::Chief => "हालका प्रमुख",
            FeaturedRole::InfoOfficer => "सूचना अधिकारी",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub date: String,
    pub content: String,
    pub category: NoticeCategory,
    /// External URL or embedded data URI.
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRate {
    pub test_name: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Symbolic icon name, resolved through `ServiceIcon::from_name` at render time.
    pub icon: String,
    pub test_rates: Vec<TestRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    /// Post or job title.
    pub specialization: String,
    pub level: String,
    pub department: String,
    pub availability: String,
    pub image: String,
    pub category: StaffCategory,
    pub featured_role: Option<FeaturedRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadItem {
    pub id: String,
    pub title: String,
    pub category: DownloadCategory,
    pub file: String,
    pub date: String,
}

impl Identified for Notice {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Staff {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for DownloadItem {
    fn id(&self) -> &str {
        &self.id
    }
}
