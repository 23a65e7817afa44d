use crate::models::StaffCategory;

/// Every page the portal can show. Each maps to exactly one path.
/// All but `AdminDashboard` render inside the public navbar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Services,
    Notices,
    Downloads,
    About,
    AdminLogin,
    AdminDashboard,
    Committee,
    Chiefs,
    CurrentStaff,
    FormerStaff,
}

impl View {
    /// Pages rendered inside the public chrome.
    pub const PUBLIC: [View; 9] = [
        View::Home,
        View::Services,
        View::Notices,
        View::Downloads,
        View::About,
        View::Committee,
        View::Chiefs,
        View::CurrentStaff,
        View::FormerStaff,
    ];

    pub const STAFF: [View; 4] = [
        View::Committee,
        View::Chiefs,
        View::CurrentStaff,
        View::FormerStaff,
    ];

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Services => "/services",
            View::Notices => "/notices",
            View::Downloads => "/downloads",
            View::About => "/about",
            View::AdminLogin => "/login",
            View::AdminDashboard => "/admin",
            View::Committee => "/staff/committee",
            View::Chiefs => "/staff/chiefs",
            View::CurrentStaff => "/staff/current",
            View::FormerStaff => "/staff/former",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "गृहपृष्ठ",
            View::Services => "सेवाहरू",
            View::Notices => "सूचनाहरू",
            View::Downloads => "डाउनलोड",
            View::About => "हाम्रो बारेमा",
            View::AdminLogin => "प्रशासनिक क्षेत्र",
            View::AdminDashboard => "प्रशासन प्यानल",
            View::Committee => "स्वास्थ्य संस्था व्यवस्थापन समिति",
            View::Chiefs => "प्रमुखहरू",
            View::CurrentStaff => "हाल कार्यरत कर्मचारीहरू",
            View::FormerStaff => "पूर्व कर्मचारीहरू",
        }
    }

    pub fn staff_category(self) -> Option<StaffCategory> {
        match self {
            View::Committee => Some(StaffCategory::Committee),
            View::Chiefs => Some(StaffCategory::Chief),
            View::CurrentStaff => Some(StaffCategory::Staff),
            View::FormerStaff => Some(StaffCategory::Former),
            _ => None,
        }
    }

    pub fn is_staff_page(self) -> bool {
        self.staff_category().is_some()
    }
}
