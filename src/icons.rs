/// Closed set of service icons. Anything else resolves to `Help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Stethoscope,
    Ambulance,
    Baby,
    TestTube,
    Pill,
    Activity,
    Accessibility,
    Smile,
    Help,
}

impl ServiceIcon {
    /// Icons offered in the admin service form.
    pub const SELECTABLE: [ServiceIcon; 6] = [
        ServiceIcon::Stethoscope,
        ServiceIcon::Ambulance,
        ServiceIcon::Baby,
        ServiceIcon::TestTube,
        ServiceIcon::Pill,
        ServiceIcon::Activity,
    ];

    const NAMED: [ServiceIcon; 8] = [
        ServiceIcon::Stethoscope,
        ServiceIcon::Ambulance,
        ServiceIcon::Baby,
        ServiceIcon::TestTube,
        ServiceIcon::Pill,
        ServiceIcon::Activity,
        ServiceIcon::Accessibility,
        ServiceIcon::Smile,
    ];

    pub fn from_name(name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|icon| icon.name() == name)
            .unwrap_or(ServiceIcon::Help)
    }

    pub fn name(self) -> &'static str {
        match self {
            ServiceIcon::Stethoscope => "Stethoscope",
            ServiceIcon::Ambulance => "Ambulance",
            ServiceIcon::Baby => "Baby",
            ServiceIcon::TestTube => "TestTube",
            ServiceIcon::Pill => "Pill",
            ServiceIcon::Activity => "Activity",
            ServiceIcon::Accessibility => "Accessibility",
            ServiceIcon::Smile => "Smile",
            ServiceIcon::Help => "HelpCircle",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Stethoscope => "🩺",
            ServiceIcon::Ambulance => "🚑",
            ServiceIcon::Baby => "👶",
            ServiceIcon::TestTube => "🧪",
            ServiceIcon::Pill => "💊",
            ServiceIcon::Activity => "📈",
            ServiceIcon::Accessibility => "♿",
            ServiceIcon::Smile => "😁",
            ServiceIcon::Help => "❔",
        }
    }

    pub fn admin_label(self) -> &'static str {
        match self {
            ServiceIcon::Stethoscope => "Stethoscope (OPD)",
            ServiceIcon::Ambulance => "Ambulance (Emergency)",
            ServiceIcon::Baby => "Baby (Maternity)",
            ServiceIcon::TestTube => "TestTube (Lab)",
            ServiceIcon::Pill => "Pill (Pharmacy)",
            ServiceIcon::Activity => "Activity (Radiology)",
            ServiceIcon::Accessibility => "Accessibility (Physiotherapy)",
            ServiceIcon::Smile => "Smile (Dental)",
            ServiceIcon::Help => "Other",
        }
    }
}
