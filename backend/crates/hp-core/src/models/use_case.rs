use std::fmt;

use serde::{Serialize, Serializer};

/// A tenant-enableable dashboard module.
///
/// Variant order is the fixed enumeration order used for navigation menus
/// and default-route selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UseCase {
    HealthcareUnderwriterDashboard,
    UserFeedbackAnalysisDashboard,
    HealthcarePriceTransparency,
    MemberDashboard,
    VoiceEnabledHealthcarePriceTransparency,
}

impl UseCase {
    /// The allow-list, in enumeration order.
    pub const ALL: [UseCase; 5] = [
        Self::HealthcareUnderwriterDashboard,
        Self::UserFeedbackAnalysisDashboard,
        Self::HealthcarePriceTransparency,
        Self::MemberDashboard,
        Self::VoiceEnabledHealthcarePriceTransparency,
    ];

    /// The use case that resolves `/` whenever it is enabled.
    pub const DEFAULT: UseCase = Self::HealthcareUnderwriterDashboard;

    /// Name the tenant configuration API uses for this use case.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::HealthcareUnderwriterDashboard => "Healthcare Underwriter Dashboard",
            Self::UserFeedbackAnalysisDashboard => "User Feedback Analysis Dashboard",
            Self::HealthcarePriceTransparency => "Healthcare Price Transparency",
            Self::MemberDashboard => "Member Dashboard",
            Self::VoiceEnabledHealthcarePriceTransparency => {
                "Voice enabled Healthcare Price Transparency"
            }
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            Self::HealthcareUnderwriterDashboard => "HealthcareUnderwriterDashboard",
            Self::UserFeedbackAnalysisDashboard => "UserFeedbackAnalysisDashboard",
            Self::HealthcarePriceTransparency => "HealthcarePriceTransparency",
            Self::MemberDashboard => "MemberDashboard",
            Self::VoiceEnabledHealthcarePriceTransparency => {
                "VoiceEnabledHealthcarePriceTransparency"
            }
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::HealthcareUnderwriterDashboard => "/dashboard",
            Self::UserFeedbackAnalysisDashboard => "/feedback",
            Self::HealthcarePriceTransparency => "/hospital",
            Self::MemberDashboard => "/memberdashboard",
            Self::VoiceEnabledHealthcarePriceTransparency => "/voice-enabled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HealthcareUnderwriterDashboard => "Healthcare Underwriter Dashboard",
            Self::UserFeedbackAnalysisDashboard => "User Feedback Analysis Dashboard",
            Self::HealthcarePriceTransparency => "Healthcare Price Transparency",
            Self::MemberDashboard => "Member Dashboard",
            Self::VoiceEnabledHealthcarePriceTransparency => {
                "Voice Enabled Healthcare Price Transparency"
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::HealthcareUnderwriterDashboard => "dashboard",
            Self::UserFeedbackAnalysisDashboard => "insights",
            Self::HealthcarePriceTransparency => "local_hospital",
            Self::MemberDashboard => "card_giftcard",
            Self::VoiceEnabledHealthcarePriceTransparency => "hearing",
        }
    }

    /// Modules served outside the portal (the voice assistant) are reached
    /// through an external redirect rather than a mounted page.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::VoiceEnabledHealthcarePriceTransparency)
    }

    /// Position in the enumeration order.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Match a backend-supplied name against the allow-list.
    ///
    /// Accepts the wire name, the navigation label and the identifier.
    /// Unknown names yield `None`; they are not an error.
    pub fn from_wire(value: &str) -> Option<UseCase> {
        let value = value.trim();
        Self::ALL.into_iter().find(|use_case| {
            value == use_case.wire_name()
                || value == use_case.label()
                || value == use_case.identifier()
        })
    }

    /// Reverse lookup of a route path. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<UseCase> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL
            .into_iter()
            .find(|use_case| use_case.path() == path)
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl Serialize for UseCase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_name())
    }
}
