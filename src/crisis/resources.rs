// Static crisis resources and emergency contacts

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneContact {
    pub phone: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContact {
    pub text: &'static str,
    pub description: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnlineResource {
    pub name: &'static str,
    pub url: &'static str,
}

/// Crisis contacts served independently of any message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisResources {
    pub emergency: PhoneContact,
    pub lifeline: PhoneContact,
    pub crisis_text: TextContact,
    pub online_resources: &'static [OnlineResource],
}

const ONLINE_RESOURCES: &[OnlineResource] = &[
    OnlineResource {
        name: "Suicide Prevention Lifeline",
        url: "https://suicidepreventionlifeline.org",
    },
    OnlineResource {
        name: "Crisis Text Line",
        url: "https://www.crisistextline.org",
    },
    OnlineResource {
        name: "National Alliance on Mental Illness",
        url: "https://www.nami.org",
    },
];

pub static CRISIS_RESOURCES: CrisisResources = CrisisResources {
    emergency: PhoneContact {
        phone: "911",
        description: "Emergency Services",
        hours: None,
    },
    lifeline: PhoneContact {
        phone: "988",
        description: "National Suicide Prevention Lifeline",
        hours: Some("24/7"),
    },
    crisis_text: TextContact {
        text: "HOME to 741741",
        description: "Crisis Text Line",
        hours: "24/7",
    },
    online_resources: ONLINE_RESOURCES,
};

pub fn crisis_resources() -> &'static CrisisResources {
    &CRISIS_RESOURCES
}
