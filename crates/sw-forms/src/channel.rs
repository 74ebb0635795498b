//! Channel-type field visibility rules.
//!
//! The notification-channel form reveals exactly one disjoint set of field
//! groups per channel type. The mapping is a closed table over the enum, not
//! attribute inspection, so every group lands in exactly one of the shown or
//! hidden sets for every discriminant value.

use sw_core::FieldState;

/// Notification channel discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Email,
    Script,
    Sms,
    Jabber,
    EzTexting,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 5] = [
        ChannelKind::Email,
        ChannelKind::Script,
        ChannelKind::Sms,
        ChannelKind::Jabber,
        ChannelKind::EzTexting,
    ];
}

impl std::str::FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Email" => Ok(ChannelKind::Email),
            "Script" => Ok(ChannelKind::Script),
            "SMS" => Ok(ChannelKind::Sms),
            "Jabber" => Ok(ChannelKind::Jabber),
            "Ez Texting" => Ok(ChannelKind::EzTexting),
            other => Err(format!("unknown channel type '{other}'")),
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChannelKind::Email => "Email",
            ChannelKind::Script => "Script",
            ChannelKind::Sms => "SMS",
            ChannelKind::Jabber => "Jabber",
            ChannelKind::EzTexting => "Ez Texting",
        };
        f.write_str(name)
    }
}

/// One visibility unit: fields that show and hide together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldGroup {
    SmtpSettings,
    ScriptPath,
    GsmModem,
    JabberAccount,
    EzTextingAccount,
    Password,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 6] = [
        FieldGroup::SmtpSettings,
        FieldGroup::ScriptPath,
        FieldGroup::GsmModem,
        FieldGroup::JabberAccount,
        FieldGroup::EzTextingAccount,
        FieldGroup::Password,
    ];
}

/// Individual form fields managed through the groups above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChannelField {
    SmtpServer,
    SmtpHelo,
    SmtpEmail,
    ScriptPath,
    GsmModem,
    JabberAccount,
    EzTextingUsername,
    EzTextingLimit,
    Password,
}

impl ChannelField {
    pub const ALL: [ChannelField; 9] = [
        ChannelField::SmtpServer,
        ChannelField::SmtpHelo,
        ChannelField::SmtpEmail,
        ChannelField::ScriptPath,
        ChannelField::GsmModem,
        ChannelField::JabberAccount,
        ChannelField::EzTextingUsername,
        ChannelField::EzTextingLimit,
        ChannelField::Password,
    ];

    pub fn group(self) -> FieldGroup {
        match self {
            ChannelField::SmtpServer | ChannelField::SmtpHelo | ChannelField::SmtpEmail => {
                FieldGroup::SmtpSettings
            }
            ChannelField::ScriptPath => FieldGroup::ScriptPath,
            ChannelField::GsmModem => FieldGroup::GsmModem,
            ChannelField::JabberAccount => FieldGroup::JabberAccount,
            ChannelField::EzTextingUsername | ChannelField::EzTextingLimit => {
                FieldGroup::EzTextingAccount
            }
            ChannelField::Password => FieldGroup::Password,
        }
    }
}

/// Full partition of the managed groups for one discriminant value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityPlan {
    pub show: Vec<FieldGroup>,
    pub hide: Vec<FieldGroup>,
}

impl VisibilityPlan {
    pub fn shows(&self, group: FieldGroup) -> bool {
        self.show.contains(&group)
    }

    /// Render flags for a group under this plan. Shown groups are visible
    /// and enabled; hidden groups are invisible and disabled.
    pub fn group_state(&self, group: FieldGroup) -> FieldState {
        if self.shows(group) {
            FieldState::shown(true)
        } else {
            FieldState::HIDDEN
        }
    }
}

/// Resolve the group partition for a channel type.
///
/// Idempotent: repeated calls with the same discriminant yield the same plan.
pub fn resolve(kind: ChannelKind) -> VisibilityPlan {
    let show: &[FieldGroup] = match kind {
        ChannelKind::Email => &[FieldGroup::SmtpSettings],
        ChannelKind::Script => &[FieldGroup::ScriptPath],
        ChannelKind::Sms => &[FieldGroup::GsmModem],
        ChannelKind::Jabber => &[FieldGroup::JabberAccount, FieldGroup::Password],
        ChannelKind::EzTexting => &[FieldGroup::EzTextingAccount, FieldGroup::Password],
    };
    let hide: Vec<FieldGroup> = FieldGroup::ALL
        .into_iter()
        .filter(|group| !show.contains(group))
        .collect();
    VisibilityPlan {
        show: show.to_vec(),
        hide,
    }
}

/// Second visibility axis: the provider signup link is shown for exactly one
/// channel type and is not one of the managed groups.
pub fn shows_signup_link(kind: ChannelKind) -> bool {
    matches!(kind, ChannelKind::EzTexting)
}
