use crate::{ReminderPolicy, ReminderPreference};
use serde::{Deserialize, Serialize};

/// Whose settings decided the `EffectiveReminderPolicy`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicySource {
    Company,
    Sender,
}

/// The reminder settings that actually apply to the `DocumentCollection`s
/// of one sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveReminderPolicy {
    pub enabled: bool,
    pub frequency_days: i64,
    pub source: PolicySource,
}

impl EffectiveReminderPolicy {
    fn disabled(source: PolicySource, frequency_days: i64) -> Self {
        Self {
            enabled: false,
            frequency_days,
            source,
        }
    }
}

/// Resolves the `Company` policy against the sender's own preference.
///
/// A disabled `Company` policy always wins. Otherwise the sender's preference
/// is only consulted when the `Company` hands control to its senders.
/// A frequency below one day is treated as missing configuration and
/// disables reminders.
pub fn resolve_effective_policy(
    company_policy: &ReminderPolicy,
    sender_preference: &ReminderPreference,
) -> EffectiveReminderPolicy {
    if !company_policy.enabled {
        return EffectiveReminderPolicy::disabled(
            PolicySource::Company,
            company_policy.frequency_days,
        );
    }

    let policy = if company_policy.sender_controls_settings {
        EffectiveReminderPolicy {
            enabled: sender_preference.notify_enabled,
            frequency_days: sender_preference.frequency_days,
            source: PolicySource::Sender,
        }
    } else {
        EffectiveReminderPolicy {
            enabled: true,
            frequency_days: company_policy.frequency_days,
            source: PolicySource::Company,
        }
    };

    if policy.frequency_days < 1 {
        return EffectiveReminderPolicy::disabled(policy.source, policy.frequency_days);
    }
    policy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company_policy(enabled: bool, frequency_days: i64, sender_controls: bool) -> ReminderPolicy {
        ReminderPolicy {
            enabled,
            frequency_days,
            sender_controls_settings: sender_controls,
        }
    }

    fn preference(notify_enabled: bool, frequency_days: i64) -> ReminderPreference {
        ReminderPreference {
            notify_enabled,
            frequency_days,
        }
    }

    #[test]
    fn disabled_company_cannot_be_overridden_by_sender() {
        let res = resolve_effective_policy(&company_policy(false, 5, true), &preference(true, 2));
        assert!(!res.enabled);
        assert_eq!(res.source, PolicySource::Company);

        let res = resolve_effective_policy(&company_policy(false, 5, false), &preference(true, 2));
        assert!(!res.enabled);
    }

    #[test]
    fn company_frequency_is_used_when_company_keeps_control() {
        let res = resolve_effective_policy(&company_policy(true, 5, false), &preference(false, 11));
        assert_eq!(
            res,
            EffectiveReminderPolicy {
                enabled: true,
                frequency_days: 5,
                source: PolicySource::Company,
            }
        );
    }

    #[test]
    fn sender_preference_governs_when_sender_controls_settings() {
        let res = resolve_effective_policy(&company_policy(true, 5, true), &preference(true, 11));
        assert_eq!(
            res,
            EffectiveReminderPolicy {
                enabled: true,
                frequency_days: 11,
                source: PolicySource::Sender,
            }
        );
    }

    #[test]
    fn disabled_sender_preference_suppresses_reminders() {
        let res = resolve_effective_policy(&company_policy(true, 5, true), &preference(false, 11));
        assert!(!res.enabled);
        assert_eq!(res.source, PolicySource::Sender);
    }

    #[test]
    fn missing_frequency_disables_reminders() {
        let res = resolve_effective_policy(&company_policy(true, 0, false), &preference(true, 3));
        assert!(!res.enabled);

        let res = resolve_effective_policy(&company_policy(true, 3, true), &preference(true, -1));
        assert!(!res.enabled);
    }
}
