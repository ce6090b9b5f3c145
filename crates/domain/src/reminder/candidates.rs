use crate::{DocumentCollection, Signer, SigningMode};
use itertools::Itertools;

/// Selects the `Signer`s of a `DocumentCollection` that may receive a
/// sign reminder in this pass, before the frequency of reminders is considered.
///
/// - Collections that do not want signing notifications give no candidates.
/// - `OrderedGroupSign`: only the first signer in `signing_order` that has not
///   signed or rejected is considered. If that signer cannot be reminded, e.g.
///   because the initial notification was never sent, no one is.
/// - `GroupSign` and `SingleSign`: every signer that has received the documents
///   and not yet acted is a candidate.
///
/// Signers without a remote `SendingMethod` are never candidates.
pub fn select_candidate_signers(collection: &DocumentCollection) -> Vec<&Signer> {
    if !collection.notifications.should_send_for_signing || collection.signers.is_empty() {
        return Vec::new();
    }

    match collection.mode {
        SigningMode::OrderedGroupSign => collection
            .signers
            .iter()
            .sorted_by_key(|s| s.signing_order)
            .find(|s| !s.status.is_terminal())
            .filter(|s| is_remindable(s))
            .into_iter()
            .collect(),
        SigningMode::GroupSign | SigningMode::SingleSign => collection
            .signers
            .iter()
            .filter(|s| is_remindable(s))
            .collect(),
    }
}

fn is_remindable(signer: &Signer) -> bool {
    signer.status.is_awaiting_signature() && signer.sending_method.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SendingMethod, SignerStatus, ID};

    fn signer(status: SignerStatus, signing_order: i32) -> Signer {
        let mut s = Signer::new(
            format!("signer-{}", signing_order),
            Some(SendingMethod::Email),
            signing_order,
        );
        s.status = status;
        s
    }

    fn collection(mode: SigningMode, signers: Vec<Signer>) -> DocumentCollection {
        let mut c = DocumentCollection::new(ID::default(), ID::default(), mode);
        c.signers = signers;
        c
    }

    fn names(signers: Vec<&Signer>) -> Vec<String> {
        signers.into_iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn ordered_selects_only_the_first_pending_signer() {
        let c = collection(
            SigningMode::OrderedGroupSign,
            vec![
                signer(SignerStatus::Signed, 0),
                signer(SignerStatus::Viewed, 1),
                signer(SignerStatus::Viewed, 2),
            ],
        );
        assert_eq!(names(select_candidate_signers(&c)), vec!["signer-1"]);
    }

    #[test]
    fn ordered_uses_signing_order_not_list_position() {
        let c = collection(
            SigningMode::OrderedGroupSign,
            vec![
                signer(SignerStatus::Sent, 2),
                signer(SignerStatus::Sent, 1),
                signer(SignerStatus::Signed, 0),
            ],
        );
        assert_eq!(names(select_candidate_signers(&c)), vec!["signer-1"]);
    }

    #[test]
    fn ordered_does_not_skip_past_a_signer_that_cannot_be_reminded() {
        let c = collection(
            SigningMode::OrderedGroupSign,
            vec![
                signer(SignerStatus::Signed, 0),
                signer(SignerStatus::Created, 1),
                signer(SignerStatus::Sent, 2),
            ],
        );
        assert!(select_candidate_signers(&c).is_empty());

        let mut no_channel = signer(SignerStatus::Sent, 0);
        no_channel.sending_method = None;
        let c = collection(
            SigningMode::OrderedGroupSign,
            vec![no_channel, signer(SignerStatus::Sent, 1)],
        );
        assert!(select_candidate_signers(&c).is_empty());
    }

    #[test]
    fn ordered_with_every_signer_done_gives_nothing() {
        let c = collection(
            SigningMode::OrderedGroupSign,
            vec![
                signer(SignerStatus::Signed, 0),
                signer(SignerStatus::Rejected, 1),
            ],
        );
        assert!(select_candidate_signers(&c).is_empty());
    }

    #[test]
    fn group_selects_every_awaiting_signer() {
        let c = collection(
            SigningMode::GroupSign,
            vec![
                signer(SignerStatus::Viewed, 0),
                signer(SignerStatus::Signed, 1),
                signer(SignerStatus::Sent, 2),
                signer(SignerStatus::Created, 3),
                signer(SignerStatus::Rejected, 4),
            ],
        );
        assert_eq!(
            names(select_candidate_signers(&c)),
            vec!["signer-0", "signer-2"]
        );
    }

    #[test]
    fn single_sign_behaves_like_group() {
        let c = collection(SigningMode::SingleSign, vec![signer(SignerStatus::Viewed, 0)]);
        assert_eq!(select_candidate_signers(&c).len(), 1);
    }

    #[test]
    fn signers_without_channel_are_excluded() {
        let mut in_person = signer(SignerStatus::Sent, 0);
        in_person.sending_method = None;
        let c = collection(
            SigningMode::GroupSign,
            vec![in_person, signer(SignerStatus::Sent, 1)],
        );
        assert_eq!(names(select_candidate_signers(&c)), vec!["signer-1"]);
    }

    #[test]
    fn no_candidates_without_signers_or_notifications() {
        let c = collection(SigningMode::GroupSign, vec![]);
        assert!(select_candidate_signers(&c).is_empty());

        let mut c = collection(SigningMode::GroupSign, vec![signer(SignerStatus::Sent, 0)]);
        c.notifications.should_send_for_signing = false;
        assert!(select_candidate_signers(&c).is_empty());
    }
}
