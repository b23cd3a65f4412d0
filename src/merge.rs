use std::collections::HashMap;

use crate::types::{Quote, QuoteId, RemoteRecord, DEFAULT_CATEGORY};

/// Result of one merge pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub quotes: Vec<Quote>,
    pub notifications: Vec<String>,
    pub added: usize,
    pub updated: usize,
}

impl MergeOutcome {
    pub fn changed(&self) -> bool {
        self.added > 0 || self.updated > 0
    }
}

pub fn update_notification(text: &str) -> String {
    format!("Quote updated from server: \"{text}\"")
}

/// Reconcile `local` against a remote snapshot.
///
/// Unknown remote ids are appended under [`DEFAULT_CATEGORY`] without a
/// notification. Known ids take the remote title when it differs, keep their
/// local category and yield one notification. Local quotes absent from the
/// snapshot are untouched.
pub fn merge(local: &[Quote], remote: &[RemoteRecord]) -> MergeOutcome {
    let mut quotes = local.to_vec();
    let mut positions: HashMap<QuoteId, Vec<usize>> = HashMap::new();
    for (i, quote) in quotes.iter().enumerate() {
        positions.entry(quote.id.clone()).or_default().push(i);
    }

    let mut outcome = MergeOutcome::default();
    for record in remote {
        match positions.get(&record.id) {
            None => {
                positions.insert(record.id.clone(), vec![quotes.len()]);
                quotes.push(Quote {
                    id: record.id.clone(),
                    text: record.title.clone(),
                    category: DEFAULT_CATEGORY.to_string(),
                });
                outcome.added += 1;
            }
            Some(slots) => {
                // Imports may have left several quotes under one id; all of them follow the remote.
                let mut touched = false;
                for &i in slots {
                    if quotes[i].text != record.title {
                        quotes[i].text = record.title.clone();
                        touched = true;
                    }
                }
                if touched {
                    outcome.updated += 1;
                    outcome
                        .notifications
                        .push(update_notification(&record.title));
                }
            }
        }
    }

    outcome.quotes = quotes;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: &str, text: &str, category: &str) -> Quote {
        Quote {
            id: QuoteId::from(id),
            text: text.to_string(),
            category: category.to_string(),
        }
    }

    fn remote(id: &str, title: &str) -> RemoteRecord {
        RemoteRecord {
            id: QuoteId::from(id),
            title: title.to_string(),
        }
    }

    #[test]
    fn remote_text_wins_and_category_is_kept() {
        let local = vec![quote("1", "A", "Work")];
        let outcome = merge(&local, &[remote("1", "B")]);

        assert_eq!(outcome.quotes, vec![quote("1", "B", "Work")]);
        assert_eq!(outcome.notifications.len(), 1);
        assert!(outcome.notifications[0].contains('B'));
        assert_eq!(outcome.updated, 1);
        assert_eq!(outcome.added, 0);
    }

    #[test]
    fn unknown_remote_record_is_appended_silently() {
        let outcome = merge(&[], &[remote("5", "New")]);

        assert_eq!(outcome.quotes, vec![quote("5", "New", "Uncategorized")]);
        assert!(outcome.notifications.is_empty());
        assert_eq!(outcome.added, 1);
    }

    #[test]
    fn identical_records_change_nothing() {
        let local = vec![quote("1", "A", "Work")];
        let outcome = merge(&local, &[remote("1", "A")]);

        assert_eq!(outcome.quotes, local);
        assert!(!outcome.changed());
        assert!(outcome.notifications.is_empty());
    }

    #[test]
    fn local_only_quotes_are_left_alone_and_order_is_kept() {
        let local = vec![quote("x", "Mine", "Life"), quote("1", "A", "Work")];
        let outcome = merge(&local, &[remote("2", "Two"), remote("1", "A")]);

        assert_eq!(
            outcome.quotes,
            vec![
                quote("x", "Mine", "Life"),
                quote("1", "A", "Work"),
                quote("2", "Two", "Uncategorized"),
            ]
        );
    }

    #[test]
    fn second_pass_with_same_snapshot_is_a_no_op() {
        let local = vec![quote("1", "A", "Work"), quote("7", "Local", "Life")];
        let snapshot = vec![remote("1", "B"), remote("3", "C"), remote("4", "D")];

        let first = merge(&local, &snapshot);
        assert!(first.changed());

        let second = merge(&first.quotes, &snapshot);
        assert!(!second.changed());
        assert!(second.notifications.is_empty());
        assert_eq!(second.quotes, first.quotes);
    }

    #[test]
    fn duplicated_local_ids_all_follow_the_remote() {
        let local = vec![quote("1", "A", "Work"), quote("1", "Other", "Life")];
        let outcome = merge(&local, &[remote("1", "B")]);

        assert_eq!(
            outcome.quotes,
            vec![quote("1", "B", "Work"), quote("1", "B", "Life")]
        );
        assert_eq!(outcome.notifications.len(), 1);
        assert_eq!(merge(&outcome.quotes, &[remote("1", "B")]).updated, 0);
    }
}
