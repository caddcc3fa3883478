//! Elicitation request classification.
//!
//! The server's advisory schema is deliberately ignored; the strategy is
//! chosen from the message text alone via an ordered rule table.

/// Input-collection strategy for one elicitation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseStrategy {
    /// Collect a `date` field in `YYYY-MM-DD` shape.
    BookingDate,
    /// Collect a `party_size` integer in [1, 20].
    PartySize,
    /// Collect `confirm` and `notes` fields.
    Confirmation,
    /// Collect a raw `response` string.
    FreeText,
}

fn wants_date(message: &str) -> bool {
    message.contains("date") && !message.contains("confirm")
}

fn wants_party_size(message: &str) -> bool {
    message.contains("party size") || message.contains("number of people")
}

fn wants_confirmation(message: &str) -> bool {
    message.contains("confirm")
}

/// Ordered rules, first match wins.
///
/// The order is behaviorally binding: a message mentioning both "date" and
/// "confirm" falls through the first rule's negative clause and routes to
/// confirmation with no date collected.
const RULES: [(fn(&str) -> bool, ResponseStrategy); 3] = [
    (wants_date, ResponseStrategy::BookingDate),
    (wants_party_size, ResponseStrategy::PartySize),
    (wants_confirmation, ResponseStrategy::Confirmation),
];

/// Select the strategy for a request message (case-insensitive).
pub(crate) fn classify(message: &str) -> ResponseStrategy {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|(predicate, _)| predicate(&message))
        .map_or(ResponseStrategy::FreeText, |&(_, strategy)| strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_message_selects_date() {
        assert_eq!(
            classify("Please enter the date for your booking:"),
            ResponseStrategy::BookingDate
        );
    }

    #[test]
    fn party_size_message_selects_party_size() {
        assert_eq!(
            classify("Please enter the party size for your booking:"),
            ResponseStrategy::PartySize
        );
        assert_eq!(
            classify("How many? Enter the number of people."),
            ResponseStrategy::PartySize
        );
    }

    #[test]
    fn confirm_message_selects_confirmation() {
        assert_eq!(
            classify("Please confirm your booking for 4 people on 2025-07-01."),
            ResponseStrategy::Confirmation
        );
    }

    #[test]
    fn date_plus_confirm_routes_to_confirmation() {
        // The negative clause on the date rule is load-bearing.
        assert_eq!(
            classify("Please confirm the date"),
            ResponseStrategy::Confirmation
        );
    }

    #[test]
    fn unrecognized_message_falls_back_to_free_text() {
        assert_eq!(
            classify("What is your favorite color?"),
            ResponseStrategy::FreeText
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            classify("PLEASE ENTER THE DATE"),
            ResponseStrategy::BookingDate
        );
        assert_eq!(classify("CONFIRM NOW"), ResponseStrategy::Confirmation);
    }
}
