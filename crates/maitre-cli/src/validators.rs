//! Field validators for elicited booking input.
//!
//! Each validator owns one field and one prompt loop. Malformed input is
//! corrected locally by re-prompting; cancellation is propagated untouched
//! so the elicitation handler can translate it into a protocol-level
//! cancel.

use std::sync::LazyLock;

use regex::Regex;

use crate::console::{PromptError, PromptSource};

/// Shape check only; calendar validity is the server's concern.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid regex"));

/// Inclusive party size bounds.
const PARTY_SIZE_RANGE: std::ops::RangeInclusive<i64> = 1..=20;

/// Tokens treated as an affirmative confirmation answer.
const AFFIRMATIVE: [&str; 4] = ["y", "yes", "1", "true"];

/// Prompt until the input matches `YYYY-MM-DD`.
pub(crate) async fn collect_date(prompt: &dyn PromptSource) -> Result<String, PromptError> {
    loop {
        let input = prompt
            .read_line("Enter the date for your booking (YYYY-MM-DD): ")
            .await?;
        let input = input.trim();
        if DATE_SHAPE.is_match(input) {
            return Ok(input.to_string());
        }
        prompt.say("Please enter date in YYYY-MM-DD format.");
    }
}

/// Prompt until the input parses as an integer in [1, 20].
pub(crate) async fn collect_party_size(prompt: &dyn PromptSource) -> Result<i64, PromptError> {
    loop {
        let input = prompt.read_line("Enter the number of people (1-20): ").await?;
        match input.trim().parse::<i64>() {
            Ok(size) if PARTY_SIZE_RANGE.contains(&size) => return Ok(size),
            Ok(_) => prompt.say("Party size must be between 1 and 20."),
            Err(_) => prompt.say("Please enter a valid number."),
        }
    }
}

/// Ask for a yes/no confirmation, then optional notes if confirmed.
///
/// A single prompt, no re-prompt loop: anything outside the affirmative
/// token set counts as a refusal, and the notes prompt is only issued
/// after an affirmative answer.
pub(crate) async fn collect_confirmation(
    prompt: &dyn PromptSource,
) -> Result<(bool, String), PromptError> {
    prompt.say("");
    prompt.say("Booking confirmation required:");
    let answer = prompt
        .read_line("Do you want to confirm this booking? (y/n): ")
        .await?;
    let confirmed = AFFIRMATIVE.contains(&answer.trim().to_lowercase().as_str());

    let notes = if confirmed {
        prompt
            .read_line("Any special requests or notes? (optional): ")
            .await?
            .trim()
            .to_string()
    } else {
        String::new()
    };

    Ok((confirmed, notes))
}

/// Single generic prompt for requests no rule recognizes.
pub(crate) async fn collect_free_text(prompt: &dyn PromptSource) -> Result<String, PromptError> {
    prompt.say("Unknown request type. Please provide input:");
    let input = prompt.read_line("Your response: ").await?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedPrompt;

    #[tokio::test]
    async fn date_rejects_malformed_input_until_valid() {
        let prompt = ScriptedPrompt::new(["bad", "2024-13-1", "2024-07-01"]);
        let date = collect_date(&prompt).await.unwrap();

        assert_eq!(date, "2024-07-01");
        assert_eq!(
            prompt.count_lines("Please enter date in YYYY-MM-DD format."),
            2
        );
    }

    #[tokio::test]
    async fn date_accepts_shape_without_calendar_check() {
        // 13th month passes the shape check on purpose.
        let prompt = ScriptedPrompt::new(["2024-13-01"]);
        assert_eq!(collect_date(&prompt).await.unwrap(), "2024-13-01");
    }

    #[tokio::test]
    async fn date_trims_surrounding_whitespace() {
        let prompt = ScriptedPrompt::new(["  2025-01-02  "]);
        assert_eq!(collect_date(&prompt).await.unwrap(), "2025-01-02");
    }

    #[tokio::test]
    async fn date_propagates_cancellation() {
        let prompt = ScriptedPrompt::new(["nope"]).then_cancel();
        let result = collect_date(&prompt).await;
        assert!(matches!(result, Err(PromptError::Cancelled)));
    }

    #[tokio::test]
    async fn party_size_distinguishes_bad_number_from_out_of_range() {
        let prompt = ScriptedPrompt::new(["abc", "0", "25", "4"]);
        let size = collect_party_size(&prompt).await.unwrap();

        assert_eq!(size, 4);
        assert_eq!(prompt.count_lines("Please enter a valid number."), 1);
        assert_eq!(
            prompt.count_lines("Party size must be between 1 and 20."),
            2
        );
    }

    #[tokio::test]
    async fn party_size_accepts_bounds() {
        let prompt = ScriptedPrompt::new(["1"]);
        assert_eq!(collect_party_size(&prompt).await.unwrap(), 1);
        let prompt = ScriptedPrompt::new(["20"]);
        assert_eq!(collect_party_size(&prompt).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn party_size_propagates_cancellation_mid_loop() {
        let prompt = ScriptedPrompt::new(["abc"]).then_cancel();
        let result = collect_party_size(&prompt).await;
        assert!(matches!(result, Err(PromptError::Cancelled)));
    }

    #[tokio::test]
    async fn confirmation_collects_notes_when_affirmed() {
        let prompt = ScriptedPrompt::new(["y", "window seat"]);
        let (confirmed, notes) = collect_confirmation(&prompt).await.unwrap();

        assert!(confirmed);
        assert_eq!(notes, "window seat");
    }

    #[tokio::test]
    async fn confirmation_skips_notes_when_refused() {
        let prompt = ScriptedPrompt::new(["n"]);
        let (confirmed, notes) = collect_confirmation(&prompt).await.unwrap();

        assert!(!confirmed);
        assert_eq!(notes, "");
        assert!(
            !prompt
                .transcript()
                .iter()
                .any(|l| l.contains("special requests")),
            "notes prompt must not be issued after a refusal"
        );
    }

    #[tokio::test]
    async fn confirmation_accepts_all_affirmative_tokens() {
        for token in ["y", "YES", "1", "True"] {
            let prompt = ScriptedPrompt::new([token, ""]);
            let (confirmed, _) = collect_confirmation(&prompt).await.unwrap();
            assert!(confirmed, "token {token:?} should confirm");
        }
    }

    #[tokio::test]
    async fn confirmation_treats_anything_else_as_refusal() {
        for token in ["no", "maybe", "", "2"] {
            let prompt = ScriptedPrompt::new([token]);
            let (confirmed, _) = collect_confirmation(&prompt).await.unwrap();
            assert!(!confirmed, "token {token:?} should refuse");
        }
    }

    #[tokio::test]
    async fn free_text_accepts_anything() {
        let prompt = ScriptedPrompt::new(["blue"]);
        assert_eq!(collect_free_text(&prompt).await.unwrap(), "blue");
        assert_eq!(
            prompt.count_lines("Unknown request type. Please provide input:"),
            1
        );
    }
}
