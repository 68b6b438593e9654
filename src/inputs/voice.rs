//! Fixed-pattern parser for spoken-style commands.
//!
//! Recognizes `add (income|expense) <amount> [for <description>]` anywhere
//! in the utterance, case-insensitive. The amount must be plain digits with
//! an optional one- or two-digit decimal part; trailing words not preceded
//! by `for` are ignored.

use thiserror::Error;

use crate::domain::TransactionKind;
use crate::inputs::EntryDraft;

/// Hint echoed back to the user when an utterance cannot be parsed.
pub const USAGE_HINT: &str =
    "Try: \"Add expense 20 for lunch\" or \"Add income 50 for salary\".";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoiceParseError {
    #[error("Could not parse the command. {USAGE_HINT}")]
    Unrecognized,
    #[error("Amount must be greater than zero.")]
    ZeroAmount,
}

/// Parses one utterance into an entry draft.
pub fn parse_utterance(utterance: &str) -> Result<EntryDraft, VoiceParseError> {
    let lowered = utterance.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    for start in 0..tokens.len() {
        if tokens[start] != "add" {
            continue;
        }
        let Some(kind) = tokens.get(start + 1).copied().and_then(parse_kind) else {
            continue;
        };
        let Some(amount) = tokens.get(start + 2).copied().and_then(parse_amount) else {
            continue;
        };
        if amount <= 0.0 {
            return Err(VoiceParseError::ZeroAmount);
        }
        let description = match tokens.get(start + 3) {
            Some(&"for") if tokens.len() > start + 4 => Some(tokens[start + 4..].join(" ")),
            _ => None,
        };
        return Ok(EntryDraft::new(kind, amount, description));
    }

    Err(VoiceParseError::Unrecognized)
}

fn parse_kind(word: &str) -> Option<TransactionKind> {
    match word {
        "income" => Some(TransactionKind::Income),
        "expense" => Some(TransactionKind::Expense),
        _ => None,
    }
}

/// Accepts only `digits` or `digits.d` / `digits.dd`, mirroring the fixed
/// pattern the voice UI always used.
fn parse_amount(word: &str) -> Option<f64> {
    let (whole, fraction) = match word.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (word, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        let valid_len = matches!(fraction.len(), 1 | 2);
        if !valid_len || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    word.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expense_with_description() {
        let draft = parse_utterance("Add expense 25 for snacks").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, 25.0);
        assert_eq!(draft.description.as_deref(), Some("snacks"));
    }

    #[test]
    fn parses_income_without_for_keyword() {
        // "salary" is not introduced by `for`, so it is ignored and the
        // kind default applies later.
        let draft = parse_utterance("add income 45 salary").unwrap();
        assert_eq!(draft.kind, TransactionKind::Income);
        assert_eq!(draft.amount, 45.0);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn parses_decimal_amounts() {
        let draft = parse_utterance("add expense 12.50 for lunch out").unwrap();
        assert_eq!(draft.amount, 12.5);
        assert_eq!(draft.description.as_deref(), Some("lunch out"));
    }

    #[test]
    fn finds_command_mid_utterance() {
        let draft = parse_utterance("please add expense 9 for parking").unwrap();
        assert_eq!(draft.amount, 9.0);
    }

    #[test]
    fn rejects_zero_amount() {
        assert_eq!(
            parse_utterance("add expense 0 for nothing"),
            Err(VoiceParseError::ZeroAmount)
        );
    }

    #[test]
    fn rejects_malformed_amounts() {
        for utterance in [
            "add expense twenty for lunch",
            "add expense 12.345 for fuel",
            "add expense -5 for lunch",
            "add expense .5 for gum",
        ] {
            assert_eq!(
                parse_utterance(utterance),
                Err(VoiceParseError::Unrecognized),
                "should reject: {utterance}"
            );
        }
    }

    #[test]
    fn rejects_unrelated_speech() {
        assert_eq!(
            parse_utterance("what is the weather today"),
            Err(VoiceParseError::Unrecognized)
        );
    }
}
