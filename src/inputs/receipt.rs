//! Receipt-photo entry path. The image itself is never read; the capture
//! keeps the file name as provenance and the amount comes from the user.

use std::path::Path;

use crate::domain::TransactionKind;
use crate::inputs::EntryDraft;

/// Description recorded for a captured receipt file.
pub fn photo_description(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Receipt Photo: {name}")
}

/// Builds an expense draft for a receipt file once the amount is known.
pub fn draft_from_photo(path: &Path, amount: f64) -> EntryDraft {
    EntryDraft::new(
        TransactionKind::Expense,
        amount,
        Some(photo_description(path)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn description_uses_the_file_name_only() {
        let path = PathBuf::from("/tmp/photos/receipt-0412.jpg");
        assert_eq!(photo_description(&path), "Receipt Photo: receipt-0412.jpg");
    }

    #[test]
    fn draft_is_always_an_expense() {
        let draft = draft_from_photo(Path::new("groceries.png"), 18.75);
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, 18.75);
        assert_eq!(
            draft.description.as_deref(),
            Some("Receipt Photo: groceries.png")
        );
    }
}
