//! Command handlers. Each mutation ends by re-rendering the running totals,
//! mirroring how the tracker refreshes its view after every change.

use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use colored::Colorize;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::{io, output};
use crate::domain::TransactionKind;
use crate::inputs::receipt::{draft_from_photo, photo_description};
use crate::inputs::voice::parse_utterance;
use crate::inputs::EntryDraft;

pub fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: add <income|expense> <amount> [description...]".into(),
        ));
    }
    let kind = parse_kind(args[0])?;
    let amount = parse_amount_arg(args[1])?;
    let description = (args.len() > 2).then(|| args[2..].join(" "));

    let txn = EntryDraft::new(kind, amount, description).record(&mut context.ledger)?;
    io::print_success(format!(
        "Recorded {} of {}: {}",
        txn.kind,
        format_amount(context, txn.amount),
        txn.description
    ));
    render_summary(context);
    Ok(())
}

pub fn handle_voice(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: voice <utterance...>".into(),
        ));
    }
    let utterance = args.join(" ");
    let draft = parse_utterance(&utterance)?;
    let txn = draft.record(&mut context.ledger)?;
    io::print_success(format!(
        "Added {} of {}: {}",
        txn.kind,
        format_amount(context, txn.amount),
        txn.description
    ));
    render_summary(context);
    Ok(())
}

pub fn handle_receipt(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw_path) = args.first().copied() else {
        return Err(CommandError::InvalidArguments(
            "usage: receipt <path> [amount]".into(),
        ));
    };
    let path = PathBuf::from(raw_path);
    let description = photo_description(&path);

    let amount = match args.get(1) {
        Some(raw) => parse_amount_arg(raw)?,
        None if context.mode() == CliMode::Interactive => {
            let proceed = io::confirm_action(
                &format!("Add an expense \"{description}\" and enter the amount next?"),
                true,
            )?;
            if !proceed {
                io::print_info("Receipt not added.");
                return Ok(());
            }
            let raw = io::prompt_text("Amount for this receipt")?;
            parse_amount_arg(raw.trim())?
        }
        None => {
            return Err(CommandError::InvalidArguments(
                "receipt amount is required in script mode: receipt <path> <amount>".into(),
            ))
        }
    };

    let txn = draft_from_photo(&path, amount).record(&mut context.ledger)?;
    io::print_success(format!(
        "Expense added from receipt photo: {} ({})",
        txn.description,
        format_amount(context, txn.amount)
    ));
    render_summary(context);
    Ok(())
}

pub fn handle_list(context: &ShellContext) {
    let transactions = context.ledger.transactions();
    if transactions.is_empty() {
        io::print_info("No transactions recorded yet.");
        return;
    }
    for (index, txn) in transactions.iter().enumerate() {
        output::line(format!(
            "{:>3}. {} {:>12}  {}  ({})",
            index + 1,
            txn.kind.sign(),
            format_amount(context, txn.amount),
            txn.description,
            format_date(txn.date),
        ));
    }
}

pub fn handle_summary(context: &ShellContext) {
    render_summary(context);
}

pub fn handle_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: delete <n>".into()));
    };
    let position: usize = raw.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a listing number"))
    })?;
    if position == 0 {
        return Err(CommandError::InvalidArguments(
            "listing numbers start at 1".into(),
        ));
    }
    let index = position - 1;

    if context.mode() == CliMode::Interactive {
        if let Some(txn) = context.ledger.transactions().get(index) {
            let label = format!(
                "Delete transaction {position} ({} {})?",
                txn.description,
                format_amount(context, txn.amount)
            );
            if !io::confirm_action(&label, false)? {
                io::print_info("Nothing deleted.");
                return Ok(());
            }
        }
    }

    let removed = context.ledger.remove_at(index)?;
    io::print_success(format!(
        "Deleted transaction {position}: {}",
        removed.description
    ));
    render_summary(context);
    Ok(())
}

fn render_summary(context: &ShellContext) {
    let summary = context.ledger.summary();
    let standing = if summary.is_profit() {
        "Profit".green()
    } else {
        "Loss".red()
    };
    output::line(format!(
        "Income: {} | Expense: {} | {}: {}",
        format_amount(context, summary.total_income),
        format_amount(context, summary.total_expense),
        standing,
        format_amount(context, summary.net),
    ));
}

fn parse_kind(raw: &str) -> Result<TransactionKind, CommandError> {
    match raw.to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(CommandError::InvalidArguments(format!(
            "`{other}` is not a transaction kind (expected income or expense)"
        ))),
    }
}

fn parse_amount_arg(raw: &str) -> Result<f64, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a number")))
}

/// Two-decimal display rounding; amounts are stored unrounded.
fn format_amount(context: &ShellContext, amount: f64) -> String {
    format!("{}{:.2}", context.config.currency_symbol, amount)
}

fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%d %b %Y %H:%M").to_string()
}
