use crate::cli::output;

const HELP_LINES: &[&str] = &[
    "Commands:",
    "  add <income|expense> <amount> [description...]   record a transaction",
    "  voice <utterance...>   parse a spoken-style command, e.g. `voice add expense 20 for lunch`",
    "  receipt <path> [amount]   record an expense from a receipt photo file",
    "  list      show all transactions in entry order",
    "  summary   show income, expense, and profit/loss totals",
    "  delete <n>   delete the n-th listed transaction",
    "  help      show this help",
    "  exit      leave the shell (also: quit)",
];

pub fn print_help() {
    for line in HELP_LINES {
        output::line(line);
    }
}
