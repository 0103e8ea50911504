//! Formatting utilities used for CLI and log outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI escape sequences, leaving only the visible characters.
/// Used wherever column widths are computed on colored text.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Format a net amount with an explicit sign.
///
/// es: +500 oppure -150; zero → nessun segno
pub fn format_net(net: i64, want_sign: bool) -> String {
    let sign = if net > 0 && want_sign {
        "+"
    } else if net < 0 {
        "-"
    } else {
        ""
    };

    // unsigned_abs: i64::MIN has no i64 absolute value
    format!("{}{}", sign, net.unsigned_abs())
}
