#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
///
/// Amounts (`$1,234.56`, `-3.0%`, plain numbers) are right-aligned.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_cell(&truncate_text(header, *width), *width, false, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.trim_end().chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_like_amount(&truncated);
                let colored = if options.color {
                    colorize_status(&truncated)
                } else {
                    truncated
                };
                pad_cell(&colored, *width, numeric, options.color)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_like_amount(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '$' | '%'))
}

fn pad_cell(value: &str, width: usize, right_align: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).chars().count()
    } else {
        value.chars().count()
    };
    let pad = " ".repeat(width.saturating_sub(plain_len));
    if right_align {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Color reconciliation and payment states.
fn colorize_status(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let code = match lower.as_str() {
        "balanced" | "cuadrada" | "pagado" | "active" | "current" => Some("32"),
        "overage" | "sobrante" | "pendiente" | "no_count_yet" => Some("33"),
        "shortage" | "faltante" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn amounts_are_right_aligned() {
        let rows = vec![
            vec!["ventas_hoy".to_string(), "$15,230.50".to_string()],
            vec!["cambio_vs_ayer".to_string(), "+12.5%".to_string()],
        ];
        let table = render_entity_table(&["metric", "value"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("$15,230.50"));
        assert!(lines[3].ends_with("    +12.5%"));
    }

    #[test]
    fn long_cells_are_truncated_to_fit() {
        let rows = vec![vec![
            "2026-02-14".to_string(),
            "Compra de garrafones y hielo para barra".to_string(),
        ]];
        let table = render_entity_table(
            &["fecha", "descripcion"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let last = table.lines().last().unwrap();
        assert!(last.ends_with('…'));
        assert!(last.chars().count() <= 30);
    }

    #[test]
    fn status_words_are_colored() {
        assert_eq!(colorize_status("FALTANTE"), "\u{1b}[31mFALTANTE\u{1b}[0m");
        assert_eq!(colorize_status("KOI"), "KOI");
        assert_eq!(strip_ansi(&colorize_status("balanced")), "balanced");
    }

    #[test]
    fn words_with_digits_are_not_amounts() {
        assert!(looks_like_amount("-$50.00"));
        assert!(!looks_like_amount("n/a"));
        assert!(!looks_like_amount("Sucursal 2"));
        assert!(!looks_like_amount("-"));
    }
}
