//! Terminal sessions around a [`PredictionForm`].

use std::io::{BufRead, Write};

use anyhow::Result;
use avocado_core::{FormField, FormObserver, PredictionForm, PredictionGateway, SubmitOutcome};
use tracing::{debug, info};

use crate::presentation::{
    SUBMIT_LABEL, TITLE, field_options, field_value, render_form, result_panel, submit_label,
};

/// Submits the form once and prints the form and the result panel.
pub async fn run_once<W: Write>(
    form: &mut PredictionForm,
    gateway: &dyn PredictionGateway,
    observer: &dyn FormObserver,
    out: &mut W,
) -> Result<SubmitOutcome> {
    write!(out, "{}", render_form(form.record()))?;
    writeln!(out, "\n[{}]", submit_label(form.is_loading()))?;
    out.flush()?;

    let outcome = form.submit(gateway, observer).await;
    print_result(form, out)?;
    Ok(outcome)
}

/// Prompts for every field, submits, and repeats while the user asks for
/// another prediction. Values carry over between rounds.
///
/// Ends cleanly when `input` reaches end of file.
pub async fn run_interactive<R: BufRead, W: Write>(
    form: &mut PredictionForm,
    gateway: &dyn PredictionGateway,
    observer: &dyn FormObserver,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "{TITLE}\n")?;
        if !prompt_fields(form, input, out)? {
            info!("input closed, leaving interactive session");
            return Ok(());
        }

        writeln!(out, "\n[{SUBMIT_LABEL}]")?;
        out.flush()?;
        let outcome = form.submit(gateway, observer).await;
        print_result(form, out)?;

        if let SubmitOutcome::Failed(_) = outcome {
            // The alert blocks until acknowledged.
            write!(out, "Appuyez sur Entrée pour continuer...")?;
            out.flush()?;
            if read_line(input)?.is_none() {
                return Ok(());
            }
        }

        write!(out, "\nNouvelle prédiction ? [o/N] ")?;
        out.flush()?;
        match read_line(input)?.as_deref().map(str::trim) {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "o" | "oui" | "y" | "yes") => {
                writeln!(out)?;
            }
            _ => return Ok(()),
        }
    }
}

/// Walks through every field. Returns `false` if input ended first.
fn prompt_fields<R: BufRead, W: Write>(
    form: &mut PredictionForm,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    for &field in FormField::all() {
        let options = field_options(field);
        loop {
            for (i, (label, _)) in options.iter().enumerate() {
                writeln!(out, "  {}) {label}", i + 1)?;
            }
            write!(
                out,
                "{} [{}]: ",
                field.label(),
                field_value(form.record(), field)
            )?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(false);
            };
            let answer = line.trim();
            if answer.is_empty() {
                break;
            }

            let raw = choice_by_number(&options, answer).unwrap_or(answer);
            match form.set_field(field, raw) {
                Ok(()) => break,
                Err(e) => {
                    debug!(%field, error = %e, "rejected field input");
                    writeln!(out, "  {e}")?;
                }
            }
        }
    }
    Ok(true)
}

/// Maps a 1-based option number to its wire value.
fn choice_by_number<'a>(
    options: &[(&str, &'a str)],
    answer: &str,
) -> Option<&'a str> {
    let index = answer.parse::<usize>().ok()?.checked_sub(1)?;
    options.get(index).map(|(_, value)| *value)
}

fn print_result<W: Write>(
    form: &PredictionForm,
    out: &mut W,
) -> Result<()> {
    if let Some(panel) = result_panel(form.prediction()) {
        writeln!(out, "\n{panel}")?;
    }
    out.flush()?;
    Ok(())
}

/// Reads one line without its line terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_numbers_are_one_based() {
        let options = [("Conventionnel", "conventional"), ("Biologique", "organic")];
        assert_eq!(choice_by_number(&options, "1"), Some("conventional"));
        assert_eq!(choice_by_number(&options, "2"), Some("organic"));
        assert_eq!(choice_by_number(&options, "0"), None);
        assert_eq!(choice_by_number(&options, "3"), None);
        assert_eq!(choice_by_number(&options, "organic"), None);
    }

    #[test]
    fn read_line_strips_terminators() {
        let mut input = std::io::Cursor::new("12\r\nabc\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("12"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("abc"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
