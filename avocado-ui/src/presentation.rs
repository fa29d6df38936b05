//! Text shown to the user. Hardcoded in French, as on the original page.

use std::fmt::Write as _;

use avocado_core::{DraftRecord, FormField, ProductType, Region};

pub const TITLE: &str = "Prédiction du Prix des Avocats";
pub const QUALITIES_HEADING: &str = "Qualités";
pub const QUANTITIES_HEADING: &str = "Quantités";
pub const RESULT_HEADING: &str = "Résultat de la Prédiction";
pub const SUBMIT_LABEL: &str = "Prédire le Prix";
pub const BUSY_LABEL: &str = "Prédiction en cours...";

/// Formats a predicted price with two decimals, e.g. `$142.50`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Result panel, or `None` while no prediction has succeeded.
pub fn result_panel(prediction: Option<f64>) -> Option<String> {
    prediction.map(|price| format!("{RESULT_HEADING}\nPrix prédit : {}", format_price(price)))
}

/// Label of the submit control for the current loading state.
pub fn submit_label(loading: bool) -> &'static str {
    if loading { BUSY_LABEL } else { SUBMIT_LABEL }
}

/// Current value of `field` as the form shows it.
pub fn field_value(
    record: &DraftRecord,
    field: FormField,
) -> String {
    match field {
        FormField::Quality1 => record.quality1.to_string(),
        FormField::Quality2 => record.quality2.to_string(),
        FormField::Quality3 => record.quality3.to_string(),
        FormField::SmallBags => record.small_bags.to_string(),
        FormField::LargeBags => record.large_bags.to_string(),
        FormField::XLargeBags => record.xlarge_bags.to_string(),
        FormField::ProductType => record.product_type.label().to_string(),
        FormField::Year => record.year.to_string(),
        FormField::Region => record.region.label().to_string(),
    }
}

/// `(label, wire value)` options for a choice field; empty for numeric ones.
pub fn field_options(field: FormField) -> Vec<(&'static str, &'static str)> {
    match field {
        FormField::ProductType => ProductType::all()
            .iter()
            .map(|t| (t.label(), t.as_str()))
            .collect(),
        FormField::Region => Region::catalog().collect(),
        _ => Vec::new(),
    }
}

/// Renders the whole form as text, grouped like the page.
pub fn render_form(record: &DraftRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "\n{QUALITIES_HEADING}");
    for field in [FormField::Quality1, FormField::Quality2, FormField::Quality3] {
        let _ = writeln!(out, "  {:<18}{}", field.label(), field_value(record, field));
    }
    let _ = writeln!(out, "\n{QUANTITIES_HEADING}");
    for field in [FormField::SmallBags, FormField::LargeBags, FormField::XLargeBags] {
        let _ = writeln!(out, "  {:<18}{}", field.label(), field_value(record, field));
    }
    let _ = writeln!(out);
    for field in [FormField::ProductType, FormField::Year, FormField::Region] {
        let _ = writeln!(out, "  {:<18}{}", field.label(), field_value(record, field));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn price_is_shown_with_two_decimals() {
        assert_eq!(format_price(142.5), "$142.50");
        assert_eq!(format_price(1.0), "$1.00");
        assert_eq!(format_price(7.456), "$7.46");
    }

    #[test]
    fn result_panel_only_after_a_prediction() {
        assert_eq!(result_panel(None), None);
        assert_eq!(
            result_panel(Some(142.50)).as_deref(),
            Some("Résultat de la Prédiction\nPrix prédit : $142.50")
        );
    }

    #[test]
    fn submit_label_follows_loading() {
        assert_eq!(submit_label(false), "Prédire le Prix");
        assert_eq!(submit_label(true), "Prédiction en cours...");
    }

    #[test]
    fn region_options_follow_catalog() {
        let options = field_options(FormField::Region);
        assert_eq!(options.len(), 12);
        assert_eq!(options[0], ("Atlanta", "Atlanta"));
        assert_eq!(options[11], ("West Tex/New Mexico", "WestTexNewMexico"));
        assert!(field_options(FormField::Year).is_empty());
    }

    #[test]
    fn rendered_form_shows_defaults() {
        let text = render_form(&DraftRecord::default());
        assert!(text.starts_with(TITLE));
        assert!(text.contains("Petits Sacs"));
        assert!(text.contains("Conventionnel"));
        assert!(text.contains("2024"));
        assert!(text.contains("Atlanta"));
    }
}
