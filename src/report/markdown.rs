use crate::estimator::Prediction;

/// Width of the confidence bar, in cells
const BAR_WIDTH: usize = 10;

/// Markdown formatter for predictions
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format prediction as markdown
    pub fn format(prediction: &Prediction) -> String {
        let result = &prediction.result;
        let mut md = String::with_capacity(512);

        md.push_str("# Shelf Life Prediction\n\n");
        md.push_str(&format!("**Food Item:** {}  \n", prediction.food_name));
        md.push_str(&format!("**Category:** {}\n\n", result.category));

        let unit = if result.days == 1 { "day" } else { "days" };
        md.push_str(&format!("**Days Remaining:** {} {}\n\n", result.days, unit));

        md.push_str(&format!(
            "**Confidence Level:** {}% `{}`\n\n",
            result.confidence,
            confidence_bar(result.confidence)
        ));

        md.push_str("## Storage Tips\n\n");
        md.push_str(&format!("{}\n", result.advisory));

        md
    }
}

/// Render confidence as a fixed-width bar, e.g. `█████████░` for 90%
pub fn confidence_bar(confidence: u8) -> String {
    let filled = (usize::from(confidence.min(100)) * BAR_WIDTH + 50) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH - filled));
    bar
}
