use crate::model::aggregate::ScaleAggregate;
use crate::model::rater::RaterGroup;
use crate::render::ChartLabels;
use crate::report::format_mean_se;

/// Plain-text per-scale table: mean ± se (n) for every rater group.
pub fn render_scale_table(aggregates: &[ScaleAggregate], labels: &ChartLabels) -> String {
    let name_width = aggregates
        .iter()
        .map(|a| a.name.chars().count())
        .chain(std::iter::once("Scale".len()))
        .max()
        .unwrap_or(5);
    let short_width = aggregates
        .iter()
        .map(|a| a.short.chars().count())
        .chain(std::iter::once("Short".len()))
        .max()
        .unwrap_or(5);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<short_width$}  {:>5}",
        "Scale", "Short", "Items"
    ));
    for group in RaterGroup::ALL {
        out.push_str(&format!("  {:>18}", labels.group(group)));
    }
    out.push('\n');

    for agg in aggregates {
        out.push_str(&format!(
            "{:<name_width$}  {:<short_width$}  {:>5}",
            agg.name, agg.short, agg.items
        ));
        for group in RaterGroup::ALL {
            let stat = agg.stat(group);
            let cell = format!("{} ({})", format_mean_se(stat.mean, stat.se), stat.n);
            out.push_str(&format!("  {cell:>18}"));
        }
        out.push('\n');
    }
    out
}
