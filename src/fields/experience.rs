//! Total experience from DATE entity spans.

use chrono::NaiveDate;

use crate::dates::parse_flexible;
use crate::model::{AnnotatedText, EntityLabel};

/// Whole years between the earliest and latest parseable date mention.
///
/// DATE entities of four characters or fewer (bare years among them) are
/// ignored, as are mentions the date parser rejects. Fewer than two valid
/// dates means no measurable span, which is 0, not an error.
pub fn total_experience(annotated: &AnnotatedText) -> i64 {
    let mut dates: Vec<NaiveDate> = annotated
        .entities_with(EntityLabel::Date)
        .filter(|e| e.text.len() > 4)
        .filter_map(|e| parse_flexible(&e.text))
        .collect();

    if dates.len() < 2 {
        return 0;
    }

    dates.sort_unstable();
    (dates[dates.len() - 1] - dates[0]).num_days() / 365
}
