//! Splitting a padded series into drawable runs.
//!
//! Long stretches of zero-play days would otherwise render as a line sitting
//! on the baseline, overstating how continuously a track was played. Zero
//! runs of two or more days become gaps between segments instead; a single
//! zero is kept on each side of a segment as a taper point, so the area fill
//! closes cleanly at the baseline.

use crate::models::DataPoint;

/// Split a padded series into maximal contiguous runs around its positive
/// values.
///
/// Each returned segment covers consecutive calendar days and contains at
/// most one zero-play boundary day per side. An interior run of two or more
/// zero days always separates two segments. All-zero input yields no
/// segments.
pub fn segments(padded: &[DataPoint]) -> Vec<Vec<DataPoint>> {
    let mut out: Vec<Vec<DataPoint>> = Vec::new();
    let mut current: Option<Vec<DataPoint>> = None;
    let mut zero_run = 0usize;
    let mut prev: Option<DataPoint> = None;

    for (i, &point) in padded.iter().enumerate() {
        if point.plays > 0 {
            let opening = current.is_none();
            let segment = current.get_or_insert_with(Vec::new);

            // Exactly one taper zero before this value: the day immediately
            // preceding it, whether the segment just opened or a lone zero
            // sits inside it.
            if opening || zero_run > 0 {
                if let Some(zero) = prev {
                    segment.push(zero);
                }
            }

            segment.push(point);
            zero_run = 0;
        } else {
            zero_run += 1;

            if zero_run >= 2 {
                // Two zeros in a row end the open segment, keeping only the
                // first zero as its trailing taper.
                if let Some(mut segment) = current.take() {
                    if let Some(zero) = prev {
                        segment.push(zero);
                    }
                    out.push(segment);
                }
            } else if i == padded.len() - 1 {
                // A single trailing zero at the end of the window still
                // belongs to the open segment, closing its right edge.
                if let Some(segment) = current.as_mut() {
                    segment.push(point);
                }
            }
        }

        prev = Some(point);
    }

    if let Some(segment) = current {
        out.push(segment);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{add_days, parse_ymd};
    use chrono::NaiveDate;

    /// Padded series starting 2022-05-06, one value per consecutive day.
    fn padded(plays: &[u32]) -> Vec<DataPoint> {
        let start = parse_ymd("2022-05-06").unwrap();
        plays
            .iter()
            .enumerate()
            .map(|(i, &p)| DataPoint::new(add_days(start, i as i64), p))
            .collect()
    }

    fn play_values(segment: &[DataPoint]) -> Vec<u32> {
        segment.iter().map(|p| p.plays).collect()
    }

    #[test]
    fn interior_zero_run_splits_with_taper_zeros() {
        // 4 0 0 0 6: the three-zero run becomes a gap.
        let segs = segments(&padded(&[4, 0, 0, 0, 6]));
        assert_eq!(segs.len(), 2);
        assert_eq!(play_values(&segs[0]), vec![4, 0]);
        assert_eq!(play_values(&segs[1]), vec![0, 6]);
    }

    #[test]
    fn single_interior_zero_stays_inside_the_segment() {
        let segs = segments(&padded(&[4, 0, 6]));
        assert_eq!(segs.len(), 1);
        assert_eq!(play_values(&segs[0]), vec![4, 0, 6]);
    }

    #[test]
    fn at_most_one_leading_taper_zero() {
        let segs = segments(&padded(&[0, 0, 0, 5, 2]));
        assert_eq!(segs.len(), 1);
        assert_eq!(play_values(&segs[0]), vec![0, 5, 2]);
    }

    #[test]
    fn trailing_single_zero_closes_the_right_edge() {
        let segs = segments(&padded(&[3, 1, 0]));
        assert_eq!(segs.len(), 1);
        assert_eq!(play_values(&segs[0]), vec![3, 1, 0]);
    }

    #[test]
    fn trailing_double_zero_keeps_only_one_taper() {
        let segs = segments(&padded(&[3, 1, 0, 0]));
        assert_eq!(segs.len(), 1);
        assert_eq!(play_values(&segs[0]), vec![3, 1, 0]);
    }

    #[test]
    fn all_zeros_yield_no_segments() {
        assert!(segments(&padded(&[0, 0, 0, 0])).is_empty());
        assert!(segments(&[]).is_empty());
    }

    #[test]
    fn no_zeros_yield_one_full_segment() {
        let segs = segments(&padded(&[2, 5, 1]));
        assert_eq!(segs.len(), 1);
        assert_eq!(play_values(&segs[0]), vec![2, 5, 1]);
    }

    #[test]
    fn segment_dates_are_contiguous() {
        let input = padded(&[0, 4, 0, 0, 2, 0, 1, 0, 0, 0, 8, 8, 0]);
        for segment in segments(&input) {
            for pair in segment.windows(2) {
                assert_eq!(pair[1].date, add_days(pair[0].date, 1));
            }
        }
    }

    #[test]
    fn concatenated_segments_reconstruct_positive_runs() {
        let input = padded(&[0, 4, 0, 0, 2, 0, 1, 0, 0, 0, 8, 8, 0]);
        let segs = segments(&input);

        let positives_in_segments: Vec<NaiveDate> = segs
            .iter()
            .flatten()
            .filter(|p| p.plays > 0)
            .map(|p| p.date)
            .collect();
        let positives_in_input: Vec<NaiveDate> = input
            .iter()
            .filter(|p| p.plays > 0)
            .map(|p| p.date)
            .collect();
        assert_eq!(positives_in_segments, positives_in_input);

        // No segment contains an interior zero run of length 2.
        for segment in &segs {
            for pair in segment.windows(2) {
                assert!(
                    pair[0].plays > 0 || pair[1].plays > 0,
                    "two consecutive zeros inside a segment"
                );
            }
        }
    }
}
