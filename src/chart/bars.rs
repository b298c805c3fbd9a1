use super::{draw_row_labels, label_area_width, row_position, Area, FONT};
use crate::analysis::LunchStatistics;
use crate::error::Result;
use crate::stats::PlaceCount;
use plotters::prelude::*;

/// Headroom past the longest bar
const X_MARGIN: f64 = 1.05;

/// Right edges of the count axis and of the percentage axis
///
/// The percentage edge is the count edge as a share of every visit, not of
/// the longest bar.
pub fn axis_bounds(ranking: &[PlaceCount], total: usize) -> (f64, f64) {
    let x_max = match ranking.first() {
        Some(top) => top.count as f64 * X_MARGIN,
        None => 1.0,
    };
    let percentage_max = if total > 0 {
        x_max / total as f64 * 100.0
    } else {
        100.0
    };
    (x_max, percentage_max)
}

/// Horizontal bar per place, most visited at the top, with a secondary
/// axis giving the share of all visits
pub fn draw_place_distribution(area: &Area, stats: &LunchStatistics) -> Result<()> {
    let ranking = &stats.ranking;
    let rows = ranking.len();
    let total = stats.total_visits();

    let (x_max, percentage_max) = axis_bounds(ranking, total);
    let y_max = rows.max(1) as f64;

    let names: Vec<&str> = ranking.iter().map(|p| p.place.as_str()).collect();

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(45)
        .top_x_label_area_size(45)
        .y_label_area_size(label_area_width(names.iter().copied()))
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?
        .set_secondary_coord(0f64..percentage_max, 0f64..y_max);

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("Overall count")
        .axis_desc_style((FONT, 15))
        .label_style((FONT, 12))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_labels(0)
        .x_desc("Overall percentage")
        .draw()?;

    chart.draw_series(ranking.iter().enumerate().map(|(rank, place)| {
        let row = row_position(rank, rows);
        let color = stats.colors.color_of(&place.place);
        Rectangle::new(
            [(0.0, row + 0.1), (place.count as f64, row + 0.9)],
            color.filled(),
        )
    }))?;

    let anchors: Vec<(i32, i32)> = (0..rows)
        .map(|rank| chart.backend_coord(&(0.0, row_position(rank, rows) + 0.5)))
        .collect();
    draw_row_labels(area, &anchors, &names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(place: &str, count: usize) -> PlaceCount {
        PlaceCount {
            place: place.to_string(),
            count,
            percentage: 0.0,
        }
    }

    #[test]
    fn test_axis_bounds_use_grand_total() {
        let ranking = vec![count("Cafe", 4), count("Bistro", 1)];
        let (x_max, percentage_max) = axis_bounds(&ranking, 5);
        assert!((x_max - 4.2).abs() < 1e-9);
        assert!((percentage_max - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_bounds_single_place() {
        let (x_max, percentage_max) = axis_bounds(&[count("Cafe", 10)], 10);
        assert!((x_max - 10.5).abs() < 1e-9);
        assert!((percentage_max - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_bounds_empty() {
        assert_eq!(axis_bounds(&[], 0), (1.0, 100.0));
    }
}
