//! Weekday and month pie grids

use super::palette::ColorMap;
use super::{Area, FONT};
use crate::analysis::LunchStatistics;
use crate::error::Result;
use crate::stats::{PeriodShares, SliceLabel};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const LABEL_HEIGHT: i32 = 28;

pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES.get(weekday as usize).copied().unwrap_or("")
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Polygon outline of a pie slice, angles in degrees counterclockwise
/// from three o'clock
pub fn wedge_points(center: (i32, i32), radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = ((end - start).abs() / 2.0).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);

    for step in 0..=steps {
        let angle = (start + (end - start) * step as f64 / steps as f64).to_radians();
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 - (radius * angle.sin()).round() as i32,
        ));
    }
    points
}

/// Start and end angle of every slice, closing the circle at 360 degrees
pub fn slice_angles(shares: &PeriodShares) -> Vec<(f64, f64)> {
    let total = shares.total();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    shares
        .slices
        .iter()
        .map(|slice| {
            let end = start + slice.percentage / total * 360.0;
            let angles = (start, end);
            start = end;
            angles
        })
        .collect()
}

fn draw_pie(cell: &Area, shares: &PeriodShares, colors: &ColorMap, label: &str) -> Result<()> {
    let (width, height) = cell.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);
    let pie_height = (height - LABEL_HEIGHT).max(0);
    let radius = (width.min(pie_height) as f64 / 2.0 - 8.0).max(0.0);
    let center = (width / 2, pie_height / 2 + 4);

    for (slice, (start, end)) in shares.slices.iter().zip(slice_angles(shares)) {
        let color = colors.label_color(&slice.label);
        cell.draw(&Polygon::new(
            wedge_points(center, radius, start, end),
            color.filled(),
        ))?;
    }

    let style = TextStyle::from((FONT, 14).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    cell.draw(&Text::new(
        label.to_string(),
        (width / 2, height - LABEL_HEIGHT / 2),
        style,
    ))?;
    Ok(())
}

fn draw_legend(cell: &Area, labels: &[SliceLabel], colors: &ColorMap) -> Result<()> {
    let (width, _) = cell.dim_in_pixel();
    let column_width = (width as i32 - 20) / 2;
    let style = TextStyle::from((FONT, 12).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (i, label) in labels.iter().enumerate() {
        let column = (i % 2) as i32;
        let row = (i / 2) as i32;
        let x = 10 + column * column_width;
        let y = 14 + row * 22;

        cell.draw(&Rectangle::new(
            [(x, y - 6), (x + 12, y + 6)],
            colors.label_color(label).filled(),
        ))?;
        cell.draw(&Text::new(label.to_string(), (x + 18, y), style.clone()))?;
    }
    Ok(())
}

fn draw_pie_grid<'a, F>(
    area: &Area<'a>,
    title: &str,
    grid: (usize, usize),
    shares: &[PeriodShares],
    colors: &ColorMap,
    period_label: F,
) -> Result<Vec<Area<'a>>>
where
    F: Fn(u32) -> &'static str,
{
    let area = area.titled(title, (FONT, 20))?;
    let cells = area.split_evenly(grid);

    for (cell, period) in cells.iter().zip(shares) {
        draw_pie(cell, period, colors, period_label(period.period))?;
    }

    Ok(cells)
}

/// Monday to Friday pies with a legend in the spare cell
pub fn draw_weekday_pies(area: &Area, stats: &LunchStatistics) -> Result<()> {
    let cells = draw_pie_grid(
        area,
        "Distribution by weekday",
        (2, 3),
        &stats.by_weekday,
        &stats.colors,
        weekday_name,
    )?;

    if let Some(legend_cell) = cells.get(stats.by_weekday.len()) {
        draw_legend(legend_cell, &stats.weekday_legend(), &stats.colors)?;
    }
    Ok(())
}

/// One pie per month in the observed range
pub fn draw_month_pies(area: &Area, stats: &LunchStatistics) -> Result<()> {
    draw_pie_grid(
        area,
        "Distribution by month",
        (3, 4),
        &stats.by_month,
        &stats.colors,
        month_name,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Slice;

    #[test]
    fn test_period_names() {
        assert_eq!(weekday_name(0), "Monday");
        assert_eq!(weekday_name(4), "Friday");
        assert_eq!(weekday_name(9), "");
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_slice_angles_close_the_circle() {
        let shares = PeriodShares {
            period: 0,
            visits: 3,
            slices: vec![
                Slice {
                    label: SliceLabel::Place("Cafe".to_string()),
                    percentage: 200.0 / 3.0,
                },
                Slice {
                    label: SliceLabel::Other,
                    percentage: 100.0 / 3.0,
                },
            ],
        };
        let angles = slice_angles(&shares);
        assert_eq!(angles.len(), 2);
        assert_eq!(angles[0].0, 0.0);
        assert!((angles[0].1 - 240.0).abs() < 1e-9);
        assert_eq!(angles[1].0, angles[0].1);
        assert!((angles[1].1 - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_period_has_no_slices() {
        let shares = PeriodShares {
            period: 3,
            visits: 0,
            slices: Vec::new(),
        };
        assert!(slice_angles(&shares).is_empty());
    }

    #[test]
    fn test_wedge_points() {
        let points = wedge_points((100, 100), 50.0, 0.0, 90.0);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (150, 100));
        // Counterclockwise on screen means upwards
        assert_eq!(*points.last().unwrap(), (100, 50));
        assert_eq!(points.len(), 47);
    }

    #[test]
    fn test_full_circle_wedge_closes() {
        let points = wedge_points((0, 0), 10.0, 0.0, 360.0);
        assert_eq!(points[1], *points.last().unwrap());
    }
}
