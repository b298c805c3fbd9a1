use super::{draw_row_labels, label_area_width, row_position, Area, FONT};
use crate::analysis::LunchStatistics;
use crate::model::Visit;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// First day of every month between `first` and `last`, inclusive
pub fn month_starts(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let mut starts = Vec::new();
    let mut current = first.with_day(1);
    while let Some(start) = current {
        if start > last {
            break;
        }
        if start >= first {
            starts.push(start);
        }
        current = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        };
    }
    starts
}

/// Tick dates for the time axis: month starts in range, or the first
/// visit when the range holds no first-of-month day
pub fn month_ticks(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let starts = month_starts(first, last);
    if starts.is_empty() {
        vec![first]
    } else {
        starts
    }
}

/// Sorted one-day x-ranges of every visit to `place`
pub fn day_marks(visits: &[Visit], place: &str) -> Vec<(f64, f64)> {
    let mut days: Vec<NaiveDate> = visits
        .iter()
        .filter(|v| v.place == place)
        .map(|v| v.date)
        .collect();
    days.sort();
    days.into_iter()
        .map(|day| {
            let x = day_number(day);
            (x, x + 1.0)
        })
        .collect()
}

/// One row per place, a one-day mark for every visit
pub fn draw_occurrences(area: &Area, stats: &LunchStatistics) -> Result<()> {
    let ranking = &stats.ranking;
    let rows = ranking.len();
    let y_max = rows.max(1) as f64;

    let first = stats.visits.iter().map(|v| v.date).min();
    let last = stats.visits.iter().map(|v| v.date).max();
    let (x_min, x_max) = match (first, last) {
        (Some(first), Some(last)) => (day_number(first), day_number(last) + 1.0),
        _ => (0.0, 1.0),
    };

    let names: Vec<&str> = ranking.iter().map(|p| p.place.as_str()).collect();

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption("Occurrences", (FONT, 20))
        .x_label_area_size(45)
        .y_label_area_size(label_area_width(names.iter().copied()))
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(0)
        .draw()?;

    let ticks = match (first, last) {
        (Some(first), Some(last)) => month_ticks(first, last.succ_opt().unwrap_or(last)),
        _ => Vec::new(),
    };

    chart.draw_series(ticks.iter().map(|day| {
        let x = day_number(*day);
        PathElement::new(vec![(x, 0.0), (x, y_max)], BLACK.mix(0.15).stroke_width(1))
    }))?;

    for (rank, place) in ranking.iter().enumerate() {
        let row = row_position(rank, rows);
        let color = stats.colors.color_of(&place.place);

        let marks = day_marks(&stats.visits, &place.place);
        chart.draw_series(marks.into_iter().map(|(start, end)| {
            Rectangle::new([(start, row + 0.1), (end, row + 0.9)], color.filled())
        }))?;
    }

    let (base_x, base_y) = area.get_base_pixel();
    let tick_style = TextStyle::from((FONT, 12).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for day in &ticks {
        let (x, y) = chart.backend_coord(&(day_number(*day), 0.0));
        area.draw(&Text::new(
            day.format("%b").to_string(),
            (x - base_x, y - base_y + 6),
            tick_style.clone(),
        ))?;
    }

    let anchors: Vec<(i32, i32)> = (0..rows)
        .map(|rank| chart.backend_coord(&(x_min, row_position(rank, rows) + 0.5)))
        .collect();
    draw_row_labels(area, &anchors, &names)
}
