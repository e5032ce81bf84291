use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use tracklens::aggregate::Field;
use tracklens::selection::{Focus, SelectionState};
use tracklens::views::genres::GenreChart;
use tracklens::views::perceptive::{hover_emphasis, PerceptiveChart};
use tracklens::views::technical::TechnicalChart;
use tracklens::views::ChartOutcome;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn fmt_opt(v: Option<f64>, precision: usize) -> String {
    match v {
        Some(x) => format!("{:.*}", precision, x),
        None => "N/A".to_string(),
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("❌ Error serializing output: {}", e),
    }
}

/// One compact document per line, for streams consumers read line by line.
pub fn print_json_line<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("❌ Error serializing output: {}", e),
    }
}

/// Prints a chart either as JSON or through `render`; empty selections get
/// an explicit notice instead of an empty table.
pub fn emit<T: Serialize>(outcome: &ChartOutcome<T>, json: bool, render: impl Fn(&T)) {
    if json {
        print_json(outcome);
        return;
    }
    match outcome {
        ChartOutcome::Ready(chart) => render(chart),
        ChartOutcome::NoData { reason } => print_no_data(reason),
    }
}

pub fn print_no_data(reason: &str) {
    let mut table = new_table();
    table.add_row(vec![Cell::new(format!("∅ {}", reason)).fg(Color::Yellow)]);
    println!("\n{}", table);
}

pub fn print_genre_chart(chart: &GenreChart) {
    println!(
        "\n🎸 === GENRES vs RELEASE YEAR ({:.0}–{:.0}) ===",
        chart.year_extent.0, chart.year_extent.1
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Genre").add_attribute(Attribute::Bold),
        Cell::new("Tracks"),
        Cell::new("Mean Year").fg(Color::Cyan),
        Cell::new("Std Dev"),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Opacity"),
    ]);
    right_align(&mut table, 1, 6);

    for s in &chart.stats {
        let dev = s.deviation(Field::Year);
        let emphasis = chart
            .genre_emphasis
            .iter()
            .find(|(g, _)| *g == s.key)
            .map(|(_, e)| *e);
        let mut name = Cell::new(&s.label);
        if emphasis.is_some_and(|e| !e.outlined) && chart.selected.is_some() {
            name = name.add_attribute(Attribute::Bold).fg(Color::Green);
        }
        table.add_row(vec![
            name,
            Cell::new(s.count),
            Cell::new(fmt_opt(s.mean(Field::Year), 1)).fg(Color::Cyan),
            Cell::new(fmt_opt(dev.map(|d| d.std), 1)),
            Cell::new(fmt_opt(dev.map(|d| d.min), 0)),
            Cell::new(fmt_opt(dev.map(|d| d.max), 0)),
            Cell::new(fmt_opt(emphasis.map(|e| e.opacity as f64), 2)),
        ]);
    }
    println!("{}", table);

    if let Some(p) = chart.points.iter().find(|p| p.pinned) {
        println!(
            "📌 {} — {} ({}, {:.0})",
            p.point.track_name, p.point.artist, p.point.genre, p.year
        );
    }
    println!("   {} points plotted.", chart.points.len());
}

pub fn print_technical_chart(chart: &TechnicalChart) {
    let scope = chart.genre.as_deref().unwrap_or("all genres");
    println!(
        "\n📈 === {} BY YEAR ({}) ===",
        chart.attribute.axis_label().to_uppercase(),
        scope
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Year").add_attribute(Attribute::Bold),
        Cell::new(chart.attribute.axis_label()).fg(Color::Cyan),
        Cell::new("Popularity"),
        Cell::new("Color"),
    ]);
    right_align(&mut table, 1, 2);

    for p in &chart.points {
        table.add_row(vec![
            Cell::new(p.year),
            Cell::new(format!("{:.2}", p.value)).fg(Color::Cyan),
            Cell::new(fmt_opt(p.popularity, 1)),
            Cell::new(&p.color),
        ]);
    }
    println!("{}", table);

    let legend: Vec<String> = chart
        .legend
        .iter()
        .map(|(range, color)| format!("{} {}", range, color))
        .collect();
    println!("   Popularity: {}", legend.join(" | "));
    println!(
        "   y: [{:.2}, {:.2}]  x: [{:.0}, {:.0}]",
        chart.y_extent.0, chart.y_extent.1, chart.x_extent.0, chart.x_extent.1
    );
}

pub fn print_perceptive_chart(chart: &PerceptiveChart) {
    let scope = chart.genre.as_deref().unwrap_or("all genres");
    println!("\n🎧 === PERCEPTIVE FEATURES BY POPULARITY ({}) ===", scope);

    let mut table = new_table();
    let mut header = vec![
        Cell::new("Popularity").add_attribute(Attribute::Bold),
        Cell::new("Tracks"),
    ];
    let emphasis = hover_emphasis(None);
    for e in &emphasis {
        header.push(Cell::new(e.feature.to_string()).fg(Color::Cyan));
    }
    table.add_row(header);
    right_align(&mut table, 1, 1 + emphasis.len());

    for b in &chart.buckets {
        let mut row = vec![Cell::new(&b.label), Cell::new(format!("{} tracks", b.count))];
        for e in &emphasis {
            row.push(Cell::new(fmt_opt(b.mean(e.feature), 3)));
        }
        table.add_row(row);
    }
    println!("{}", table);
    println!("   Average (0–1 scale), y max {:.3}", chart.y_max);
}

pub fn print_selection(step: usize, label: &str, state: &SelectionState) {
    let focus = match &state.focus {
        Focus::Idle => "idle".to_string(),
        Focus::Category(c) => format!("genre '{}'", c),
        Focus::Point { point, restore } => format!(
            "track '{}' (restores {})",
            point.track_name,
            restore.as_deref().unwrap_or("idle")
        ),
    };
    let range = match state.year_range {
        Some(r) => format!("{:.0}–{:.0}", r.min, r.max),
        None => "full range".to_string(),
    };
    println!(
        "\n🖱️  [{}] {} → {} | years: {} | tooltip pinned: {}",
        step, label, focus, range, state.tooltip_pinned
    );
}
