//! mediaquery CLI output primitives.

use console::style;

use mediaquery::{DeviceCategory, EnvironmentProbe, ViewportSnapshot};

/// Terminal palette
pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51);       // Electric cyan
    pub const MAGENTA: Color = Color::Color256(201);   // Hot magenta
    pub const VIOLET: Color = Color::Color256(135);    // Soft violet
    pub const NEON_GREEN: Color = Color::Color256(82); // Neon green
    pub const DIM: Color = Color::Color256(240);       // Dim gray
}

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}";          // ◆
    pub const DIAMOND_OUTLINE: &str = "\u{25C7}";  // ◇
    pub const TARGET_FILLED: &str = "\u{25C9}";    // ◉
    pub const TARGET_EMPTY: &str = "\u{25CE}";     // ◎
    pub const DOT: &str = "\u{00B7}";              // ·
    pub const ARROW: &str = "\u{2500}\u{25B8}";    // ─▸
}

/// Print compact version header
pub fn print_compact_header(version: &str) {
    println!(
        "  {} {} {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        style("mediaquery").fg(colors::CYAN).bold(),
        style(version).dim()
    );
}

/// Print an info message
pub fn info(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CYAN),
        msg
    );
}

/// Print a dim/secondary message
pub fn dim(msg: &str) {
    println!("  {}", style(msg).fg(colors::DIM));
}

fn device_color(device: DeviceCategory) -> console::Color {
    match device {
        DeviceCategory::Mobile => colors::MAGENTA,
        DeviceCategory::Tablet => colors::VIOLET,
        DeviceCategory::Desktop => colors::CYAN,
    }
}

/// One-line human rendering of a snapshot.
pub fn format_snapshot(snapshot: &ViewportSnapshot) -> String {
    let device = match snapshot.device() {
        Some(device) => style(device.as_str()).fg(device_color(device)).bold().to_string(),
        None => style("unset").fg(colors::DIM).to_string(),
    };

    let size = match snapshot.dimensions() {
        Some(d) => format!("{}×{}px", d.width, d.height),
        None => "unmeasured".to_string(),
    };

    let view = if snapshot.is_mobile_view() {
        "mobile view"
    } else {
        "full view"
    };

    format!(
        "{} {} {} {} {}",
        device,
        style(symbols::DOT).fg(colors::DIM),
        size,
        style(symbols::DOT).fg(colors::DIM),
        style(view).dim()
    )
}

/// Print a snapshot, either styled or as a JSON line.
pub fn snapshot(snapshot: &ViewportSnapshot, json: bool) -> miette::Result<()> {
    if json {
        let line = serde_json::to_string(snapshot)
            .map_err(|e| miette::miette!("failed to encode snapshot: {}", e))?;
        println!("{}", line);
    } else {
        println!(
            "  {} {}",
            style(symbols::ARROW).fg(colors::CYAN),
            format_snapshot(snapshot)
        );
    }
    Ok(())
}

/// Print the probe outcome.
pub fn probe(probe: &EnvironmentProbe) {
    println!("{}", environment_line(probe.is_capable(), probe.source()));
}

fn environment_line(capable: bool, source: impl std::fmt::Display) -> String {
    if capable {
        format!(
            "  {} viewport available (via {})",
            style(symbols::TARGET_FILLED).fg(colors::NEON_GREEN),
            source
        )
    } else {
        format!(
            "  {} no viewport (via {})",
            style(symbols::TARGET_EMPTY).fg(colors::MAGENTA),
            source
        )
    }
}
