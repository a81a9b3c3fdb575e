use std::sync::Arc;

use ecolens::csv::CsvDirSource;
use ecolens::{Ecolens, Indicator, RollingWindow};
use ecolens_mock::MockSource;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,ecolens=trace (build with --features tracing)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // A CSV directory first (ECOLENS_DATA_DIR, optional), fixtures as the fallback.
    let mut builder = Ecolens::builder().rolling_window(RollingWindow::Short);
    if let Ok(dir) = std::env::var("ECOLENS_DATA_DIR") {
        builder = builder.with_source(Arc::new(CsvDirSource::new(dir)));
    }
    let mut lens = builder.with_source(Arc::new(MockSource::new())).build()?;

    for failure in lens.load() {
        eprintln!("load failed: {failure}");
    }

    for indicator in Indicator::ALL {
        let s = lens.summary(indicator)?;
        println!(
            "{:<22} latest {} = {:>10.2}  mean {:>10.2}  range {:>10.2}  cv {:>6.2}%  change {}",
            indicator.label(),
            s.latest.date,
            s.latest.value,
            s.stats.mean,
            s.stats.range(),
            s.coefficient_of_variation,
            s.latest_change
                .filter(|c| c.is_finite())
                .map_or_else(|| "n/a".to_string(), |c| format!("{c:+.2}%")),
        );
    }

    let merged = lens.merged()?;
    println!();
    for indicator in Indicator::ALL {
        let ma_key = format!("{}_ma12", indicator.key());
        if let Some(ma) = merged.values(&ma_key).last() {
            println!("{:<22} 12-period moving average {ma:>10.2}", indicator.label());
        }
    }

    let corr = lens.correlations();
    println!("\ncorrelation (cpi, usdinr, nifty):");
    for row in corr.grid {
        println!("  {:>6.2} {:>6.2} {:>6.2}", row[0], row[1], row[2]);
    }

    let rolling = lens.rolling(Indicator::UsdInr, Indicator::Nifty)?;
    if let (Some(date), Some(r)) = (rolling.dates.last(), rolling.values.last()) {
        println!("\nrolling {}-period USD/INR vs NIFTY at {date}: {r:.3}", rolling.window);
    }

    println!("\nmonthly change distribution (USD/INR | NIFTY):");
    for bin in lens.return_histogram(Indicator::UsdInr, Indicator::Nifty)? {
        println!("  {:>16}  {:>3} | {:>3}", bin.range_label, bin.count_a, bin.count_b);
    }

    let report = lens.report();
    for w in &report.warnings {
        eprintln!("warning: {w}");
    }
    Ok(())
}
