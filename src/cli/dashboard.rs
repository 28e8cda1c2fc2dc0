use ansi_term::Style;
use anyhow::Result;

use crate::{record::analysis, storage::blob_store::BlobStore};

use super::{load_store, output::format_yen};

/// Prints the headline numbers and the revenue breakdown. Everything is
/// recomputed from the store on each invocation.
pub async fn process_dashboard_command(blob_store: &impl BlobStore) -> Result<()> {
    let store = load_store(blob_store).await;
    let summary = analysis::summary(&store);
    let breakdown = analysis::revenue_breakdown(&store);

    let heading = Style::new().bold();

    println!("{}", heading.paint("Totals"));
    println!("Total sales\t{}", format_yen(summary.total_sales));
    println!("Average hourly\t{}", format_yen(summary.avg_hourly_wage));
    println!("Sessions\t{}", summary.session_count);
    println!("Average customers\t{}", summary.avg_customers);
    println!();

    println!("{}", heading.paint("Revenue breakdown"));
    for (label, slice) in [
        ("Entrance fees", &breakdown.entrance),
        ("Tips", &breakdown.tips),
        ("Special rewards", &breakdown.special),
    ] {
        println!("{label}\t{}\t{}", format_yen(slice.amount), slice.share);
    }
    Ok(())
}
