use std::io::Write;

use anyhow::Result;

use crate::models::IndexInfo;

/// Each report shows at most this many indexes.
const TOP_N: usize = 5;

/// Top indexes by primary-store size.
pub fn print_largest_indexes(records: &[IndexInfo], out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nPrinting largest indexes by storage size")?;

    let mut ranked: Vec<&IndexInfo> = records.iter().collect();
    ranked.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));

    for index in ranked.iter().take(TOP_N) {
        writeln!(out, "Index: {}", index.name)?;
        writeln!(out, "Size: {:.2} GB", index.size_gb())?;
    }
    Ok(())
}

/// Top indexes by primary-shard count.
pub fn print_most_shards(records: &[IndexInfo], out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nPrinting largest indexes by shard count")?;

    let mut ranked: Vec<&IndexInfo> = records.iter().collect();
    ranked.sort_by(|a, b| b.shard_count.cmp(&a.shard_count));

    for index in ranked.iter().take(TOP_N) {
        writeln!(out, "Index: {}", index.name)?;
        writeln!(out, "Shards: {}", index.shard_count)?;
    }
    Ok(())
}

/// Top indexes by GB-per-shard ratio, with the shard count that would bring
/// each one back inside the budget. `total_cmp` keeps NaN and infinite
/// ratios (zero-shard indexes) at the top of the list.
pub fn print_least_balanced(records: &[IndexInfo], out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nPrinting least balanced indexes")?;

    let mut ranked: Vec<&IndexInfo> = records.iter().collect();
    ranked.sort_by(|a, b| b.balance_ratio().total_cmp(&a.balance_ratio()));

    for index in ranked.iter().take(TOP_N) {
        writeln!(out, "Index: {}", index.name)?;
        writeln!(out, "Size: {:.2} GB", index.size_gb())?;
        writeln!(out, "Shards: {}", index.shard_count)?;
        // truncated, not rounded
        writeln!(out, "Balance Ratio: {}", index.balance_ratio() as i64)?;
        writeln!(out, "Recommended shard count is {}", index.recommended_shards())?;
    }
    Ok(())
}
