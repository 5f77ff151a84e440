use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use bid_sort::bid::Bid;
use data_encoding::HEXLOWER;
use rand::Rng;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result.set_extension("csv");
    result
}

/// Random bids with titles drawn from `distinct` values, so duplicates are likely when
/// `distinct` is small.
#[allow(dead_code)]
pub fn random_bids(n: usize, distinct: usize) -> Vec<Bid> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| {
            let title = HEXLOWER.encode(&rng.gen_range(0..distinct as u64).to_be_bytes());
            Bid::new()
                .with_title(title)
                .with_bid_id(format!("{}", 90_000 + i))
                .with_str_fund("General Fund")
                .with_amount(rng.gen_range(0..100_000) as f64 / 100.0)
        })
        .collect()
}

/// Write bids in the monthly sales layout
#[allow(dead_code)]
pub fn write_bids(path: &PathBuf, bids: &[Bid]) -> Result<(), anyhow::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "ArticleTitle,ArticleID,Department,CloseDate,WinningBid,InventoryID,VehicleID,ReceiptNumber,Fund")?;
    for bid in bids {
        writeln!(
            writer,
            "{},{},General Services,12/1/2016,${:.2},,,,{}",
            bid.title(),
            bid.bid_id(),
            bid.amount(),
            bid.fund()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Order independent view of complete records
#[allow(dead_code)]
pub fn fingerprint(bids: &[Bid]) -> Vec<String> {
    let mut lines: Vec<String> = bids.iter().map(|b| b.to_string()).collect();
    lines.sort();
    lines
}

#[allow(dead_code)]
pub fn titles(bids: &[Bid]) -> Vec<String> {
    bids.iter().map(|b| b.title().clone()).collect()
}
