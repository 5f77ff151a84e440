use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Error};
use benchmark_rs::benchmarks::Benchmarks;
use benchmark_rs::stopwatch::StopWatch;
use data_encoding::HEXLOWER;
use simple_logger::SimpleLogger;

use bid_sort::bid::Bid;
use bid_sort::sort::{is_sorted, Algorithm};

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Clone)]
pub struct BenchmarkConfig {
    inputs: BTreeMap<usize, Vec<Bid>>,
    algorithm: Algorithm,
    description: String,
}

impl BenchmarkConfig {
    pub fn new(inputs: BTreeMap<usize, Vec<Bid>>, algorithm: Algorithm, description: &str) -> BenchmarkConfig {
        BenchmarkConfig {
            inputs,
            algorithm,
            description: description.to_string(),
        }
    }

    pub fn get_input(&self, key: usize) -> Result<Vec<Bid>, Error> {
        self.inputs.get(&key)
            .cloned()
            .ok_or_else(|| anyhow!("no input of {} bids", key))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl Display for BenchmarkConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "algorithm: {}, description: {}",
                 self.algorithm,
                 self.description,
        )
    }
}

fn random_title() -> String {
    HEXLOWER.encode(&rand::random::<[u8; 8]>())
}

fn create_inputs(count: usize, step: usize, sorted: bool) -> BTreeMap<usize, Vec<Bid>> {
    let mut inputs: BTreeMap<usize, Vec<Bid>> = BTreeMap::new();
    for i in 1..=count {
        let number_of_bids = i * step;
        let mut bids: Vec<Bid> = (0..number_of_bids)
            .map(|j| {
                Bid::new()
                    .with_title(random_title())
                    .with_bid_id(j.to_string())
                    .with_str_fund("General Fund")
            })
            .collect();
        if sorted {
            Algorithm::Quick.sort(&mut bids);
        }
        inputs.insert(number_of_bids, bids);
    }
    inputs
}

fn sort(stop_watch: &mut StopWatch, config: BenchmarkConfig, work: usize) -> Result<(), Error> {
    stop_watch.pause();
    let mut bids = config.get_input(work)?;
    log::info!("Start {} of {} bids", config.algorithm(), work);
    stop_watch.resume();
    config.algorithm().sort(&mut bids);
    stop_watch.pause();
    log::info!("Finish {} of {} bids", config.algorithm(), work);
    if !is_sorted(&bids) {
        return Err(anyhow!("{} left {} bids unsorted", config.algorithm(), work));
    }
    Ok(())
}

#[test]
fn bid_sort_bench() -> Result<(), Error> {
    SimpleLogger::new().init().unwrap();
    log::info!("Started bid_sort_bench.");

    let bench_results_dir = PathBuf::from("./target/benchmarks/");
    if !bench_results_dir.exists() {
        fs::create_dir_all(bench_results_dir.clone())
            .with_context(|| anyhow!("{}", bench_results_dir.to_string_lossy()))?;
    }

    let random_inputs = create_inputs(10, 1_000, false);
    let sorted_inputs = create_inputs(10, 1_000, true);

    let mut benchmarks = Benchmarks::new("bid-sort");

    for algorithm in Algorithm::all() {
        let name = algorithm.name().to_lowercase().replace(' ', "-");

        benchmarks.add(
            &format!("{}-random", name),
            sort,
            BenchmarkConfig::new(random_inputs.clone(), algorithm, "random titles"),
            random_inputs.keys().cloned().collect(),
            3,
            0,
        )?;

        benchmarks.add(
            &format!("{}-sorted", name),
            sort,
            BenchmarkConfig::new(sorted_inputs.clone(), algorithm, "sorted titles"),
            sorted_inputs.keys().cloned().collect(),
            3,
            0,
        )?;
    }

    benchmarks.run()?;
    benchmarks.save_to_csv(bench_results_dir.clone(), true, true)?;
    benchmarks.save_to_json(bench_results_dir.clone())?;

    log::info!("Finished bid_sort_bench.");
    Ok(())
}
