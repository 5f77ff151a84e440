use std::path::PathBuf;

use anyhow::{anyhow, Context};
use csv::{ReaderBuilder, StringRecord};
use regex::Regex;

use crate::bid::Bid;
use crate::column::Columns;
use crate::config::Config;
use crate::currency::parse_currency_or_default;

/// Load bids from a delimited text file
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use bid_sort::bid::Bid;
/// use bid_sort::load::Loader;
///
/// fn load_tsv(input: PathBuf) -> Result<Vec<Bid>, anyhow::Error> {
///     let mut loader = Loader::new(input);
///     loader.with_delimiter(b'\t');
///     loader.load()
/// }
/// ```
pub struct Loader {
    path: PathBuf,
    delimiter: u8,
    has_headers: bool,
    strip_char: char,
    thousands_separator: Option<char>,
    ignore_lines: Option<Regex>,
    columns: Columns,
}

impl Loader {
    /// Create a default Loader definition.
    ///
    /// * The default delimiter is a comma (',')
    /// * The first row is a header and is skipped
    /// * The amount column has its '$' stripped before parsing
    /// * The amount column has its ',' thousands separators stripped before parsing
    /// * rows whose first field starts with '#' are ignored
    /// * columns follow the monthly sales export, see [Columns::new]
    pub fn new(path: PathBuf) -> Loader {
        Loader {
            path,
            delimiter: b',',
            has_headers: true,
            strip_char: '$',
            thousands_separator: Some(','),
            ignore_lines: Some(Regex::new("^#").unwrap()),
            columns: Columns::new(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Set the field delimiter. The default is ','
    pub fn with_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
    }

    /// Specify whether the first row is a header. The default is true
    pub fn with_headers(&mut self, has_headers: bool) {
        self.has_headers = has_headers;
    }

    /// Set the character removed from the amount before parsing. The default is '$'
    pub fn with_strip_char(&mut self, strip_char: char) {
        self.strip_char = strip_char;
    }

    /// Set the thousands separator removed from the amount before parsing, `None` keeps it.
    /// The default is ','
    pub fn with_thousands_separator(&mut self, thousands_separator: Option<char>) {
        self.thousands_separator = thousands_separator;
    }

    /// Specify which rows to ignore. Each row whose first field matches the regex is skipped.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r);
    }

    /// Do not ignore any row
    pub fn without_ignore_lines(&mut self) {
        self.ignore_lines = None;
    }

    /// Set the column layout
    pub fn with_columns(&mut self, columns: Columns) {
        self.columns = columns;
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.path.clone(),
            self.delimiter,
            self.has_headers,
            self.strip_char,
            self.thousands_separator,
            self.ignore_lines.clone(),
            self.columns.clone(),
        )
    }

    /// Read all bids in file order.
    ///
    /// An input that cannot be opened is an error. A malformed row is logged and ends the load,
    /// the bids read before it are returned.
    pub fn load(&self) -> Result<Vec<Bid>, anyhow::Error> {
        let config = self.create_config();
        Self::internal_load(&config)
    }

    pub(crate) fn internal_load(config: &Config) -> Result<Vec<Bid>, anyhow::Error> {
        log::info!("Loading bids from {}", config.path().display());
        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter())
            .has_headers(config.has_headers())
            .flexible(true)
            .from_path(config.path())
            .with_context(|| anyhow!("path: {}", config.path().display()))?;

        let mut bids = Vec::new();
        for (n, result) in reader.records().enumerate() {
            let bid = result
                .map_err(anyhow::Error::from)
                .and_then(|record| {
                    if Self::ignore(&record, config) {
                        Ok(None)
                    } else {
                        Self::to_bid(&record, config).map(Some)
                    }
                })
                .with_context(|| format!("file: {}, row: {}", config.path().display(), n + 1));

            match bid {
                Ok(Some(bid)) => {
                    log::debug!("Item: {}, Fund: {}, Amount: {}", bid.title(), bid.fund(), bid.amount());
                    bids.push(bid);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Stopped loading after {} bids: {:#}", bids.len(), e);
                    break;
                }
            }
        }
        log::info!("Loaded {} bids from {}", bids.len(), config.path().display());
        Ok(bids)
    }

    fn ignore(record: &StringRecord, config: &Config) -> bool {
        match (config.ignore_lines(), record.get(0)) {
            (Some(r), Some(first)) => r.is_match(first.trim()),
            _ => false,
        }
    }

    fn to_bid(record: &StringRecord, config: &Config) -> Result<Bid, anyhow::Error> {
        let columns = config.columns();
        if record.len() < columns.width() {
            return Err(
                anyhow!(
                    "Expected at least {} fields but found {} using '{}' as delimiter",
                    columns.width(),
                    record.len(),
                    config.delimiter() as char,
                )
            );
        }

        let amount = match config.thousands_separator() {
            Some(separator) => {
                let grouped = record[columns.amount()].replace(separator, "");
                parse_currency_or_default(&grouped, config.strip_char())
            }
            None => parse_currency_or_default(&record[columns.amount()], config.strip_char()),
        };
        Ok(
            Bid::new()
                .with_str_title(&record[columns.title()])
                .with_str_bid_id(&record[columns.bid_id()])
                .with_str_fund(&record[columns.fund()])
                .with_amount(amount)
        )
    }
}
