use std::path::PathBuf;
use regex::Regex;
use crate::column::Columns;

#[derive(Clone)]
pub(crate) struct Config {
    path: PathBuf,
    delimiter: u8,
    has_headers: bool,
    strip_char: char,
    thousands_separator: Option<char>,
    ignore_lines: Option<Regex>,
    columns: Columns,
}

impl Config {
    pub(crate) fn new(
        path: PathBuf,
        delimiter: u8,
        has_headers: bool,
        strip_char: char,
        thousands_separator: Option<char>,
        ignore_lines: Option<Regex>,
        columns: Columns,
    ) -> Config {
        Config {
            path,
            delimiter,
            has_headers,
            strip_char,
            thousands_separator,
            ignore_lines,
            columns,
        }
    }

    pub(crate) fn path(&self) -> &PathBuf {
        &self.path
    }

    pub(crate) fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub(crate) fn has_headers(&self) -> bool {
        self.has_headers
    }

    pub(crate) fn strip_char(&self) -> char {
        self.strip_char
    }

    pub(crate) fn thousands_separator(&self) -> Option<char> {
        self.thousands_separator
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }

    pub(crate) fn columns(&self) -> &Columns {
        &self.columns
    }
}
