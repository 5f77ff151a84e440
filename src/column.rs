/// Defines the position of each bid field in a row.
///
/// Indices start at 0. The defaults match the monthly sales export, where the title is the
/// first column, the bid id the second, the winning bid amount the fifth and the fund the ninth.
///
/// # Examples
/// ```
/// // a trimmed down four column file: id, title, fund, amount
/// use bid_sort::column::Columns;
/// let columns = Columns::new()
///     .with_bid_id(0)
///     .with_title(1)
///     .with_fund(2)
///     .with_amount(3);
/// assert_eq!(columns.width(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    title: usize,
    bid_id: usize,
    amount: usize,
    fund: usize,
}

impl Columns {
    /// Create the default [Columns] layout
    pub fn new() -> Columns {
        Columns {
            title: 0,
            bid_id: 1,
            amount: 4,
            fund: 8,
        }
    }

    pub fn title(&self) -> usize {
        self.title
    }

    pub fn bid_id(&self) -> usize {
        self.bid_id
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn fund(&self) -> usize {
        self.fund
    }

    /// Minimal number of fields a row must have to carry every column
    pub fn width(&self) -> usize {
        [self.title, self.bid_id, self.amount, self.fund]
            .iter()
            .max()
            .map_or(0, |max| max + 1)
    }

    pub fn with_title(mut self, index: usize) -> Columns {
        self.title = index;
        self
    }

    pub fn with_bid_id(mut self, index: usize) -> Columns {
        self.bid_id = index;
        self
    }

    pub fn with_amount(mut self, index: usize) -> Columns {
        self.amount = index;
        self
    }

    pub fn with_fund(mut self, index: usize) -> Columns {
        self.fund = index;
        self
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns::new()
    }
}
