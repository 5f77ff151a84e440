use std::fmt::{Display, Formatter};

/// A procurement bid.
///
/// Only the title takes part in sorting, the other fields travel with the record.
///
/// # Examples
/// ```
/// use bid_sort::bid::Bid;
/// let bid = Bid::new()
///     .with_str_bid_id("98109")
///     .with_str_title("Table")
///     .with_str_fund("General Fund")
///     .with_amount(27.0);
/// assert_eq!(bid.to_string(), "98109: Table | 27 | General Fund");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bid {
    bid_id: String,
    title: String,
    fund: String,
    amount: f64,
}

impl Bid {
    /// Create an empty [Bid] with an amount of 0.0
    pub fn new() -> Bid {
        Bid {
            bid_id: String::new(),
            title: String::new(),
            fund: String::new(),
            amount: 0.0,
        }
    }

    /// Get the bid id. Uniqueness is not enforced.
    pub fn bid_id(&self) -> &String {
        &self.bid_id
    }

    /// Get the title, the sort key.
    pub fn title(&self) -> &String {
        &self.title
    }

    /// Get the fund.
    pub fn fund(&self) -> &String {
        &self.fund
    }

    /// Get the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn with_bid_id(mut self, bid_id: String) -> Bid {
        self.bid_id = bid_id;
        self
    }

    pub fn with_str_bid_id(mut self, bid_id: &str) -> Bid {
        self.bid_id = bid_id.to_string();
        self
    }

    pub fn with_title(mut self, title: String) -> Bid {
        self.title = title;
        self
    }

    pub fn with_str_title(mut self, title: &str) -> Bid {
        self.title = title.to_string();
        self
    }

    pub fn with_fund(mut self, fund: String) -> Bid {
        self.fund = fund;
        self
    }

    pub fn with_str_fund(mut self, fund: &str) -> Bid {
        self.fund = fund.to_string();
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Bid {
        self.amount = amount;
        self
    }
}

impl Display for Bid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} | {} | {}", self.bid_id, self.title, self.amount, self.fund)
    }
}
