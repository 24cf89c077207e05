use chrono::NaiveDateTime;
use std::fmt;

/// Date format used for every date comparison and for the recorded date cell
pub const DATE_FORMAT: &str = "%Y-%m-%d";

//==============================================================================
// Cells
//==============================================================================

/// Value held by a single worksheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDateTime),
    /// Excel error value such as `#N/A`, kept as its display text
    Error(String),
}

impl CellValue {
    /// True for cells that end a top-down table scan
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric content, if the cell holds a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text content, if the cell holds text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Normalize the cell to a `YYYY-MM-DD` string for date matching.
    ///
    /// Text is taken as-is, date values are formatted, anything else has
    /// no date reading.
    pub fn as_date_string(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Date(dt) => Some(dt.format(DATE_FORMAT).to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Date(dt) => write!(f, "{}", dt),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// A stored cell: its value and, when the workbook had one, its formula
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub value: CellValue,
    /// Formula text without the leading `=`
    pub formula: Option<String>,
}

/// Convert a 1-based column number to its Excel letter (1→A, 26→Z, 27→AA)
pub fn column_letter(column: u16) -> String {
    let mut result = String::new();
    let mut num = column as u32;

    while num > 0 {
        let remainder = (num - 1) % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        num = (num - 1) / 26;
    }

    result
}

/// A1-style reference for a 1-based (row, column) coordinate
pub fn cell_name(row: u32, column: u16) -> String {
    format!("{}{}", column_letter(column), row)
}

//==============================================================================
// Rates and prices
//==============================================================================

/// The four conversion figures published for one date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRecord {
    pub usd: f64,
    pub usd_deferred: f64,
    pub eur: f64,
    pub eur_deferred: f64,
}

impl RateRecord {
    /// The (primary, deferred) pair that applies to a currency
    pub fn pair(&self, currency: Currency) -> (f64, f64) {
        match currency {
            Currency::Euro => (self.eur, self.eur_deferred),
            Currency::Dollar => (self.usd, self.usd_deferred),
        }
    }
}

impl fmt::Display for RateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "USD {} (deferred {}), EUR {} (deferred {})",
            self.usd, self.usd_deferred, self.eur, self.eur_deferred
        )
    }
}

/// Currency tag of a price row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Euro,
    Dollar,
}

impl Currency {
    /// Parse the tag as written in the price sheet. Unknown tags give `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "EVRO" => Some(Currency::Euro),
            "DOLLAR" => Some(Currency::Dollar),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Currency::Euro => "EVRO",
            Currency::Dollar => "DOLLAR",
        }
    }
}
