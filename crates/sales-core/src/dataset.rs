// File: crates/sales-core/src/dataset.rs
// Summary: Sales records, CSV loading with numeric coercion, and the shared dataset state.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexSet;
use tracing::{debug, error};

use crate::error::{ChartError, LoadError};

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Category", "Year", "Sales", "Cost", "Profit", "Rating"];

/// One sales observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub category: String,
    pub year: String,
    pub sales: f64,
    pub cost: f64,
    pub profit: f64,
    pub rating: f64,
}

impl Record {
    /// A record with all amounts zeroed; chain `with_*` to fill them in.
    pub fn new(category: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            year: year.into(),
            sales: 0.0,
            cost: 0.0,
            profit: 0.0,
            rating: 0.0,
        }
    }

    pub fn with_sales(mut self, sales: f64) -> Self { self.sales = sales; self }
    pub fn with_cost(mut self, cost: f64) -> Self { self.cost = cost; self }
    pub fn with_profit(mut self, profit: f64) -> Self { self.profit = profit; self }
    pub fn with_rating(mut self, rating: f64) -> Self { self.rating = rating; self }

    /// Read the amount named by `metric`.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sales => self.sales,
            Metric::Cost => self.cost,
            Metric::Profit => self.profit,
        }
    }
}

/// Summable amount a bar chart can plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    #[default]
    Sales,
    Cost,
    Profit,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Sales, Metric::Cost, Metric::Profit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Cost => "Cost",
            Metric::Profit => "Profit",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::InvalidSelection {
                selector: "metric".to_string(),
                value: s.to_string(),
            })
    }
}

/// Ordered, read-only collection of records shared by every chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Parse CSV from any reader. Header names are matched case-insensitively
    /// after trimming; extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();
        debug!(?headers, "dataset header");

        let mut idx = [0usize; 6];
        for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or(LoadError::MissingColumn(name))?;
        }
        let [i_category, i_year, i_sales, i_cost, i_profit, i_rating] = idx;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let text = |i: usize| row.get(i).unwrap_or("").to_string();
            let number = |i: usize, column: &'static str| parse_amount(row.get(i).unwrap_or(""), line, column);

            records.push(Record {
                category: text(i_category),
                year: text(i_year),
                sales: number(i_sales, "Sales")?,
                cost: number(i_cost, "Cost")?,
                profit: number(i_profit, "Profit")?,
                rating: number(i_rating, "Rating")?,
            });
        }
        debug!(rows = records.len(), "dataset parsed");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let set: IndexSet<&str> = self.records.iter().map(|r| r.category.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<String> {
        let set: IndexSet<&str> = self.records.iter().map(|r| r.year.as_str()).collect();
        let mut years = set.into_iter().map(str::to_string).collect::<Vec<_>>();
        years.sort();
        years
    }
}

/// Empty cells count as zero; anything else must parse as a number.
fn parse_amount(raw: &str, line: u64, column: &'static str) -> Result<f64, LoadError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    s.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        line,
        column,
        value: s.to_string(),
    })
}

/// Result of the one-time dataset load, shared read-only by every chart.
#[derive(Debug)]
pub enum DatasetState {
    Ready(Dataset),
    Failed(LoadError),
}

impl DatasetState {
    /// Load `path`, logging (not propagating) a failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Dataset::from_path(path) {
            Ok(ds) => {
                tracing::info!(rows = ds.len(), path = %path.display(), "data loaded");
                DatasetState::Ready(ds)
            }
            Err(err) => {
                error!(error = %err, path = %path.display(), "error loading the data");
                DatasetState::Failed(err)
            }
        }
    }
}

impl From<Dataset> for DatasetState {
    fn from(ds: Dataset) -> Self {
        DatasetState::Ready(ds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Category,Year,Sales,Cost,Profit,Rating,Region
Sports,2020,10,4,6,4.5,North
Home,2020, 20 ,8,12,3.2,South
Sports,2021,,1,2,5,East
";

    #[test]
    fn parses_rows_and_coerces_numbers() {
        let ds = Dataset::from_reader(CSV.as_bytes()).expect("parse");
        assert_eq!(ds.len(), 3);
        let r = &ds.records()[1];
        assert_eq!(r.category, "Home");
        assert_eq!(r.year, "2020");
        assert_eq!(r.sales, 20.0);
        assert_eq!(r.rating, 3.2);
        // empty cell coerces to zero
        assert_eq!(ds.records()[2].sales, 0.0);
    }

    #[test]
    fn header_order_does_not_matter() {
        let csv = "rating,profit,cost,sales,year,category\n4,1,2,3,2022,Books\n";
        let ds = Dataset::from_reader(csv.as_bytes()).expect("parse");
        let r = &ds.records()[0];
        assert_eq!((r.category.as_str(), r.year.as_str()), ("Books", "2022"));
        assert_eq!((r.sales, r.cost, r.profit, r.rating), (3.0, 2.0, 1.0, 4.0));
    }

    #[test]
    fn missing_column_is_reported() {
        let err = Dataset::from_reader("Category,Year,Sales\nA,2020,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Cost")));
    }

    #[test]
    fn non_numeric_amount_is_reported_with_line() {
        let csv = "Category,Year,Sales,Cost,Profit,Rating\nA,2020,lots,1,1,1\n";
        match Dataset::from_reader(csv.as_bytes()).unwrap_err() {
            LoadError::InvalidNumber { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "Sales");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn distinct_categories_and_years() {
        let ds = Dataset::from_records(vec![
            Record::new("Home", "2021"),
            Record::new("Sports", "2020"),
            Record::new("Home", "2019"),
        ]);
        assert_eq!(ds.categories(), vec!["Home", "Sports"]);
        assert_eq!(ds.years(), vec!["2019", "2020", "2021"]);
    }

    #[test]
    fn metric_tokens_parse_case_insensitively() {
        assert_eq!("profit".parse::<Metric>().unwrap(), Metric::Profit);
        assert!("Rating".parse::<Metric>().is_err());
    }
}
