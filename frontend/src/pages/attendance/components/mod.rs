pub mod history;

pub use history::HistoryTable;
