pub mod stockanalysis;
pub mod yahoo_finance;
