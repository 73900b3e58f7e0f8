//! # epiweek-calendar
//!
//! Conversion between calendar dates and epidemiological week triples
//! under the WHO (ISO-8601, Monday-start) and CDC (MMWR, Sunday-start)
//! week-numbering conventions.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"decompose()"| B["EpiWeek (WHO)"]
//!     A -->|"locate(convention)"| C["EpiWeekRef"]
//!     C -->|"to_date(convention)"| A
//!     D["(year, week, weekday)"] -->|"compose() / compose_with()"| A
//!     E["Column x3"] -->|"compose_batch()"| F["Vec of Option NaiveDate"]
//!     F -->|"decompose_batch()"| G["Vec of Option EpiWeek"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use epiweek_calendar::{Column, ComposeOptions, Convention, compose, compose_batch, decompose};
//!
//! // Week 1 of 2017 starts on Monday Jan 2 (WHO) and Sunday Jan 1 (CDC).
//! let who = compose(2017, 1, 1, Convention::Who).unwrap();
//! let cdc = compose(2017, 1, 1, Convention::Cdc).unwrap();
//! assert_eq!(who, NaiveDate::from_ymd_opt(2017, 1, 2).unwrap());
//! assert_eq!(cdc, NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
//!
//! // Dec 31 2016 still belongs to ISO week 2016-W52.
//! let week = decompose(NaiveDate::from_ymd_opt(2016, 12, 31).unwrap());
//! assert_eq!((week.year(), week.week()), (2016, 52));
//!
//! // Batches broadcast scalars and propagate missing values.
//! let dates = compose_batch(
//!     &Column::scalar(2017),
//!     &Column::sequence([1, 2, 3]),
//!     &Column::scalar(1),
//!     &ComposeOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(dates.len(), 3);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convention` | WHO / CDC conventions and weekday numbering |
//! | `week` | `EpiWeek` and `EpiWeekRef` value types |
//! | `compose` | Week triple to date, week-1 start, weeks per year |
//! | `decompose` | Date to week, date parsing, convention-aware `locate` |
//! | `broadcast` | Scalar-or-sequence arguments and length alignment |
//! | `batch` | Element-wise batch evaluation |
//! | `config` | Compose options and policies |
//! | `error` | Error types |

mod batch;
mod broadcast;
mod compose;
mod config;
mod convention;
mod decompose;
mod error;
mod week;

pub use batch::{compose_batch, decompose_batch, decompose_str_batch, locate_batch, parse_batch};
pub use broadcast::{Column, broadcast_len};
pub use compose::{compose, compose_with, week1_start, weeks_in_year};
pub use config::{BroadcastPolicy, ComposeOptions, Week53Policy};
pub use convention::Convention;
pub use decompose::{decompose, decompose_str, locate, parse_date};
pub use error::CalendarError;
pub use week::{EpiWeek, EpiWeekRef};
