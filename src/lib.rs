// public
pub mod dialect;
pub mod generator;
pub mod statement;

mod error;
pub use error::GenerateSqlError;

mod logger;
pub use logger::{setup_info_logger, setup_logger};

mod profile;
pub use profile::{Db2iProfile, ProfileError, DB2I_PRODUCT_NAME_PREFIX};

mod sql;
pub use sql::{Affected, Sql};

mod validation;
pub use validation::{ValidationError, ValidationErrors};

mod value;
pub use value::{format_value, render_row_tuple, ColumnValue};

// export 3rd party dependencies
pub use chrono::{NaiveDate, NaiveDateTime};
pub use tracing::level_filters::LevelFilter;
