//! Query service module.
//!
//! ## Components
//!
//! - [`QueryService`]: `lookup`, `insert`, `delete`, `range_by_price`,
//!   `range_by_pattern`, and `execute` for typed commands
//! - [`Response`]: result record for the output sink
//! - [`run_script`]: batch driver for the line protocol, streaming
//!   responses to a sink and returning a [`ScriptSummary`]
//!
//! ## Control Flow
//!
//! ```text
//! Command -> QueryService -> AvlIndex (range scan)
//!                         -> PatternMatcher (pattern queries)
//!         <- Response
//! ```

pub mod query;
pub mod response;
pub mod script;

pub use query::QueryService;
pub use response::Response;
pub use script::{run_script, ScriptSummary};
