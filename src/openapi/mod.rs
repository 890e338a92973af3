//! OpenAPI description loading

mod parser;

pub use parser::{parse_spec, Server, SpecDocument, STAGE_KEYWORDS};
